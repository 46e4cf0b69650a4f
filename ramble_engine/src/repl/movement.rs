//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::RambleWorld;
use crate::error::ActionError;

use log::info;

/// Move the player to a neighboring location, if there's an open way there.
///
/// # Errors
/// - `ActionError::Move` if the destination is unknown, unreachable or locked
pub fn move_to_handler(world: &mut RambleWorld, destination: &str) -> Result<String, ActionError> {
    let leaving = world.player.location.clone();
    let narration = world.route(&leaving, destination)?.enter_narration();
    world.player.location = destination.to_string();
    info!("player moved from '{leaving}' to '{destination}'");
    Ok(narration)
}
