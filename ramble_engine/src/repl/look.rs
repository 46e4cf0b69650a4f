//! `repl::look` module
//!
//! Handler for looking around the current location.

use crate::RambleWorld;
use crate::error::ActionError;

use log::{error, info};

/// Describe the surroundings, first dropping any quests here that are done.
///
/// # Errors
/// - `ActionError::Lost` if the player's location doesn't resolve
pub fn look_handler(world: &mut RambleWorld) -> Result<String, ActionError> {
    let RambleWorld {
        locations,
        player,
        quests,
        ..
    } = world;
    let Some(room) = locations.get_mut(&player.location) else {
        error!("player location '{}' not found in world", player.location);
        return Err(ActionError::Lost(player.location.clone()));
    };
    let completed = quests.prune(room, player);
    info!(
        "player looked around '{}' ({} quest(s) completed)",
        room.id(),
        completed.len()
    );
    Ok(room.look_narration())
}
