//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that add to the player's inventory

use crate::RambleWorld;
use crate::error::ActionError;

use log::info;

/// Removes an item from the current location and adds it to inventory.
///
/// Without a container there's nowhere to put anything, so the location isn't
/// even searched.
///
/// # Errors
/// - `NowhereToPut` if no container is worn
/// - `NoSuchThing` if the item isn't at this location
pub fn take_handler(world: &mut RambleWorld, item: &str) -> Result<String, ActionError> {
    if !world.player.has_container {
        info!("player tried to take '{item}' with nothing to carry it in");
        return Err(ActionError::NowhereToPut);
    }
    let here = world.player_room_ref()?.id().to_string();
    if !world.take_item(&here, item) {
        return Err(ActionError::NoSuchThing(item.to_string()));
    }
    world.player.add_item(item);
    Ok(format!("item added to inventory: {item}"))
}

/// Takes the container item from the current location and puts it on.
///
/// Only one container exists, so wearing it a second time finds nothing.
///
/// # Errors
/// - `NoSuchThing` if the container isn't at this location
pub fn wear_handler(world: &mut RambleWorld) -> Result<String, ActionError> {
    let container = world.container_item.clone();
    let here = world.player_room_ref()?.id().to_string();
    if !world.take_item(&here, &container) {
        return Err(ActionError::NoSuchThing(container));
    }
    world.player.wear_container(container.as_str());
    info!("player is now wearing the '{container}'");
    Ok(format!("you are now wearing: {container}"))
}
