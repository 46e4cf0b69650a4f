//! `repl::item` module
//!
//! Handler for applying an inventory item to an object at the current location.

use crate::RambleWorld;
use crate::error::ActionError;

use log::info;

/// Apply `item` to `object`, running whatever effect that pairing has here.
///
/// Checks, in order: the item is carried, the object is at this location,
/// and the object reacts to that item.
///
/// # Errors
/// - `NotInInventory`, `NothingToApplyTo` or `NoEffect`, per the checks above
pub fn apply_handler(world: &mut RambleWorld, item: &str, object: &str) -> Result<String, ActionError> {
    if !world.player.carries(item) {
        return Err(ActionError::NotInInventory(item.to_string()));
    }
    let room = world.player_room_mut()?;
    let effect = room
        .object(object)
        .ok_or_else(|| ActionError::NothingToApplyTo(object.to_string()))?
        .effect_for(item)
        .cloned()
        .ok_or_else(|| ActionError::NoEffect {
            item: item.to_string(),
            object: object.to_string(),
        })?;
    info!("player applied '{item}' to '{object}' in '{}'", room.id());
    Ok(effect.apply(room))
}
