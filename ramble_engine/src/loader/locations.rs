//! Location loading logic.
//!
//! Converts room definitions into runtime [`Location`]s. References are
//! checked by validation before this runs.

use std::collections::HashMap;

use log::info;
use ramble_data::{MessagesDef, RoomDef};

use crate::effect::Effect;
use crate::location::{Location, MessageKind};

/// Build one `Location` from its definition.
pub fn build_location(def: &RoomDef) -> Location {
    let mut location = Location::new(def.id.clone());

    let MessagesDef { look, enter, empty } = &def.messages;
    for (kind, text) in [(MessageKind::Look, look), (MessageKind::Enter, enter), (MessageKind::Empty, empty)] {
        if !text.is_empty() {
            location = location.with_message(kind, text.clone());
        }
    }

    for container in &def.containers {
        location = location.with_container(container.label.clone(), container.items.iter().cloned());
    }
    for exit in &def.exits {
        location = location.with_exit(exit.clone());
    }
    for exit in &def.blocked {
        location = location.with_blocked_exit(exit);
    }
    for (to, display) in &def.aliases {
        location = location.with_alias(to.clone(), display.clone());
    }
    for quest in &def.quests {
        location = location.with_quest(quest.clone());
    }
    for object in &def.objects {
        location = location.with_object(object.name.clone());
        for effect in &object.effects {
            location = location.with_effect(object.name.clone(), effect.item(), Effect::from(effect));
        }
    }
    location
}

/// Build the id-to-location map for the whole world.
pub fn build_locations(defs: &[RoomDef]) -> HashMap<String, Location> {
    let locations: HashMap<String, Location> = defs
        .iter()
        .map(|def| (def.id.clone(), build_location(def)))
        .collect();
    info!("{} locations built from room definitions", locations.len());
    locations
}
