//! Data structures representing the game world.
//!
//! This module defines [`RambleWorld`], the single context value that owns
//! every location, the player and the quest registry. It is built once by the
//! loader and then mutated in place by the command handlers.

use crate::error::{ActionError, MoveError};
use crate::location::Location;
use crate::player::Player;
use crate::quest::QuestRegistry;

use log::{error, info};
use std::collections::HashMap;

/// Complete state of the running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RambleWorld {
    pub title: String,
    pub intro: String,
    pub locations: HashMap<String, Location>,
    pub player: Player,
    pub quests: QuestRegistry,
    /// Item identifier accepted by the wear command.
    pub container_item: String,
}
impl RambleWorld {
    /// Create a world with no locations and the player parked at `start`.
    pub fn new_empty(start: &str, container_item: &str) -> RambleWorld {
        let world = Self {
            title: String::new(),
            intro: String::new(),
            locations: HashMap::new(),
            player: Player::new(start),
            quests: QuestRegistry::new(),
            container_item: container_item.to_string(),
        };
        info!("new, empty 'RambleWorld' created");
        world
    }

    /// Add a location, replacing any with the same id.
    pub fn insert_location(&mut self, location: Location) {
        self.locations.insert(location.id().to_string(), location);
    }

    /// Look a location up by id.
    ///
    /// # Errors
    /// - `MoveError::NotFound` if no location has that id
    pub fn lookup(&self, id: &str) -> Result<&Location, MoveError> {
        self.locations.get(id).ok_or_else(|| MoveError::NotFound(id.to_string()))
    }

    /// Resolve a move from `from` to `to` without changing anything.
    ///
    /// The target must exist, must be reachable from `from`, and must not be
    /// blocked, checked in that order.
    ///
    /// # Errors
    /// - `NotFound` for an unknown target (or origin)
    /// - `Unreachable` if there is no edge
    /// - `Blocked` if the edge is locked
    pub fn route(&self, from: &str, to: &str) -> Result<&Location, MoveError> {
        let target = self.lookup(to)?;
        let origin = self.lookup(from)?;
        if !origin.is_reachable(to) {
            return Err(MoveError::Unreachable(to.to_string()));
        }
        if origin.is_blocked(to) {
            return Err(MoveError::Blocked(to.to_string()));
        }
        Ok(target)
    }

    /// Remove one `item` from the containers of `location_id`.
    /// Returns false if the item (or the location) isn't there.
    pub fn take_item(&mut self, location_id: &str, item: &str) -> bool {
        self.locations
            .get_mut(location_id)
            .is_some_and(|loc| loc.take_item(item))
    }

    /// Obtain a reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id doesn't resolve
    pub fn player_room_ref(&self) -> Result<&Location, ActionError> {
        self.locations.get(&self.player.location).ok_or_else(|| {
            error!("player location '{}' not found in world", self.player.location);
            ActionError::Lost(self.player.location.clone())
        })
    }

    /// Obtain a mutable reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id doesn't resolve
    pub fn player_room_mut(&mut self) -> Result<&mut Location, ActionError> {
        self.locations.get_mut(&self.player.location).ok_or_else(|| {
            error!("player location '{}' not found in world", self.player.location);
            ActionError::Lost(self.player.location.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> RambleWorld {
        let mut world = RambleWorld::new_empty("hallway", "backpack");
        world.insert_location(
            Location::new("hallway")
                .with_exit("kitchen")
                .with_exit("street")
                .with_blocked_exit("street"),
        );
        world.insert_location(Location::new("kitchen").with_exit("hallway"));
        world.insert_location(Location::new("street").with_exit("hallway"));
        world.insert_location(Location::new("attic").with_container("in a box:", ["hat"]));
        world
    }

    #[test]
    fn route_checks_existence_then_edge_then_lock() {
        let world = world();
        assert_eq!(
            world.route("hallway", "cellar").unwrap_err(),
            MoveError::NotFound("cellar".into())
        );
        assert_eq!(
            world.route("hallway", "attic").unwrap_err(),
            MoveError::Unreachable("attic".into())
        );
        assert_eq!(
            world.route("hallway", "street").unwrap_err(),
            MoveError::Blocked("street".into())
        );
        assert_eq!(world.route("hallway", "kitchen").unwrap().id(), "kitchen");
    }

    #[test]
    fn unreachable_wins_over_blocked() {
        let world = world();
        // street is blocked from the hallway, but the kitchen has no edge to it at all
        assert_eq!(
            world.route("kitchen", "street").unwrap_err(),
            MoveError::Unreachable("street".into())
        );
    }

    #[test]
    fn take_item_mutates_canonical_location() {
        let mut world = world();
        assert!(world.take_item("attic", "hat"));
        assert!(!world.lookup("attic").unwrap().contains_item("hat"));
        assert!(!world.take_item("attic", "hat"));
        assert!(!world.take_item("cellar", "hat"));
    }

    #[test]
    fn lost_player_is_an_error_not_a_panic() {
        let mut world = world();
        world.player.location = "cellar".into();
        assert_eq!(world.player_room_ref().unwrap_err(), ActionError::Lost("cellar".into()));
    }
}
