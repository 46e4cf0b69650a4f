//! module: quest
//!
//! Quests are named obligations listed at a location until their predicate
//! holds. Predicates are stateless and evaluated lazily on look-around.

use crate::location::Location;
use crate::player::Player;

use log::info;
use ramble_data::QuestPredicateDef;
use std::collections::HashMap;

/// The conditions that can complete a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestPredicate {
    /// Any one of the items is in the inventory.
    HasAnyItem(Vec<String>),
    /// Every one of the items is in the inventory.
    HasAllItems(Vec<String>),
    /// The container item has been put on.
    WearsContainer,
    /// The player is standing in this room.
    InRoom(String),
}
impl QuestPredicate {
    /// Evaluate the predicate against current player state.
    pub fn satisfied(&self, player: &Player) -> bool {
        match self {
            QuestPredicate::HasAnyItem(items) => items.iter().any(|i| player.carries(i)),
            QuestPredicate::HasAllItems(items) => items.iter().all(|i| player.carries(i)),
            QuestPredicate::WearsContainer => player.has_container,
            QuestPredicate::InRoom(room) => player.location == *room,
        }
    }
}

impl From<&QuestPredicateDef> for QuestPredicate {
    fn from(def: &QuestPredicateDef) -> Self {
        match def {
            QuestPredicateDef::HasAnyItem { items } => QuestPredicate::HasAnyItem(items.clone()),
            QuestPredicateDef::HasAllItems { items } => QuestPredicate::HasAllItems(items.clone()),
            QuestPredicateDef::WearsContainer => QuestPredicate::WearsContainer,
            QuestPredicateDef::InRoom { room } => QuestPredicate::InRoom(room.clone()),
        }
    }
}

/// Quest name to completion predicate. Read-only once the world is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestRegistry {
    quests: HashMap<String, QuestPredicate>,
}
impl QuestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the predicate for `name`.
    pub fn register(&mut self, name: impl Into<String>, predicate: QuestPredicate) {
        self.quests.insert(name.into(), predicate);
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// True if `name` is registered and its predicate holds.
    /// Unregistered quests never complete.
    pub fn is_complete(&self, name: &str, player: &Player) -> bool {
        self.quests.get(name).is_some_and(|p| p.satisfied(player))
    }

    /// Drop completed quests from `location`, keeping the rest in order.
    /// Returns the names of the quests that were dropped.
    pub fn prune(&self, location: &mut Location, player: &Player) -> Vec<String> {
        let (done, pending): (Vec<String>, Vec<String>) = location
            .pending_quests_mut()
            .drain(..)
            .partition(|name| self.is_complete(name, player));
        *location.pending_quests_mut() = pending;
        for name in &done {
            info!("quest \"{name}\" completed at '{}'", location.id());
        }
        done
    }
}
