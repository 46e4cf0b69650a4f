use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world content loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub quests: Vec<QuestDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: Id,
    #[serde(default = "default_container_item")]
    pub container_item: Id,
}

impl Default for GameDef {
    fn default() -> Self {
        Self {
            title: String::new(),
            intro: String::new(),
            start_room: String::new(),
            container_item: default_container_item(),
        }
    }
}

fn default_container_item() -> Id {
    "backpack".to_string()
}

/// Room definition used by the engine at load time.
///
/// `exits` is the ordered list of neighbors the player may try to reach;
/// `blocked` names the subset of those that start out locked.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomDef {
    pub id: Id,
    #[serde(default)]
    pub messages: MessagesDef,
    #[serde(default)]
    pub containers: Vec<ContainerDef>,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub exits: Vec<Id>,
    #[serde(default)]
    pub blocked: Vec<Id>,
    #[serde(default)]
    pub aliases: BTreeMap<Id, String>,
    #[serde(default)]
    pub quests: Vec<String>,
}

/// Narration attached to a room.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MessagesDef {
    /// Shown when looking around.
    #[serde(default)]
    pub look: String,
    /// Shown when the player walks in.
    #[serde(default)]
    pub enter: String,
    /// Replaces the item listing when every container is empty.
    #[serde(default)]
    pub empty: String,
}

/// A labelled place in a room that holds items ("on the table:").
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContainerDef {
    pub label: String,
    #[serde(default)]
    pub items: Vec<Id>,
}

/// Something in a room that items can be applied to.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ObjectDef {
    pub name: String,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

/// What happens when `item` is applied to the owning object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EffectDef {
    /// Clears a locked exit of the room.
    Unlock { item: Id, exit: Id, text: String },
    /// Adds a new exit to the room.
    OpenPath { item: Id, exit: Id, text: String },
    /// Narration only.
    Narrate { item: Id, text: String },
}

impl EffectDef {
    /// The item identifier this effect is keyed on.
    pub fn item(&self) -> &str {
        match self {
            EffectDef::Unlock { item, .. } | EffectDef::OpenPath { item, .. } | EffectDef::Narrate { item, .. } => item,
        }
    }

    /// The exit this effect touches, if it changes the room's topology.
    pub fn exit(&self) -> Option<&str> {
        match self {
            EffectDef::Unlock { exit, .. } | EffectDef::OpenPath { exit, .. } => Some(exit),
            EffectDef::Narrate { .. } => None,
        }
    }
}

/// A named quest and the predicate that completes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDef {
    pub name: String,
    pub done_when: QuestPredicateDef,
}

/// The fixed set of quest completion predicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestPredicateDef {
    HasAnyItem { items: Vec<Id> },
    HasAllItems { items: Vec<Id> },
    WearsContainer,
    InRoom { room: Id },
}
