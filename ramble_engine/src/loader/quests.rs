//! module `loader::quests`

use log::info;
use ramble_data::QuestDef;

use crate::quest::{QuestPredicate, QuestRegistry};

/// Build the quest registry from quest definitions.
pub fn build_quests(defs: &[QuestDef]) -> QuestRegistry {
    let mut registry = QuestRegistry::new();
    for def in defs {
        registry.register(def.name.clone(), QuestPredicate::from(&def.done_when));
    }
    info!("{} quests built from quest definitions", registry.len());
    registry
}
