//! Effects of applying an item to an interactive object.
//!
//! Each `(object, item)` binding in a [`Location`] maps to one [`Effect`].
//! Applying it mutates the location it belongs to and yields narration.

use crate::location::Location;

use log::info;
use ramble_data::EffectDef;

/// A narrated change to a location, triggered by applying an item to an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remove `exit` from the blocked set and make sure it is reachable.
    Unlock { exit: String, text: String },
    /// Add `exit` as a new reachable edge.
    OpenPath { exit: String, text: String },
    /// No state change.
    Narrate { text: String },
}

impl Effect {
    /// Carry out the effect on `location` and return its narration.
    pub fn apply(&self, location: &mut Location) -> String {
        match self {
            Effect::Unlock { exit, text } => {
                location.unblock(exit);
                location.open_path(exit);
                info!("exit '{exit}' unlocked in '{}'", location.id());
                text.clone()
            },
            Effect::OpenPath { exit, text } => {
                if location.open_path(exit) {
                    info!("new exit '{exit}' opened in '{}'", location.id());
                }
                text.clone()
            },
            Effect::Narrate { text } => text.clone(),
        }
    }
}

impl From<&EffectDef> for Effect {
    fn from(def: &EffectDef) -> Self {
        match def {
            EffectDef::Unlock { exit, text, .. } => Effect::Unlock {
                exit: exit.clone(),
                text: text.clone(),
            },
            EffectDef::OpenPath { exit, text, .. } => Effect::OpenPath {
                exit: exit.clone(),
                text: text.clone(),
            },
            EffectDef::Narrate { text, .. } => Effect::Narrate { text: text.clone() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hallway() -> Location {
        Location::new("hallway")
            .with_exit("kitchen")
            .with_exit("street")
            .with_blocked_exit("street")
    }

    #[test]
    fn unlock_clears_blocked_edge() {
        let mut loc = hallway();
        let effect = Effect::Unlock {
            exit: "street".into(),
            text: "the door is open".into(),
        };
        assert_eq!(effect.apply(&mut loc), "the door is open");
        assert!(!loc.is_blocked("street"));
        assert_eq!(loc.reachable(), ["kitchen", "street"]);
    }

    #[test]
    fn unlock_adds_missing_edge() {
        let mut loc = Location::new("cell");
        let effect = Effect::Unlock {
            exit: "yard".into(),
            text: "a gap opens".into(),
        };
        assert_eq!(effect.apply(&mut loc), "a gap opens");
        assert!(loc.is_reachable("yard"));
        assert!(!loc.is_blocked("yard"));
        effect.apply(&mut loc);
        assert_eq!(loc.reachable(), ["yard"]);
    }

    #[test]
    fn open_path_adds_edge_once() {
        let mut loc = hallway();
        let effect = Effect::OpenPath {
            exit: "attic".into(),
            text: "a hatch swings down".into(),
        };
        effect.apply(&mut loc);
        effect.apply(&mut loc);
        assert_eq!(loc.reachable(), ["kitchen", "street", "attic"]);
    }

    #[test]
    fn narrate_changes_nothing() {
        let mut loc = hallway();
        let before = loc.clone();
        let effect = Effect::Narrate { text: "nothing happens".into() };
        assert_eq!(effect.apply(&mut loc), "nothing happens");
        assert_eq!(loc, before);
    }

    #[test]
    fn converts_from_def() {
        let def = EffectDef::Unlock {
            item: "keys".into(),
            exit: "street".into(),
            text: "open".into(),
        };
        assert_eq!(
            Effect::from(&def),
            Effect::Unlock {
                exit: "street".into(),
                text: "open".into()
            }
        );
    }
}
