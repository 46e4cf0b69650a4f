//! Locations and the things inside them.
//!
//! A [`Location`] is one node of the world graph: its narration, the labelled
//! containers holding items, the interactive objects items can be applied to,
//! the outgoing edges (and which of those are currently locked), display
//! aliases for edges, and the quests still pending here.

use crate::effect::Effect;
use crate::narration::{EXITS_PREFIX, QUESTS_PREFIX, join_segments, join_with_and};

use std::collections::{HashMap, HashSet};

/// Kinds of narration a location can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Read out by look-around.
    Look,
    /// Read out when the player arrives.
    Enter,
    /// Replaces the item listing when nothing is left to take.
    Empty,
}

/// A labelled group of items within a location ("on the table:").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub label: String,
    pub items: Vec<String>,
}

/// Something at a location that items can be applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractiveObject {
    effects: HashMap<String, Effect>,
}
impl InteractiveObject {
    /// The effect registered for applying `item` to this object, if any.
    pub fn effect_for(&self, item: &str) -> Option<&Effect> {
        self.effects.get(item)
    }
}

/// Any visitable place in the game world.
///
/// `blocked` is always a subset of `reachable`: the builder and mutation
/// methods refuse to lock an edge that doesn't exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: String,
    messages: HashMap<MessageKind, String>,
    containers: Vec<Container>,
    objects: HashMap<String, InteractiveObject>,
    reachable: Vec<String>,
    blocked: HashSet<String>,
    aliases: HashMap<String, String>,
    pending_quests: Vec<String>,
}

impl Location {
    /// Create an empty location with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            messages: HashMap::new(),
            containers: Vec::new(),
            objects: HashMap::new(),
            reachable: Vec::new(),
            blocked: HashSet::new(),
            aliases: HashMap::new(),
            pending_quests: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, kind: MessageKind, text: impl Into<String>) -> Self {
        self.messages.insert(kind, text.into());
        self
    }

    #[must_use]
    pub fn with_container<S: Into<String>>(mut self, label: impl Into<String>, items: impl IntoIterator<Item = S>) -> Self {
        self.containers.push(Container {
            label: label.into(),
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn with_exit(mut self, to: impl Into<String>) -> Self {
        let to: String = to.into();
        self.open_path(&to);
        self
    }

    /// Lock an existing exit. Exits that aren't reachable are ignored.
    #[must_use]
    pub fn with_blocked_exit(mut self, to: &str) -> Self {
        if self.is_reachable(to) {
            self.blocked.insert(to.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_alias(mut self, to: impl Into<String>, display: impl Into<String>) -> Self {
        self.aliases.insert(to.into(), display.into());
        self
    }

    #[must_use]
    pub fn with_quest(mut self, name: impl Into<String>) -> Self {
        self.pending_quests.push(name.into());
        self
    }

    /// Bind `effect` to applying `item` to `object`.
    #[must_use]
    pub fn with_effect(mut self, object: impl Into<String>, item: impl Into<String>, effect: Effect) -> Self {
        self.objects
            .entry(object.into())
            .or_default()
            .effects
            .insert(item.into(), effect);
        self
    }

    /// Register an object with no effects yet.
    #[must_use]
    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.objects.entry(object.into()).or_default();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message(&self, kind: MessageKind) -> Option<&str> {
        self.messages.get(&kind).map(String::as_str)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn object(&self, name: &str) -> Option<&InteractiveObject> {
        self.objects.get(name)
    }

    pub fn reachable(&self) -> &[String] {
        &self.reachable
    }

    pub fn is_reachable(&self, to: &str) -> bool {
        self.reachable.iter().any(|r| r == to)
    }

    pub fn is_blocked(&self, to: &str) -> bool {
        self.blocked.contains(to)
    }

    pub fn pending_quests(&self) -> &[String] {
        &self.pending_quests
    }

    /// Mutable access for quest pruning.
    pub(crate) fn pending_quests_mut(&mut self) -> &mut Vec<String> {
        &mut self.pending_quests
    }

    /// Unlock an exit. Returns true if it was locked.
    pub fn unblock(&mut self, to: &str) -> bool {
        self.blocked.remove(to)
    }

    /// Add a reachable exit, keeping order. Returns false if it was already there.
    pub fn open_path(&mut self, to: &str) -> bool {
        if self.is_reachable(to) {
            return false;
        }
        self.reachable.push(to.to_string());
        true
    }

    /// True if any container here holds `item`.
    pub fn contains_item(&self, item: &str) -> bool {
        self.containers.iter().any(|c| c.items.iter().any(|i| i == item))
    }

    /// Remove the first occurrence of `item` from this location's containers.
    ///
    /// Containers keep their labels even once emptied. Returns false if the
    /// item isn't here.
    pub fn take_item(&mut self, item: &str) -> bool {
        for container in &mut self.containers {
            if let Some(pos) = container.items.iter().position(|i| i == item) {
                container.items.remove(pos);
                return true;
            }
        }
        false
    }

    /// "on the table: keys, notes, on the chair: backpack", or the empty
    /// message if nothing is left.
    pub fn items_listing(&self) -> String {
        let listed: Vec<String> = self
            .containers
            .iter()
            .filter(|c| !c.items.is_empty())
            .map(|c| format!("{} {}", c.label, c.items.join(", ")))
            .collect();
        if listed.is_empty() {
            return self.message(MessageKind::Empty).unwrap_or_default().to_string();
        }
        listed.join(", ")
    }

    /// "you need to pack the bag and go to school", or empty if nothing is pending.
    pub fn quests_listing(&self) -> String {
        if self.pending_quests.is_empty() {
            return String::new();
        }
        format!("{QUESTS_PREFIX}{}", join_with_and(&self.pending_quests))
    }

    /// "you can go to - kitchen, home", using aliases where defined.
    pub fn exits_listing(&self) -> String {
        if self.reachable.is_empty() {
            return String::new();
        }
        let names: Vec<&str> = self
            .reachable
            .iter()
            .map(|to| self.aliases.get(to).unwrap_or(to).as_str())
            .collect();
        format!("{EXITS_PREFIX}{}", names.join(", "))
    }

    /// Narration for looking around: message, items, quests, then exits.
    pub fn look_narration(&self) -> String {
        let items = self.items_listing();
        let quests = self.quests_listing();
        let exits = self.exits_listing();
        join_segments(&[
            self.message(MessageKind::Look).unwrap_or_default(),
            items.as_str(),
            quests.as_str(),
            exits.as_str(),
        ])
    }

    /// Narration for arriving here: enter message, then exits.
    pub fn enter_narration(&self) -> String {
        let exits = self.exits_listing();
        join_segments(&[self.message(MessageKind::Enter).unwrap_or_default(), exits.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bedroom() -> Location {
        Location::new("bedroom")
            .with_message(MessageKind::Enter, "you are in your room")
            .with_message(MessageKind::Empty, "an empty room")
            .with_container("on the table:", ["keys", "notes"])
            .with_container("on the chair:", ["backpack"])
            .with_exit("hallway")
    }

    #[test]
    fn take_item_removes_single_entry() {
        let mut loc = Location::new("x").with_container("on the shelf:", ["tea"]).with_container("on the floor:", ["tea"]);
        assert!(loc.take_item("tea"));
        assert!(loc.containers()[0].items.is_empty());
        assert_eq!(loc.containers()[1].items, ["tea"]);
        assert!(loc.take_item("tea"));
        assert!(!loc.take_item("tea"));
        assert_eq!(loc.containers().len(), 2);
        assert_eq!(loc.containers()[1].label, "on the floor:");
    }

    #[test]
    fn items_listing_skips_empty_containers() {
        let mut loc = bedroom();
        assert_eq!(loc.items_listing(), "on the table: keys, notes, on the chair: backpack");
        loc.take_item("backpack");
        assert_eq!(loc.items_listing(), "on the table: keys, notes");
        loc.take_item("keys");
        loc.take_item("notes");
        assert_eq!(loc.items_listing(), "an empty room");
    }

    #[test]
    fn items_listing_without_empty_message_is_blank() {
        let mut loc = Location::new("kitchen").with_container("on the table:", ["tea"]);
        loc.take_item("tea");
        assert!(loc.items_listing().is_empty());
    }

    #[test]
    fn blocked_exit_requires_reachable_edge() {
        let loc = Location::new("hallway").with_blocked_exit("street");
        assert!(!loc.is_blocked("street"));
        let loc = loc.with_exit("street").with_blocked_exit("street");
        assert!(loc.is_blocked("street"));
        assert!(loc.is_reachable("street"));
    }

    #[test]
    fn exits_listing_uses_aliases() {
        let loc = Location::new("street").with_exit("hallway").with_alias("hallway", "home");
        assert_eq!(loc.exits_listing(), "you can go to - home");
        assert!(Location::new("void").exits_listing().is_empty());
    }

    #[test]
    fn quests_listing_formats_connective() {
        let loc = Location::new("kitchen").with_quest("pack the bag").with_quest("go to school");
        assert_eq!(loc.quests_listing(), "you need to pack the bag and go to school");
        let loc = Location::new("kitchen").with_quest("a").with_quest("b").with_quest("c");
        assert_eq!(loc.quests_listing(), "you need to a, b and c");
    }

    #[test]
    fn enter_narration_joins_with_period() {
        assert_eq!(bedroom().enter_narration(), "you are in your room. you can go to - hallway");
    }

    #[test]
    fn look_narration_omits_missing_look_message() {
        assert_eq!(
            bedroom().look_narration(),
            "on the table: keys, notes, on the chair: backpack. you can go to - hallway"
        );
    }

    #[test]
    fn object_effects_are_keyed_by_item() {
        let loc = Location::new("hallway").with_effect("door", "keys", Effect::Narrate { text: "clink".into() });
        let door = loc.object("door").unwrap();
        assert!(door.effect_for("keys").is_some());
        assert!(door.effect_for("tea").is_none());
        assert!(loc.object("window").is_none());
    }
}
