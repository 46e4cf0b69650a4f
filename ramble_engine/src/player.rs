//! Player -- module for the player in Ramble
use log::info;

/// The player: where they stand, what they carry, and whether they have
/// something to carry it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: String,
    pub has_container: bool,
    pub inventory: Vec<String>,
}
impl Player {
    /// Create a player standing at `start`, empty-handed.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            location: start.into(),
            has_container: false,
            inventory: Vec::new(),
        }
    }

    /// True if `item` is in the inventory.
    pub fn carries(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        let item = item.into();
        info!("player picked up '{item}'");
        self.inventory.push(item);
    }

    /// Put on the container item. Once worn it stays worn.
    pub fn wear_container(&mut self, item: impl Into<String>) {
        self.add_item(item);
        self.has_container = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_empty_handed() {
        let player = Player::new("kitchen");
        assert_eq!(player.location, "kitchen");
        assert!(!player.has_container);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn inventory_keeps_order() {
        let mut player = Player::new("kitchen");
        player.wear_container("backpack");
        player.add_item("keys");
        assert!(player.has_container);
        assert_eq!(player.inventory, ["backpack", "keys"]);
        assert!(player.carries("keys"));
        assert!(!player.carries("tea"));
    }
}
