#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const RAMBLE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod effect;
pub mod error;
pub mod loader;
pub mod location;
pub mod narration;
pub mod player;
pub mod quest;
pub mod repl;
pub mod style;
pub mod world;

// Re-exports for convenience
pub use command::{Command, CommandError, parse_command};
pub use error::{ActionError, GameError, MoveError};
pub use loader::load_world;
pub use location::Location;
pub use player::Player;
pub use quest::{QuestPredicate, QuestRegistry};
pub use repl::{execute, handle_command, run_repl};
pub use world::RambleWorld;
