//! Failure outcomes of player commands.
//!
//! None of these are faults: each one's `Display` is the narration returned
//! to the player, and none of them leaves world state changed.

use crate::command::CommandError;

use thiserror::Error;

/// Outcomes of looking up a destination from the player's location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("there is no such place")]
    NotFound(String),
    #[error("no path to {0}")]
    Unreachable(String),
    #[error("the door is locked")]
    Blocked(String),
}

/// Reasons an action handler refused to act.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("nowhere to put it")]
    NowhereToPut,
    #[error("no such thing")]
    NoSuchThing(String),
    #[error("item not in inventory: {0}")]
    NotInInventory(String),
    #[error("nothing to apply it to")]
    NothingToApplyTo(String),
    #[error("no effect")]
    NoEffect { item: String, object: String },
    #[error("you are nowhere at all ({0})")]
    Lost(String),
}

/// Anything `execute` can answer with instead of narration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Action(ActionError::Move(err))
    }
}
