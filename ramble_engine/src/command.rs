//! Command module
//!
//! Describes the commands available during gameplay and turns a raw input
//! line into one of them. Argument counts are checked here, so a handler is
//! never reached with the wrong number of arguments.
use std::fmt;

use thiserror::Error;
use variantly::Variantly;

/// The verbs the interpreter recognizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verb {
    Look,
    Go,
    Take,
    Wear,
    Apply,
}
impl Verb {
    /// Every verb, in help order.
    pub const ALL: [Verb; 5] = [Verb::Look, Verb::Go, Verb::Take, Verb::Wear, Verb::Apply];

    /// The word the player types.
    pub fn word(self) -> &'static str {
        match self {
            Verb::Look => "look",
            Verb::Go => "go",
            Verb::Take => "take",
            Verb::Wear => "wear",
            Verb::Apply => "apply",
        }
    }

    /// Number of arguments the verb takes.
    pub fn arity(self) -> usize {
        match self {
            Verb::Look => 0,
            Verb::Go | Verb::Take | Verb::Wear => 1,
            Verb::Apply => 2,
        }
    }

    pub fn from_word(word: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|v| v.word() == word)
    }

    fn missing_message(self) -> &'static str {
        match self {
            Verb::Look => "missing parameter",
            Verb::Go => "missing parameter: destination",
            Verb::Take | Verb::Wear => "missing parameter: item",
            Verb::Apply => "missing parameters: item and object",
        }
    }

    fn excess_message(self) -> &'static str {
        match self {
            Verb::Look => "too many parameters",
            Verb::Go | Verb::Take | Verb::Wear => "too many parameters: expected only 1",
            Verb::Apply => "too many parameters: expected only 2",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    LookAround,
    MoveTo(String),
    Take(String),
    Wear(String),
    Apply { item: String, object: String },
}

/// Reasons an input line didn't make a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command")]
    Unknown(String),
    #[error("{}", .0.missing_message())]
    MissingParameters(Verb),
    #[error("{}", .0.excess_message())]
    TooManyParameters(Verb),
}

/// Parses an input line into a `Command`, checking argument counts.
///
/// # Errors
/// - `Unknown` for an empty line or an unrecognized verb
/// - `MissingParameters` / `TooManyParameters` on an arity mismatch
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((first, args)) = words.split_first() else {
        return Err(CommandError::Unknown(String::new()));
    };
    let verb = Verb::from_word(first).ok_or_else(|| CommandError::Unknown((*first).to_string()))?;

    if args.len() < verb.arity() {
        return Err(CommandError::MissingParameters(verb));
    }
    if args.len() > verb.arity() {
        return Err(CommandError::TooManyParameters(verb));
    }

    match (verb, args) {
        (Verb::Look, []) => Ok(Command::LookAround),
        (Verb::Go, [to]) => Ok(Command::MoveTo((*to).to_string())),
        (Verb::Take, [item]) => Ok(Command::Take((*item).to_string())),
        (Verb::Wear, [item]) => Ok(Command::Wear((*item).to_string())),
        (Verb::Apply, [item, object]) => Ok(Command::Apply {
            item: (*item).to_string(),
            object: (*object).to_string(),
        }),
        _ => Err(CommandError::Unknown((*first).to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_verb() {
        assert_eq!(parse_command("look"), Ok(Command::LookAround));
        assert_eq!(parse_command("go hallway"), Ok(Command::MoveTo("hallway".into())));
        assert_eq!(parse_command("  take   keys "), Ok(Command::Take("keys".into())));
        assert_eq!(parse_command("wear backpack"), Ok(Command::Wear("backpack".into())));
        assert_eq!(
            parse_command("apply keys door"),
            Ok(Command::Apply {
                item: "keys".into(),
                object: "door".into()
            })
        );
    }

    #[test]
    fn empty_and_unknown_lines() {
        assert!(matches!(parse_command(""), Err(CommandError::Unknown(_))));
        assert!(matches!(parse_command("   "), Err(CommandError::Unknown(_))));
        assert_eq!(parse_command("dance wildly"), Err(CommandError::Unknown("dance".into())));
        assert_eq!(parse_command("LOOK").unwrap_err().to_string(), "unknown command");
    }

    #[test]
    fn missing_parameters_for_every_verb_with_arguments() {
        for verb in Verb::ALL.into_iter().filter(|v| v.arity() > 0) {
            let args = vec!["x"; verb.arity() - 1];
            let line = format!("{} {}", verb.word(), args.join(" "));
            assert_eq!(parse_command(&line), Err(CommandError::MissingParameters(verb)), "{line}");
        }
    }

    #[test]
    fn too_many_parameters_for_every_verb() {
        for verb in Verb::ALL {
            let args = vec!["x"; verb.arity() + 1];
            let line = format!("{} {}", verb.word(), args.join(" "));
            assert_eq!(parse_command(&line), Err(CommandError::TooManyParameters(verb)), "{line}");
        }
    }

    #[test]
    fn messages_distinguish_missing_from_excess() {
        assert_eq!(
            CommandError::MissingParameters(Verb::Go).to_string(),
            "missing parameter: destination"
        );
        assert_eq!(
            CommandError::MissingParameters(Verb::Apply).to_string(),
            "missing parameters: item and object"
        );
        assert_eq!(CommandError::TooManyParameters(Verb::Look).to_string(), "too many parameters");
        assert_eq!(
            CommandError::TooManyParameters(Verb::Apply).to_string(),
            "too many parameters: expected only 2"
        );
    }

    #[test]
    fn variant_helpers() {
        assert!(parse_command("look").unwrap().is_look_around());
        assert!(parse_command("take tea").unwrap().is_take());
    }
}
