//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. [`handle_command`] is the one
//! entry point that turns a line of input into narration; the submodules hold
//! the handlers that read and mutate the [`RambleWorld`]. [`run_repl`] is a thin
//! terminal adapter around it.

mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;

pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;

use crate::command::{Command, CommandError, Verb, parse_command};
use crate::error::GameError;
use crate::style::GameStyle;
use crate::world::RambleWorld;

use anyhow::Result;
use log::{info, warn};

use input::{InputEvent, InputManager};

/// Interpret one line of input and carry it out.
///
/// # Errors
/// - `GameError::Command` if the line isn't a well-formed command
/// - `GameError::Action` if the handler refused; state is left unchanged
pub fn execute(world: &mut RambleWorld, line: &str) -> Result<String, GameError> {
    let command = parse_command(line).inspect_err(|err| warn!("rejected input {line:?}: {err}"))?;
    dispatch(world, &command)
}

/// Interpret one line of input and return exactly one narration string.
///
/// Failures are narrated too, so this never fails.
pub fn handle_command(world: &mut RambleWorld, line: &str) -> String {
    execute(world, line).unwrap_or_else(|err| err.to_string())
}

/// Route a parsed command to its handler.
///
/// # Errors
/// - whatever the handler refuses with
pub fn dispatch(world: &mut RambleWorld, command: &Command) -> Result<String, GameError> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    let narration = match command {
        LookAround => look_handler(world)?,
        MoveTo(destination) => move_to_handler(world, destination)?,
        Take(item) => take_handler(world, item)?,
        Wear(item) => {
            // only the container item can be worn
            if *item != world.container_item {
                warn!("tried to wear '{item}'");
                return Err(CommandError::Unknown(Verb::Wear.word().to_string()).into());
            }
            wear_handler(world)?
        },
        Apply { item, object } => apply_handler(world, item, object)?,
    };
    Ok(narration)
}

/// Run the main read–eval–print loop until the user quits or input ends.
///
/// # Errors
/// - if stdin can't be read
pub fn run_repl(world: &mut RambleWorld) -> Result<()> {
    let mut input_manager = InputManager::new(world);
    let mut turn: usize = 0;

    println!("{}\n", world.title.title_style());
    if !world.intro.is_empty() {
        println!("{}\n", world.intro.description_style());
    }

    loop {
        let line = match input_manager.read_line(&"> ".prompt_style().to_string())? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("{}", "Command canceled.".italic_style());
                continue;
            },
        };
        if line.trim() == "quit" {
            break;
        }

        turn += 1;
        info!("================> BEGIN TURN {turn} <================");
        match execute(world, &line) {
            Ok(narration) => println!("{}", narration.narration_style()),
            Err(err) => println!("{}", err.to_string().error_style()),
        }
    }

    info!("player left after {turn} turn(s)");
    Ok(())
}
