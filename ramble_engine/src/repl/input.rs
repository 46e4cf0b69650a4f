//! Terminal input handling for the Ramble REPL.
//!
//! Wraps rustyline configuration and tab-completion over the verbs and the
//! identifiers of the loaded world. History is kept in memory only.

use std::io::{self, IsTerminal, Write};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::RambleWorld;
use crate::command::Verb;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

type ReplEditor = rustyline::Editor<RambleHelper, DefaultHistory>;

#[derive(Default)]
struct RambleHelper {
    terms: Vec<String>,
}

impl Helper for RambleHelper {}

impl Completer for RambleHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_word(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let pairs = self
            .terms
            .iter()
            .filter(|term| term.starts_with(prefix))
            .map(|term| Pair {
                display: term.clone(),
                replacement: term.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for RambleHelper {
    type Hint = String;
}

impl Highlighter for RambleHelper {}

impl Validator for RambleHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

/// The word under the cursor and where it starts.
fn current_word(line: &str, pos: usize) -> (usize, &str) {
    let slice = &line[..pos];
    let start = slice.rfind(char::is_whitespace).map_or(0, |i| i + 1);
    (start, &slice[start..])
}

/// Verbs plus every location, item and object identifier in the world.
fn collect_terms(world: &RambleWorld) -> Vec<String> {
    let mut terms: Vec<String> = Verb::ALL.iter().map(|v| v.word().to_string()).collect();
    terms.push("quit".to_string());
    for location in world.locations.values() {
        terms.push(location.id().to_string());
        for container in location.containers() {
            terms.extend(container.items.iter().cloned());
        }
    }
    terms.push(world.container_item.clone());
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl InputManager {
    pub fn new(world: &RambleWorld) -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new(collect_terms(world)) {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    ///
    /// # Errors
    /// - if reading from stdin fails
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
}

impl RustylineInput {
    fn new(terms: Vec<String>) -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(map_io_err)?;
        editor.set_helper(Some(RambleHelper { terms }));
        Ok(Self { editor })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert!(matches!(result, InputEvent::Interrupted));
    }

    #[test]
    fn converts_readline_eof() {
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert!(matches!(result, InputEvent::Eof));
    }

    #[test]
    fn current_word_finds_last_token() {
        assert_eq!(current_word("take ke", 7), (5, "ke"));
        assert_eq!(current_word("lo", 2), (0, "lo"));
        assert_eq!(current_word("go ", 3), (3, ""));
    }

    #[test]
    fn terms_include_verbs_and_world_ids() {
        let mut world = RambleWorld::new_empty("kitchen", "backpack");
        world.insert_location(Location::new("kitchen").with_container("on the table:", ["tea"]));
        let terms = collect_terms(&world);
        assert!(terms.iter().any(|t| t == "apply"));
        assert!(terms.iter().any(|t| t == "kitchen"));
        assert!(terms.iter().any(|t| t == "tea"));
        assert!(terms.iter().any(|t| t == "backpack"));
    }
}
