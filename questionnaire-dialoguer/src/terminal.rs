//! Dialoguer implementation of the `Terminal` trait.

use std::io::{self, IsTerminal, Write};

use dialoguer::{Input, theme::ColorfulTheme};
use questionnaire::{Console, LineReader, PromptError, Session, Terminal};
use tracing::debug;

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted)
}

fn is_end_of_input(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof)
}

fn into_prompt_error(err: dialoguer::Error) -> PromptError {
    if is_cancelled(&err) {
        PromptError::Cancelled
    } else if is_end_of_input(&err) {
        PromptError::InputClosed
    } else {
        PromptError::backend(err)
    }
}

/// Strip the `: ` a query ends with; dialoguer themes draw their own separator.
fn display_prompt(query: &str) -> &str {
    query.trim_end().trim_end_matches(':')
}

/// Dialoguer terminal for interactive CLI prompts.
///
/// Opening a session requires stdin to be an interactive terminal.
#[derive(Debug, Clone)]
pub struct DialoguerTerminal {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl Default for DialoguerTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerTerminal {
    /// Create a new Dialoguer terminal with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a terminal with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    pub fn is_colorful(&self) -> bool {
        self.colorful
    }
}

impl Terminal for DialoguerTerminal {
    type Session<'a> = DialoguerSession;

    fn open(&mut self) -> Result<Self::Session<'_>, PromptError> {
        if !io::stdin().is_terminal() {
            return Err(PromptError::Open(anyhow::anyhow!(
                "stdin is not an interactive terminal"
            )));
        }
        debug!(colorful = self.colorful, "dialoguer session opened");
        Ok(DialoguerSession {
            colorful: self.colorful,
        })
    }
}

/// An open dialoguer session.
#[derive(Debug)]
pub struct DialoguerSession {
    colorful: bool,
}

impl LineReader for DialoguerSession {
    fn ask(&mut self, query: &str) -> Result<String, PromptError> {
        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder.with_prompt(display_prompt(query)).allow_empty(true);

        builder.interact_text().map_err(into_prompt_error)
    }
}

impl Console for DialoguerSession {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}

impl Session for DialoguerSession {
    fn close(&mut self) {
        if let Err(err) = io::stdout().flush() {
            debug!(%err, "failed to flush stdout");
        }
    }
}
