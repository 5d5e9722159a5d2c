//! Test backend for running questionnaires without user interaction.
//!
//! `ScriptedTerminal` feeds pre-defined input lines to the questionnaire and
//! records everything it would have shown. This is useful for testing
//! questionnaires and custom conditions.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{Answer, Prompt, Question, ScriptedTerminal};
//!
//! let mut terminal = ScriptedTerminal::new(["Alice"]);
//! let answers = Prompt::new(vec![Question::open("name", "Name?")])
//!     .run(&mut terminal)
//!     .unwrap();
//!
//! assert_eq!(answers, vec![Answer::new("name", "Alice")]);
//! assert_eq!(terminal.prompts(), &["Name?: ".to_string()]);
//! assert_eq!(terminal.closes(), 1);
//! ```

use std::collections::VecDeque;

use questionnaire_types::{Console, LineReader, PromptError, Session, Terminal};

/// A terminal that answers prompts from a fixed script.
///
/// Once the script runs out, every further read fails with
/// [`PromptError::InputClosed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
    opens: usize,
    closes: usize,
    fail_open: bool,
}

impl ScriptedTerminal {
    /// Create a terminal that will answer with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a terminal whose sessions can never be opened.
    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// Append another input line to the script.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    /// Every query passed to `ask`, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every line written to the console, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Number of sessions opened.
    pub fn opens(&self) -> usize {
        self.opens
    }

    /// Number of sessions closed.
    pub fn closes(&self) -> usize {
        self.closes
    }

    /// Check whether `text` was ever shown, either as a prompt or as console output.
    pub fn rendered(&self, text: &str) -> bool {
        self.prompts
            .iter()
            .chain(&self.output)
            .any(|line| line.contains(text))
    }
}

impl Terminal for ScriptedTerminal {
    type Session<'a> = ScriptedSession<'a>;

    fn open(&mut self) -> Result<Self::Session<'_>, PromptError> {
        if self.fail_open {
            return Err(PromptError::Open(anyhow::anyhow!(
                "scripted terminal refuses to open"
            )));
        }
        self.opens += 1;
        Ok(ScriptedSession { terminal: self })
    }
}

/// A session over a [`ScriptedTerminal`].
#[derive(Debug)]
pub struct ScriptedSession<'a> {
    terminal: &'a mut ScriptedTerminal,
}

impl LineReader for ScriptedSession<'_> {
    fn ask(&mut self, query: &str) -> Result<String, PromptError> {
        self.terminal.prompts.push(query.to_string());
        self.terminal
            .lines
            .pop_front()
            .ok_or(PromptError::InputClosed)
    }
}

impl Console for ScriptedSession<'_> {
    fn say(&mut self, line: &str) {
        self.terminal.output.push(line.to_string());
    }
}

impl Session for ScriptedSession<'_> {
    fn close(&mut self) {
        self.terminal.closes += 1;
    }
}
