//! # questionnaire
//!
//! Ask an ordered list of questions on a terminal and collect typed answers.
//!
//! Questions are asked one after another. Each question may carry a
//! [`Condition`] over the answers given so far; questions whose condition
//! does not hold are never shown and are recorded without a value. When
//! enabled, the user can type `b` to return to the previous question or `s`
//! to skip the current one.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{Answer, Condition, Prompt, Question, ScriptedTerminal};
//!
//! let questions = vec![
//!     Question::multiple_choice("coffee", "Do you drink coffee?", ["yes", "no"]).unwrap(),
//!     Question::number("cups", "How many cups a day?")
//!         .with_condition(Condition::answered_with("coffee", "yes")),
//! ];
//!
//! let mut terminal = ScriptedTerminal::new(["2"]);
//! let answers = Prompt::new(questions).allow_skip(true).run(&mut terminal).unwrap();
//!
//! assert_eq!(answers, vec![Answer::new("coffee", "no"), Answer::absent("cups")]);
//! ```
//!
//! ## Terminals
//!
//! A [`Terminal`] opens the interactive session the questionnaire runs in:
//! - [`StdioTerminal`] - any `BufRead` input and `Write` output (stdin/stdout, pipes)
//! - [`ScriptedTerminal`] - canned input lines, for tests
//! - `questionnaire-dialoguer` - interactive prompts via dialoguer

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod condition;
pub use condition::should_ask;

pub mod handlers;

mod navigation;
pub use navigation::{Navigation, Outcome};

mod parse;
pub use parse::{leading_float, leading_integer};

mod prompt;
pub use prompt::Prompt;

mod stdio;
pub use stdio::{StdioSession, StdioTerminal};

// Test backend for running questionnaires without user interaction
mod scripted;
pub use scripted::{ScriptedSession, ScriptedTerminal};
