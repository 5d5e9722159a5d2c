//! # questionnaire-dialoguer
//!
//! Dialoguer terminal for questionnaire.
//!
//! This crate reads answers with the `dialoguer` library. Each line the
//! questionnaire asks for is read through a dialoguer text input, in colorful
//! or plain style.
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionnaire::{Prompt, Question};
//! use questionnaire_dialoguer::DialoguerTerminal;
//!
//! fn main() -> anyhow::Result<()> {
//!     let answers = Prompt::new(vec![
//!         Question::open("name", "What is your name?"),
//!         Question::number("age", "How old are you?"),
//!     ])
//!     .allow_back_navigation(true)
//!     .run(&mut DialoguerTerminal::new())?;
//!
//!     println!("{answers:?}");
//!     Ok(())
//! }
//! ```

mod terminal;

pub use terminal::{DialoguerSession, DialoguerTerminal};
