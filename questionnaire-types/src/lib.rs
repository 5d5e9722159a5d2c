//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `Answer` and `AnswerValue` - The collected, ordered answers
//! - `Condition` - Predicates deciding whether a question is presented
//! - `LineReader`, `Console`, `Session` and `Terminal` - The seams a terminal backend implements

mod answer;
pub use answer::{Answer, AnswerValue, find_answer};

mod condition;
pub use condition::Condition;

mod question;
pub use question::{MultipleChoiceQuestion, Question, QuestionError, QuestionKind};

mod error;
pub use error::PromptError;

mod traits;
pub use traits::{Console, LineReader, Session, Terminal};
