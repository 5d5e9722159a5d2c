use std::fmt;

/// A single answer value collected from a questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// Free text (open questions) or the chosen option (multiple-choice questions).
    Text(String),

    /// A parsed number (number questions).
    Number(f64),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Try to get this value as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// The recorded answer for one question.
///
/// `answer` is `None` when the question was skipped or excluded by its condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// Id of the question this answer belongs to.
    pub id: String,

    /// The collected value, if any.
    pub answer: Option<AnswerValue>,
}

impl Answer {
    /// Create an answer carrying a value.
    pub fn new(id: impl Into<String>, answer: impl Into<AnswerValue>) -> Self {
        Self {
            id: id.into(),
            answer: Some(answer.into()),
        }
    }

    /// Create an answer without a value (skipped or excluded).
    pub fn absent(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            answer: None,
        }
    }

    /// Check if this answer carries no value.
    pub fn is_absent(&self) -> bool {
        self.answer.is_none()
    }
}

/// Find the most recent answer recorded for `id`.
pub fn find_answer<'a>(answers: &'a [Answer], id: &str) -> Option<&'a Answer> {
    answers.iter().rev().find(|answer| answer.id == id)
}
