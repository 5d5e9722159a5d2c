use std::fmt;
use std::sync::Arc;

use crate::{Answer, AnswerValue, find_answer};

type Predicate = dyn Fn(&[Answer]) -> anyhow::Result<bool> + Send + Sync;

/// A predicate over the answers collected so far.
///
/// A question carrying a condition is only presented when the predicate
/// holds. The predicate sees a read-only view of the answers, so it cannot
/// alter the session it is evaluated in.
#[derive(Clone)]
pub struct Condition {
    predicate: Arc<Predicate>,
}

impl Condition {
    /// Create a condition from an infallible predicate.
    pub fn new(predicate: impl Fn(&[Answer]) -> bool + Send + Sync + 'static) -> Self {
        Self::fallible(move |answers| Ok(predicate(answers)))
    }

    /// Create a condition from a predicate that may fail.
    ///
    /// An error aborts the whole session and is returned to the caller unchanged.
    pub fn fallible(
        predicate: impl Fn(&[Answer]) -> anyhow::Result<bool> + Send + Sync + 'static,
    ) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Holds when the latest answer for `id` equals `value`.
    pub fn answered_with(id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        let id = id.into();
        let value = value.into();
        Self::new(move |answers| {
            find_answer(answers, &id).is_some_and(|a| a.answer.as_ref() == Some(&value))
        })
    }

    /// Holds when `id` has been answered with any value.
    pub fn answered(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(move |answers| find_answer(answers, &id).is_some_and(|a| !a.is_absent()))
    }

    /// Evaluate the predicate.
    pub fn evaluate(&self, answers: &[Answer]) -> anyhow::Result<bool> {
        (self.predicate)(answers)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}
