use questionnaire_types::{Answer, PromptError, Question};

/// Decide whether `question` is presented, given the answers collected so far.
///
/// Questions without a condition are always presented. A failing predicate is
/// returned as [`PromptError::Condition`] carrying the predicate's own error.
pub fn should_ask(question: &Question, answers: &[Answer]) -> Result<bool, PromptError> {
    match question.condition() {
        Some(condition) => condition.evaluate(answers).map_err(PromptError::Condition),
        None => Ok(true),
    }
}
