/// Error type for questionnaire sessions.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// User cancelled the session (Ctrl+C, Escape).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// The input stream ended before every question was answered.
    #[error("Input closed before the questionnaire finished")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The interactive session could not be opened.
    #[error("Failed to open session: {0}")]
    Open(anyhow::Error),

    /// A condition predicate failed. Displayed as the underlying error.
    #[error(transparent)]
    Condition(anyhow::Error),

    /// Backend-specific failure.
    #[error("Backend error: {0}")]
    Backend(anyhow::Error),
}

impl PromptError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_error_is_transparent() {
        let err = PromptError::Condition(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn cancellation_is_detected() {
        assert!(PromptError::Cancelled.is_cancelled());
        assert!(!PromptError::InputClosed.is_cancelled());
        assert!(!PromptError::backend(std::fmt::Error).is_cancelled());
    }
}
