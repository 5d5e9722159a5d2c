use crate::PromptError;

/// Reads one line of user input in response to a prompt.
pub trait LineReader {
    /// Show `query` and block until the user supplies a line.
    ///
    /// The returned line carries no trailing newline. Fails with
    /// [`PromptError::InputClosed`] when no further line can ever arrive.
    fn ask(&mut self, query: &str) -> Result<String, PromptError>;
}

/// Writes user-visible lines. Fire-and-forget: write failures are not reported.
pub trait Console {
    fn say(&mut self, line: &str);
}

/// An open interactive session: a line reader plus a console.
pub trait Session: LineReader + Console {
    /// Release the session. Called exactly once, when the questionnaire ends.
    fn close(&mut self) {}
}

/// Trait for backends that open interactive sessions.
///
/// A session is opened once per questionnaire run and may borrow the terminal
/// for as long as it is open.
pub trait Terminal {
    /// The session type handed out by [`Terminal::open`].
    type Session<'a>: Session
    where
        Self: 'a;

    /// Acquire a session. Failure aborts the questionnaire before any question is asked.
    fn open(&mut self) -> Result<Self::Session<'_>, PromptError>;
}
