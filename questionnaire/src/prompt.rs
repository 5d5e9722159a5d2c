use std::ops::{Deref, DerefMut};

use questionnaire_types::{Answer, PromptError, Question, QuestionKind, Session, Terminal};
use tracing::{debug, warn};

use crate::{Navigation, Outcome, handlers, should_ask};

/// Notice shown when a question's kind cannot be asked.
pub const UNKNOWN_KIND: &str = "Unknown question type. Skipping question.";

/// Notice shown when back is requested on the first question.
pub const ALREADY_FIRST: &str = "You are already at the first question. Cannot go back.";

/// A questionnaire: the questions plus the session-wide navigation policy.
///
/// Running it walks the questions in order and returns exactly one [`Answer`]
/// per question, in question order.
#[derive(Debug, Clone, Default)]
pub struct Prompt {
    questions: Vec<Question>,
    allow_back_navigation: bool,
    allow_skip: bool,
    prelude: Option<String>,
    epilogue: Option<String>,
}

impl Prompt {
    /// Create a questionnaire. Back navigation and skipping are off by default.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    /// Allow going back to the previous question, unless a question overrides it.
    pub fn allow_back_navigation(mut self, allow: bool) -> Self {
        self.allow_back_navigation = allow;
        self
    }

    /// Allow skipping questions, unless a question overrides it.
    pub fn allow_skip(mut self, allow: bool) -> Self {
        self.allow_skip = allow;
        self
    }

    /// Set a message shown before the first question.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set a message shown after the last answer.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Open a session on `terminal` and run the questionnaire in it.
    ///
    /// The session is closed exactly once, whether the run completes, fails,
    /// or unwinds from a panicking condition. A terminal that cannot be opened
    /// fails the run before anything is asked.
    pub fn run<T: Terminal>(&self, terminal: &mut T) -> Result<Vec<Answer>, PromptError> {
        let mut session = SessionGuard::new(terminal.open()?);
        debug!(questions = self.questions.len(), "session opened");
        self.run_session(&mut *session)
    }

    /// Run the questionnaire in an already open session. Does not close it.
    pub fn run_session<S: Session + ?Sized>(
        &self,
        session: &mut S,
    ) -> Result<Vec<Answer>, PromptError> {
        let mut answers: Vec<Answer> = Vec::with_capacity(self.questions.len());
        let mut index = 0;

        if let Some(prelude) = &self.prelude {
            session.say(prelude);
            session.say("");
        }

        while let Some(question) = self.questions.get(index) {
            if !should_ask(question, &answers)? {
                debug!(index, id = question.id(), "condition not met");
                answers.push(Answer::absent(question.id()));
                index += 1;
                continue;
            }

            let nav = Navigation::new(
                question
                    .allow_back_navigation()
                    .unwrap_or(self.allow_back_navigation),
                question.allow_skip().unwrap_or(self.allow_skip),
                index,
            );

            let outcome = match question.kind() {
                QuestionKind::MultipleChoice(choice) => {
                    handlers::multiple_choice(question.text(), choice, &answers, session, nav)?
                }
                QuestionKind::Open => handlers::open(question.text(), session, nav)?,
                QuestionKind::Number => handlers::number(question.text(), session, nav)?,
                kind => {
                    warn!(index, id = question.id(), kind = kind.tag(), "unknown question kind");
                    session.say(UNKNOWN_KIND);
                    answers.push(Answer::absent(question.id()));
                    index += 1;
                    continue;
                }
            };

            apply(outcome, question.id(), &mut index, &mut answers, session);
        }

        if let Some(epilogue) = &self.epilogue {
            session.say("");
            session.say(epilogue);
        }

        Ok(answers)
    }
}

/// Record `outcome` for the question at `index` and move the cursor.
///
/// Back pops the previous answer so that question is asked again; on the first
/// question it only prints a notice and leaves the cursor and answers untouched.
fn apply<S: Session + ?Sized>(
    outcome: Outcome,
    id: &str,
    index: &mut usize,
    answers: &mut Vec<Answer>,
    session: &mut S,
) {
    match outcome {
        Outcome::Back if *index > 0 => {
            debug!(index = *index, id, "back");
            *index -= 1;
            answers.pop();
        }
        Outcome::Back => {
            warn!(id, "back requested on the first question");
            session.say(ALREADY_FIRST);
        }
        Outcome::Skip => {
            debug!(index = *index, id, "skipped");
            answers.push(Answer::absent(id));
            *index += 1;
        }
        Outcome::Answer(value) => {
            debug!(index = *index, id, answer = %value, "answered");
            answers.push(Answer {
                id: id.to_string(),
                answer: Some(value),
            });
            *index += 1;
        }
    }
}

/// Closes the wrapped session when dropped.
struct SessionGuard<S: Session> {
    session: S,
}

impl<S: Session> SessionGuard<S> {
    fn new(session: S) -> Self {
        Self { session }
    }
}

impl<S: Session> Deref for SessionGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}

impl<S: Session> DerefMut for SessionGuard<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

impl<S: Session> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        self.session.close();
        debug!("session closed");
    }
}
