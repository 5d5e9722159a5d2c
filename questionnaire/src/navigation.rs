use questionnaire_types::AnswerValue;

/// What a type handler produced for one question.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A parsed answer.
    Answer(AnswerValue),

    /// The user asked to return to the previous question.
    Back,

    /// The user skipped the question.
    Skip,
}

/// Navigation rights resolved for the question being asked.
///
/// `allow_back` and `allow_skip` are the effective per-question flags (the
/// question's override, else the session default). `index` is the question's
/// zero-based position in the questionnaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    pub allow_back: bool,
    pub allow_skip: bool,
    pub index: usize,
}

impl Navigation {
    pub fn new(allow_back: bool, allow_skip: bool, index: usize) -> Self {
        Self {
            allow_back,
            allow_skip,
            index,
        }
    }

    /// Back is only offered when permitted and there is a previous question.
    pub fn can_go_back(&self) -> bool {
        self.allow_back && self.index > 0
    }

    /// Recognize a reserved control token in a raw input line.
    ///
    /// Only the whole line `b` or `s` counts, in either case. Each letter is a
    /// token only while the corresponding action is available.
    pub fn control(&self, line: &str) -> Option<Outcome> {
        if self.can_go_back() && line.eq_ignore_ascii_case("b") {
            Some(Outcome::Back)
        } else if self.allow_skip && line.eq_ignore_ascii_case("s") {
            Some(Outcome::Skip)
        } else {
            None
        }
    }

    /// Inline hint listing the available control letters, e.g. ` (b: Go Back, s: Skip)`.
    ///
    /// Empty when neither action is available.
    pub fn hint(&self) -> String {
        let hints: Vec<&str> = [
            self.can_go_back().then_some("b: Go Back"),
            self.allow_skip.then_some("s: Skip"),
        ]
        .into_iter()
        .flatten()
        .collect();

        if hints.is_empty() {
            String::new()
        } else {
            format!(" ({})", hints.join(", "))
        }
    }

    /// Extra menu entries for list-style prompts.
    pub fn extra_options(&self) -> Vec<&'static str> {
        [
            self.can_go_back().then_some("b. Go Back"),
            self.allow_skip.then_some("s. Skip"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
