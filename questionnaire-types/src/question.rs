use crate::Condition;

/// A single question in a questionnaire.
#[derive(Debug, Clone)]
pub struct Question {
    /// Stable identifier, used as the key of the recorded answer.
    id: String,

    /// The prompt text shown to the user.
    text: String,

    /// The kind of question (determines how input is interpreted).
    kind: QuestionKind,

    /// Per-question override of the session's back navigation policy.
    allow_back_navigation: Option<bool>,

    /// Per-question override of the session's skip policy.
    allow_skip: Option<bool>,

    /// Presented only when this holds for the answers so far.
    condition: Option<Condition>,
}

impl Question {
    /// Create a new question.
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            allow_back_navigation: None,
            allow_skip: None,
            condition: None,
        }
    }

    /// Create a multiple-choice question. Fails if `options` is empty.
    pub fn multiple_choice<I, S>(
        id: impl Into<String>,
        text: impl Into<String>,
        options: I,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = QuestionKind::MultipleChoice(MultipleChoiceQuestion::new(options)?);
        Ok(Self::new(id, text, kind))
    }

    /// Create an open (free text) question.
    pub fn open(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, text, QuestionKind::Open)
    }

    /// Create a number question.
    pub fn number(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, text, QuestionKind::Number)
    }

    /// Build a question from its wire tag (`multiple-choice`, `open`, `number`).
    ///
    /// See [`QuestionKind::from_tag`] for how tags and options are checked.
    pub fn from_tag<I, S>(
        id: impl Into<String>,
        tag: &str,
        text: impl Into<String>,
        options: I,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(QuestionError::BlankId);
        }
        Ok(Self::new(id, text, QuestionKind::from_tag(tag, options)?))
    }

    /// Override the session's back navigation policy for this question.
    pub fn with_back_navigation(mut self, allow: bool) -> Self {
        self.allow_back_navigation = Some(allow);
        self
    }

    /// Override the session's skip policy for this question.
    pub fn with_skip(mut self, allow: bool) -> Self {
        self.allow_skip = Some(allow);
        self
    }

    /// Only present this question when `condition` holds.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// The per-question back navigation override, if any.
    pub fn allow_back_navigation(&self) -> Option<bool> {
        self.allow_back_navigation
    }

    /// The per-question skip override, if any.
    pub fn allow_skip(&self) -> Option<bool> {
        self.allow_skip
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

/// The kind of question, determining how a line of input is interpreted.
///
/// New kinds may be added; consumers must handle [`QuestionKind::Unrecognized`]
/// and any future variant with a fallback arm.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuestionKind {
    /// Pick one of a numbered list of options.
    MultipleChoice(MultipleChoiceQuestion),

    /// Free text input, taken verbatim.
    Open,

    /// Numeric input.
    Number,

    /// A kind this version does not know how to ask. Carries the original tag.
    Unrecognized(String),
}

impl QuestionKind {
    pub const MULTIPLE_CHOICE_TAG: &'static str = "multiple-choice";
    pub const OPEN_TAG: &'static str = "open";
    pub const NUMBER_TAG: &'static str = "number";

    /// Build a kind from its wire tag.
    ///
    /// `options` must be non-empty for `multiple-choice` and empty for every
    /// other tag. Unknown tags become [`QuestionKind::Unrecognized`].
    pub fn from_tag<I, S>(tag: &str, options: I) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if tag == Self::MULTIPLE_CHOICE_TAG {
            return Ok(Self::MultipleChoice(MultipleChoiceQuestion::new(options)?));
        }

        if options.into_iter().next().is_some() {
            return Err(QuestionError::UnexpectedOptions(tag.to_string()));
        }

        Ok(match tag {
            Self::OPEN_TAG => Self::Open,
            Self::NUMBER_TAG => Self::Number,
            other => Self::Unrecognized(other.to_string()),
        })
    }

    /// The wire tag of this kind.
    pub fn tag(&self) -> &str {
        match self {
            Self::MultipleChoice(_) => Self::MULTIPLE_CHOICE_TAG,
            Self::Open => Self::OPEN_TAG,
            Self::Number => Self::NUMBER_TAG,
            Self::Unrecognized(tag) => tag,
        }
    }

    /// The options of a multiple-choice kind.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::MultipleChoice(choice) => Some(choice.options()),
            _ => None,
        }
    }
}

/// Configuration for a multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleChoiceQuestion {
    /// The options, shown 1-based. Never empty.
    options: Vec<String>,
}

impl MultipleChoiceQuestion {
    /// Create a new multiple-choice configuration. Fails if `options` is empty.
    pub fn new<I, S>(options: I) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Look up an option by its 1-based position.
    pub fn option(&self, position: i64) -> Option<&str> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.options.get(index).map(String::as_str)
    }
}

/// Error type for invalid question definitions.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QuestionError {
    #[error("Multiple-choice questions need at least one option")]
    NoOptions,

    #[error("Questions of type '{0}' cannot have options")]
    UnexpectedOptions(String),

    #[error("Question id must not be blank")]
    BlankId,
}
