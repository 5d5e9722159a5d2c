//! Per-type answer handlers.
//!
//! Each handler owns the retry loop for one question kind: it renders the
//! prompt, reads a line, recognizes the back/skip tokens allowed by its
//! [`Navigation`], and otherwise interprets the line for its kind. Invalid
//! input prints a notice and asks again, without limit.

use questionnaire_types::{
    Answer, AnswerValue, Console, LineReader, MultipleChoiceQuestion, PromptError,
};
use tracing::debug;

use crate::{Navigation, Outcome, leading_float, leading_integer};

/// Query shown when reading a multiple-choice selection.
pub const CHOICE_QUERY: &str = "Choose an option (number or letter): ";

/// Notice shown after an invalid multiple-choice selection.
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Notice shown after input that is not a number.
pub const INVALID_NUMBER: &str = "Invalid number. Please try again.";

/// Ask a multiple-choice question.
///
/// Lists the options 1-based, followed by an "Additional Options" block when
/// back or skip is available. Returns the text of the chosen option.
pub fn multiple_choice<S>(
    prompt: &str,
    choice: &MultipleChoiceQuestion,
    _answers: &[Answer],
    session: &mut S,
    nav: Navigation,
) -> Result<Outcome, PromptError>
where
    S: LineReader + Console + ?Sized,
{
    loop {
        session.say(&format!("\n{prompt}"));
        for (position, option) in choice.options().iter().enumerate() {
            session.say(&format!("{}. {option}", position + 1));
        }

        let extra = nav.extra_options();
        if !extra.is_empty() {
            session.say("\nAdditional Options:");
            for option in extra {
                session.say(option);
            }
        }

        let line = session.ask(CHOICE_QUERY)?;
        if let Some(control) = nav.control(&line) {
            return Ok(control);
        }

        if let Some(option) = leading_integer(&line).and_then(|position| choice.option(position)) {
            return Ok(Outcome::Answer(AnswerValue::Text(option.to_string())));
        }

        debug!(index = nav.index, input = %line, "invalid choice");
        session.say(INVALID_CHOICE);
    }
}

/// Ask an open question. Any line that is not a control token is the answer,
/// taken verbatim (an empty line is a valid answer).
pub fn open<S>(prompt: &str, session: &mut S, nav: Navigation) -> Result<Outcome, PromptError>
where
    S: LineReader + Console + ?Sized,
{
    let line = session.ask(&format!("{prompt}{}: ", nav.hint()))?;
    Ok(nav
        .control(&line)
        .unwrap_or(Outcome::Answer(AnswerValue::Text(line))))
}

/// Ask a number question.
///
/// The line is read with [`leading_float`], so trailing text after a valid
/// numeric prefix is ignored (`"42abc"` answers `42`).
pub fn number<S>(prompt: &str, session: &mut S, nav: Navigation) -> Result<Outcome, PromptError>
where
    S: LineReader + Console + ?Sized,
{
    let query = format!("{prompt}{}: ", nav.hint());
    loop {
        let line = session.ask(&query)?;
        if let Some(control) = nav.control(&line) {
            return Ok(control);
        }

        if let Some(value) = leading_float(&line) {
            return Ok(Outcome::Answer(AnswerValue::Number(value)));
        }

        debug!(index = nav.index, input = %line, "invalid number");
        session.say(INVALID_NUMBER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedTerminal;
    use questionnaire_types::Terminal;

    fn languages() -> MultipleChoiceQuestion {
        MultipleChoiceQuestion::new(["JavaScript", "TypeScript", "Python"]).unwrap()
    }

    const LANGUAGE: &str = "What is your favorite programming language?";

    #[test]
    fn multiple_choice_returns_selected_option() {
        let mut terminal = ScriptedTerminal::new(["2"]);
        let mut session = terminal.open().unwrap();

        let outcome =
            multiple_choice(LANGUAGE, &languages(), &[], &mut session, Navigation::default());
        assert_eq!(outcome.unwrap(), Outcome::Answer("TypeScript".into()));
    }

    #[test]
    fn multiple_choice_back_when_allowed() {
        let mut terminal = ScriptedTerminal::new(["b"]);
        let mut session = terminal.open().unwrap();

        let outcome = multiple_choice(
            LANGUAGE,
            &languages(),
            &[],
            &mut session,
            Navigation::new(true, false, 1),
        );
        assert_eq!(outcome.unwrap(), Outcome::Back);
    }

    #[test]
    fn multiple_choice_skip_when_allowed() {
        let mut terminal = ScriptedTerminal::new(["s"]);
        let mut session = terminal.open().unwrap();

        let outcome = multiple_choice(
            LANGUAGE,
            &languages(),
            &[],
            &mut session,
            Navigation::new(false, true, 0),
        );
        assert_eq!(outcome.unwrap(), Outcome::Skip);
    }

    #[test]
    fn multiple_choice_retries_invalid_input() {
        let mut terminal = ScriptedTerminal::new(["invalid", "0", "4", "b", "1"]);
        let mut session = terminal.open().unwrap();

        let outcome =
            multiple_choice(LANGUAGE, &languages(), &[], &mut session, Navigation::default());
        assert_eq!(outcome.unwrap(), Outcome::Answer("JavaScript".into()));
        drop(session);

        assert_eq!(terminal.prompts().len(), 5);
        let notices = terminal
            .output()
            .iter()
            .filter(|line| *line == INVALID_CHOICE)
            .count();
        assert_eq!(notices, 4);
    }

    #[test]
    fn multiple_choice_renders_numbered_options_and_extras() {
        let mut terminal = ScriptedTerminal::new(["3"]);
        let mut session = terminal.open().unwrap();

        multiple_choice(
            LANGUAGE,
            &languages(),
            &[],
            &mut session,
            Navigation::new(true, true, 1),
        )
        .unwrap();
        drop(session);

        assert_eq!(
            terminal.output(),
            &[
                format!("\n{LANGUAGE}"),
                "1. JavaScript".to_string(),
                "2. TypeScript".to_string(),
                "3. Python".to_string(),
                "\nAdditional Options:".to_string(),
                "b. Go Back".to_string(),
                "s. Skip".to_string(),
            ]
        );
        assert_eq!(terminal.prompts(), &[CHOICE_QUERY.to_string()]);
    }

    #[test]
    fn multiple_choice_hides_extras_on_first_question_without_skip() {
        let mut terminal = ScriptedTerminal::new(["1"]);
        let mut session = terminal.open().unwrap();

        multiple_choice(
            LANGUAGE,
            &languages(),
            &[],
            &mut session,
            Navigation::new(true, false, 0),
        )
        .unwrap();
        drop(session);

        assert!(!terminal.output().iter().any(|line| line.contains("Additional Options")));
    }

    #[test]
    fn open_returns_user_input() {
        let mut terminal = ScriptedTerminal::new(["John Doe"]);
        let mut session = terminal.open().unwrap();

        let outcome = open("What is your name?", &mut session, Navigation::default());
        assert_eq!(outcome.unwrap(), Outcome::Answer("John Doe".into()));
    }

    #[test]
    fn open_keeps_input_verbatim() {
        let mut terminal = ScriptedTerminal::new(["  padded  ", ""]);
        let mut session = terminal.open().unwrap();

        let padded = open("Motto?", &mut session, Navigation::default()).unwrap();
        assert_eq!(padded, Outcome::Answer("  padded  ".into()));

        let empty = open("Motto?", &mut session, Navigation::default()).unwrap();
        assert_eq!(empty, Outcome::Answer("".into()));
    }

    #[test]
    fn open_back_and_skip() {
        let mut terminal = ScriptedTerminal::new(["b", "s", "s"]);
        let mut session = terminal.open().unwrap();

        let back = open("Name?", &mut session, Navigation::new(true, false, 1)).unwrap();
        assert_eq!(back, Outcome::Back);

        let skip = open("Name?", &mut session, Navigation::new(false, true, 0)).unwrap();
        assert_eq!(skip, Outcome::Skip);

        let skip = open("Name?", &mut session, Navigation::new(true, true, 1)).unwrap();
        assert_eq!(skip, Outcome::Skip);
    }

    #[test]
    fn open_treats_tokens_as_text_when_not_allowed() {
        let mut terminal = ScriptedTerminal::new(["b", "s"]);
        let mut session = terminal.open().unwrap();

        let back = open("Initial?", &mut session, Navigation::new(true, false, 0)).unwrap();
        assert_eq!(back, Outcome::Answer("b".into()));

        let skip = open("Initial?", &mut session, Navigation::default()).unwrap();
        assert_eq!(skip, Outcome::Answer("s".into()));
    }

    #[test]
    fn open_prompt_carries_hints() {
        let mut terminal = ScriptedTerminal::new(["x"]);
        let mut session = terminal.open().unwrap();

        open("Name?", &mut session, Navigation::new(true, true, 1)).unwrap();
        drop(session);

        assert_eq!(terminal.prompts(), &["Name? (b: Go Back, s: Skip): ".to_string()]);
    }

    #[test]
    fn number_returns_parsed_number() {
        let mut terminal = ScriptedTerminal::new(["25"]);
        let mut session = terminal.open().unwrap();

        let outcome = number("How old are you?", &mut session, Navigation::default());
        assert_eq!(outcome.unwrap(), Outcome::Answer(AnswerValue::Number(25.0)));
    }

    #[test]
    fn number_back_and_skip() {
        let mut terminal = ScriptedTerminal::new(["B", "S"]);
        let mut session = terminal.open().unwrap();

        let back = number("Age?", &mut session, Navigation::new(true, false, 1)).unwrap();
        assert_eq!(back, Outcome::Back);

        let skip = number("Age?", &mut session, Navigation::new(false, true, 0)).unwrap();
        assert_eq!(skip, Outcome::Skip);
    }

    #[test]
    fn number_retries_until_valid() {
        let mut terminal = ScriptedTerminal::new(["invalid", "42"]);
        let mut session = terminal.open().unwrap();

        let outcome = number("Age?", &mut session, Navigation::default()).unwrap();
        assert_eq!(outcome, Outcome::Answer(AnswerValue::Number(42.0)));
        drop(session);

        assert_eq!(terminal.prompts().len(), 2);
        assert_eq!(terminal.output(), &[INVALID_NUMBER.to_string()]);
    }

    #[test]
    fn number_skip_after_invalid_input() {
        let mut terminal = ScriptedTerminal::new(["invalid", "s"]);
        let mut session = terminal.open().unwrap();

        let outcome = number("Age?", &mut session, Navigation::new(true, true, 1)).unwrap();
        assert_eq!(outcome, Outcome::Skip);
        drop(session);

        assert_eq!(terminal.prompts().len(), 2);
    }

    #[test]
    fn number_accepts_negative_decimal_and_prefix() {
        let mut terminal = ScriptedTerminal::new(["-1.5", "0", "42abc"]);
        let mut session = terminal.open().unwrap();

        for expected in [-1.5, 0.0, 42.0] {
            let outcome = number("Value?", &mut session, Navigation::default()).unwrap();
            assert_eq!(outcome, Outcome::Answer(AnswerValue::Number(expected)));
        }
    }

    #[test]
    fn number_prompt_hints() {
        let mut terminal = ScriptedTerminal::new(["1", "1", "1"]);
        let mut session = terminal.open().unwrap();

        number("Age?", &mut session, Navigation::new(true, false, 1)).unwrap();
        number("Age?", &mut session, Navigation::new(true, true, 0)).unwrap();
        number("Age?", &mut session, Navigation::default()).unwrap();
        drop(session);

        assert_eq!(
            terminal.prompts(),
            &[
                "Age? (b: Go Back): ".to_string(),
                "Age? (s: Skip): ".to_string(),
                "Age?: ".to_string(),
            ]
        );
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut terminal = ScriptedTerminal::new(["nope"]);
        let mut session = terminal.open().unwrap();

        let err = number("Age?", &mut session, Navigation::default()).unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
    }
}
