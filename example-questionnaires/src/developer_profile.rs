use questionnaire::{Condition, Question, QuestionError, find_answer};

/// A short developer survey with a follow-up that depends on experience.
pub fn developer_profile() -> Result<Vec<Question>, QuestionError> {
    Ok(vec![
        Question::open("name", "What is your name?"),
        Question::multiple_choice(
            "language",
            "What is your favorite programming language?",
            ["Rust", "TypeScript", "Python", "Go"],
        )?,
        Question::number("years", "How many years have you been programming?"),
        Question::open("mentor", "Who got you into programming?")
            .with_skip(true)
            .with_condition(Condition::new(|answers| {
                find_answer(answers, "years")
                    .and_then(|a| a.answer.as_ref())
                    .and_then(|v| v.as_number())
                    .is_some_and(|years| years >= 5.0)
            })),
        Question::open("why-rust", "What made you pick Rust?")
            .with_condition(Condition::answered_with("language", "Rust")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::{Answer, Prompt, ScriptedTerminal};

    #[test]
    fn junior_rustacean() {
        let mut terminal = ScriptedTerminal::new(["Ferris", "1", "2", "Safety"]);
        let answers = Prompt::new(developer_profile().unwrap())
            .run(&mut terminal)
            .unwrap();

        assert_eq!(
            answers,
            vec![
                Answer::new("name", "Ferris"),
                Answer::new("language", "Rust"),
                Answer::new("years", 2),
                Answer::absent("mentor"),
                Answer::new("why-rust", "Safety"),
            ]
        );
    }

    #[test]
    fn senior_gopher_skips_mentor() {
        let mut terminal = ScriptedTerminal::new(["Gopher", "4", "12", "s"]);
        let answers = Prompt::new(developer_profile().unwrap())
            .run(&mut terminal)
            .unwrap();

        assert_eq!(answers[3], Answer::absent("mentor"));
        assert_eq!(answers[4], Answer::absent("why-rust"));
        assert!(terminal.rendered("Who got you into programming? (s: Skip): "));
    }
}
