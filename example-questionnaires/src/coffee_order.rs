use questionnaire::{AnswerValue, Condition, Question, QuestionError, find_answer};

const MILK_DRINKS: [&str; 2] = ["Latte", "Cappuccino"];

/// A coffee order where the milk question only appears for milk drinks.
pub fn coffee_order() -> Result<Vec<Question>, QuestionError> {
    let milk_drink = Condition::new(|answers| {
        find_answer(answers, "drink")
            .and_then(|a| a.answer.as_ref())
            .and_then(AnswerValue::as_str)
            .is_some_and(|drink| MILK_DRINKS.iter().any(|milk| *milk == drink))
    });

    Ok(vec![
        Question::multiple_choice(
            "drink",
            "What would you like?",
            ["Espresso", "Latte", "Cappuccino", "Filter"],
        )?,
        Question::multiple_choice("size", "Which size?", ["Small", "Medium", "Large"])?,
        Question::multiple_choice("milk", "Which milk?", ["Whole", "Oat", "Soy"])?
            .with_condition(milk_drink),
        Question::number("shots", "How many extra shots?").with_skip(true),
        Question::open("name", "Name for the order?"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::{Answer, Prompt, ScriptedTerminal};

    #[test]
    fn espresso_skips_milk() {
        let mut terminal = ScriptedTerminal::new(["1", "1", "s", "Ada"]);
        let answers = Prompt::new(coffee_order().unwrap())
            .run(&mut terminal)
            .unwrap();

        assert_eq!(
            answers,
            vec![
                Answer::new("drink", "Espresso"),
                Answer::new("size", "Small"),
                Answer::absent("milk"),
                Answer::absent("shots"),
                Answer::new("name", "Ada"),
            ]
        );
        assert!(!terminal.rendered("Which milk?"));
    }

    #[test]
    fn latte_changes_size_after_going_back() {
        let mut terminal = ScriptedTerminal::new(["2", "3", "b", "2", "1", "2", "Bob"]);
        let answers = Prompt::new(coffee_order().unwrap())
            .allow_back_navigation(true)
            .run(&mut terminal)
            .unwrap();

        assert_eq!(
            answers,
            vec![
                Answer::new("drink", "Latte"),
                Answer::new("size", "Medium"),
                Answer::new("milk", "Whole"),
                Answer::new("shots", 2),
                Answer::new("name", "Bob"),
            ]
        );
    }
}
