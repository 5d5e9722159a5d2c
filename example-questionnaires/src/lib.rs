pub mod coffee_order;
pub mod developer_profile;

pub use coffee_order::coffee_order;
pub use developer_profile::developer_profile;

use questionnaire::Answer;

/// Render answers one per line as `id: value`, with `-` for absent answers.
pub fn format_answers(answers: &[Answer]) -> String {
    answers
        .iter()
        .map(|answer| match &answer.answer {
            Some(value) => format!("{}: {value}", answer.id),
            None => format!("{}: -", answer.id),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
