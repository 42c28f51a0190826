use serde::Deserialize;

const OPTION_SEPARATOR: char = '|';

/// One row of a question file. Options are stored as a single
/// `|`-separated column.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: String,
    pub options: String,
    pub correct: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: String,
    pub explanation: String,
}

impl Question {
    pub fn new<S: Into<String>>(
        text: S,
        options: &[&str],
        correct_option: S,
        explanation: S,
    ) -> Self {
        Question {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct_option.into(),
            explanation: explanation.into(),
        }
    }

    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|o| o == choice)
    }

    pub fn is_choice_correct(&self, choice: &str) -> bool {
        self.correct_option == choice
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        let options = raw_question
            .options
            .split(OPTION_SEPARATOR)
            .map(|o| o.trim().to_owned())
            .collect();

        Question {
            text: raw_question.question.trim().to_owned(),
            options,
            correct_option: raw_question.correct.trim().to_owned(),
            explanation: raw_question.explanation.trim().to_owned(),
        }
    }
}
