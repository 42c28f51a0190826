use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Question index {index} is out of range (bank has {len} questions)")]
    OutOfRange { index: usize, len: usize },

    #[error("\"{choice}\" is not one of the options for this question")]
    InvalidChoice { choice: String },
}

/// Reasons a question bank is refused at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Question bank is empty")]
    Empty,

    #[error("Question \"{question}\" needs at least two options")]
    TooFewOptions { question: String },

    #[error("Question \"{question}\" has a blank option")]
    BlankOption { question: String },

    #[error("Question \"{question}\" lists option \"{option}\" more than once")]
    DuplicateOption { question: String, option: String },

    #[error("Correct option \"{option}\" of question \"{question}\" is not one of its options")]
    UnknownCorrectOption { question: String, option: String },
}
