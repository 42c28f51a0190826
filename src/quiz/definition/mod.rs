use anyhow::{Context, Result};
use itertools::Itertools;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::quiz::error::{BankError, QuizError};

mod builtin;
pub mod question;

pub use question::{Question, RawQuestion};


/// Ordered, validated, read-only list of questions.
#[derive(Clone, Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> std::result::Result<QuestionBank, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        for question in &questions {
            validate(question)?;
        }
        Ok(QuestionBank { questions })
    }

    pub fn open(source: &Path) -> Result<QuestionBank> {
        let file = File::open(source)
            .with_context(|| format!("Could not open question file {}", source.display()))?;
        QuestionBank::from_reader(file)
            .with_context(|| format!("Could not load questions from {}", source.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionBank> {
        let mut questions = Vec::new();

        let mut csv_reader = csv::Reader::from_reader(reader);
        for (row, question) in csv_reader.deserialize().enumerate() {
            let raw_question: RawQuestion =
                question.with_context(|| format!("Malformed question on row {}", row + 1))?;
            questions.push(raw_question.into());
        }

        Ok(QuestionBank::new(questions)?)
    }

    pub fn get(&self, index: usize) -> std::result::Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

fn validate(question: &Question) -> std::result::Result<(), BankError> {
    if question.options.len() < 2 {
        return Err(BankError::TooFewOptions {
            question: question.text.clone(),
        });
    }

    if question.options.iter().any(|o| o.trim().is_empty()) {
        return Err(BankError::BlankOption {
            question: question.text.clone(),
        });
    }

    if let Some(option) = question.options.iter().duplicates().next() {
        return Err(BankError::DuplicateOption {
            question: question.text.clone(),
            option: option.clone(),
        });
    }

    if !question.has_option(&question.correct_option) {
        return Err(BankError::UnknownCorrectOption {
            question: question.text.clone(),
            option: question.correct_option.clone(),
        });
    }

    Ok(())
}
