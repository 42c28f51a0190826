use log::debug;
use std::time::Duration;

use crate::quiz::definition::Question;
use crate::quiz::error::QuizError;
use crate::quiz::phase::Feedback;
use crate::quiz::State;

#[cfg(test)]
mod tests;

const MESSAGE_CORRECT: &'static str = "Correct!";
const MESSAGE_INCORRECT: &'static str = "Not quite right. Keep learning!";

// Streak length at which the correct message turns into a streak message.
const STREAK_MESSAGE_THRESHOLD: usize = 3;

#[derive(Clone, Debug)]
pub struct AnsweringState {
    question_index: usize,
}

impl AnsweringState {
    pub fn new(question_index: usize) -> Self {
        AnsweringState { question_index }
    }

    /// Judges `choice` against `question` without touching any quiz state.
    /// `streak` is the streak before this answer.
    pub fn judge(
        &self,
        question: &Question,
        choice: &str,
        streak: usize,
    ) -> Result<Feedback, QuizError> {
        if !question.has_option(choice) {
            return Err(QuizError::InvalidChoice {
                choice: choice.into(),
            });
        }

        let is_correct = question.is_choice_correct(choice);
        let message = if !is_correct {
            MESSAGE_INCORRECT.to_owned()
        } else if streak + 1 >= STREAK_MESSAGE_THRESHOLD {
            format!("Amazing! {} in a row!", streak + 1)
        } else {
            MESSAGE_CORRECT.to_owned()
        };

        Ok(Feedback {
            is_correct,
            message,
            explanation: question.explanation.clone(),
        })
    }
}

impl State for AnsweringState {
    fn on_begin(&mut self) {
        debug!("Waiting for an answer to question #{}", self.question_index + 1);
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
