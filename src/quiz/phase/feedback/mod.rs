use log::debug;
use std::time::Duration;

use crate::quiz::State;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub is_correct: bool,
    pub message: String,
    pub explanation: String,
}

/// Shows the verdict for one answer, then expires once `time_to_wait`
/// has been ticked away. Dropping this state cancels the pending advance.
#[derive(Clone, Debug)]
pub struct FeedbackState {
    question_index: usize,
    feedback: Feedback,
    time_elapsed: Duration,
    time_to_wait: Duration,
}

impl FeedbackState {
    pub fn new(question_index: usize, feedback: Feedback, duration: Duration) -> Self {
        FeedbackState {
            question_index,
            feedback,
            time_elapsed: Duration::default(),
            time_to_wait: duration,
        }
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

impl State for FeedbackState {
    fn on_begin(&mut self) {
        debug!(
            "Showing feedback for question #{} (correct: {})",
            self.question_index + 1,
            self.feedback.is_correct
        );
    }

    fn on_tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_to_wait
    }
}
