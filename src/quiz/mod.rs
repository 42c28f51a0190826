use log::{debug, info};
use std::time::Duration;

use self::phase::*;
use crate::output::QuizOutput;

pub mod definition;
pub mod error;
mod phase;
pub mod settings;

pub use self::definition::{Question, QuestionBank};
pub use self::error::QuizError;
pub use self::phase::{Feedback, Grade, Results};
pub use self::settings::Settings;


trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Answering,
    ShowingFeedback,
    Finished,
}

/// Read-only view of a quiz, handed to renderers after every transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    pub total: usize,
    pub score: usize,
    pub streak: usize,
    pub phase: Phase,
    /// The question being answered or reviewed. `None` once finished.
    pub question: Option<Question>,
    pub last_feedback: Option<Feedback>,
    pub is_perfect: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Accepted(Feedback),
    Ignored,
}

#[derive(Debug)]
enum PhaseState {
    Answering(AnsweringState),
    ShowingFeedback(FeedbackState),
    Finished(ResultsState),
}

impl PhaseState {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            PhaseState::Answering(s) => s,
            PhaseState::ShowingFeedback(s) => s,
            PhaseState::Finished(s) => s,
        }
    }

    fn kind(&self) -> Phase {
        match self {
            PhaseState::Answering(_) => Phase::Answering,
            PhaseState::ShowingFeedback(_) => Phase::ShowingFeedback,
            PhaseState::Finished(_) => Phase::Finished,
        }
    }
}

pub struct Quiz<O: QuizOutput> {
    bank: QuestionBank,
    settings: Settings,
    current_index: usize,
    score: usize,
    streak: usize,
    current_phase: PhaseState,
    output: O,
}

impl<O: QuizOutput> Quiz<O> {
    pub fn new(bank: QuestionBank, settings: Settings, output: O) -> Quiz<O> {
        let answering_state = AnsweringState::new(0);
        let mut quiz = Quiz {
            bank,
            settings,
            current_index: 0,
            score: 0,
            streak: 0,
            current_phase: PhaseState::Answering(answering_state),
            output,
        };
        info!("Starting quiz with {} questions", quiz.bank.len());
        quiz.current_phase.get_state().on_begin();
        quiz.publish();
        quiz
    }

    pub fn get_state(&self) -> QuizState {
        let phase = self.current_phase.kind();
        let question = match phase {
            Phase::Finished => None,
            _ => self.bank.get(self.current_index).ok().cloned(),
        };
        let last_feedback = match &self.current_phase {
            PhaseState::ShowingFeedback(s) => Some(s.feedback().clone()),
            _ => None,
        };
        let is_perfect = match &self.current_phase {
            PhaseState::Finished(s) => Some(s.results().is_perfect),
            _ => None,
        };
        QuizState {
            current_index: self.current_index,
            total: self.bank.len(),
            score: self.score,
            streak: self.streak,
            phase,
            question,
            last_feedback,
            is_perfect,
        }
    }

    pub fn results(&self) -> Option<&Results> {
        match &self.current_phase {
            PhaseState::Finished(s) => Some(s.results()),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        match self.current_phase {
            PhaseState::Finished(_) => true,
            _ => false,
        }
    }

    pub fn submit_answer(&mut self, choice: &str) -> Result<Submission, QuizError> {
        let answering_state = match &self.current_phase {
            PhaseState::Answering(s) => s,
            _ => {
                debug!("Ignoring answer {:?} outside of the answering phase", choice);
                return Ok(Submission::Ignored);
            }
        };

        // Nothing is mutated until the answer has been judged.
        let question = self.bank.get(self.current_index)?;
        let feedback = answering_state.judge(question, choice, self.streak)?;

        if feedback.is_correct {
            self.score += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        debug!(
            "Answer {:?} to question #{} is {}",
            choice,
            self.current_index + 1,
            if feedback.is_correct { "correct" } else { "incorrect" }
        );

        let state = FeedbackState::new(
            self.current_index,
            feedback.clone(),
            self.settings.feedback_delay,
        );
        self.set_current_phase(PhaseState::ShowingFeedback(state));
        Ok(Submission::Accepted(feedback))
    }

    pub fn tick(&mut self, dt: Duration) {
        let state = self.current_phase.get_state();
        state.on_tick(dt);
        if state.is_over() {
            self.advance();
        }
    }

    pub fn reset(&mut self) {
        info!("Resetting quiz");
        self.current_index = 0;
        self.score = 0;
        self.streak = 0;
        let state = AnsweringState::new(0);
        self.set_current_phase(PhaseState::Answering(state));
    }

    fn advance(&mut self) {
        match &self.current_phase {
            PhaseState::ShowingFeedback(_) => {
                let next_index = self.current_index + 1;
                if next_index < self.bank.len() {
                    self.current_index = next_index;
                    let state = AnsweringState::new(next_index);
                    self.set_current_phase(PhaseState::Answering(state));
                } else {
                    self.current_index = self.bank.len();
                    let results = Results::new(
                        self.score,
                        self.bank.len(),
                        self.streak,
                        self.settings.pass_percentage,
                    );
                    self.set_current_phase(PhaseState::Finished(ResultsState::new(
                        results.clone(),
                    )));
                    self.output.on_results(&results);
                }
            }
            _ => (),
        }
    }

    fn set_current_phase(&mut self, phase: PhaseState) {
        self.current_phase.get_state().on_end();
        self.current_phase = phase;
        info!("Entering quiz phase: {:?}", self.current_phase.kind());
        self.current_phase.get_state().on_begin();
        self.publish();
    }

    fn publish(&self) {
        self.output.on_state_change(&self.get_state());
    }
}
