use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::QuizOutput;
use crate::quiz::{QuizState, Results};

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    states: Arc<RwLock<Vec<QuizState>>>,
    results: Arc<RwLock<Vec<Results>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&mut self) -> Vec<QuizState> {
        std::mem::replace(&mut *self.states.write(), Vec::new())
    }

    pub fn last_state(&self) -> Option<QuizState> {
        self.states.read().last().cloned()
    }

    pub fn state_count(&self) -> usize {
        self.states.read().len()
    }

    pub fn results(&self) -> Vec<Results> {
        self.results.read().clone()
    }
}

impl QuizOutput for MockQuizOutput {
    fn on_state_change(&self, state: &QuizState) {
        self.states.write().push(state.clone());
    }

    fn on_results(&self, results: &Results) {
        self.results.write().push(results.clone());
    }
}
