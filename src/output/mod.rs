use crate::quiz::{QuizState, Results};

#[cfg(test)]
pub mod mock;
pub mod terminal;

/// Receives everything the quiz wants shown to the player.
pub trait QuizOutput {
    /// Called after every transition with a fresh snapshot.
    fn on_state_change(&self, state: &QuizState);

    fn on_results(&self, results: &Results);
}
