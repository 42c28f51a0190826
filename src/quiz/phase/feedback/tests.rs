use super::*;
use std::time::Duration;

fn feedback() -> Feedback {
    Feedback {
        is_correct: true,
        message: "Correct!".to_owned(),
        explanation: "example explanation".to_owned(),
    }
}

#[test]
fn ends_after_duration() {
    let duration = Duration::from_millis(2500);
    let mut state = FeedbackState::new(0, feedback(), duration);
    assert!(!state.is_over());
    state.on_begin();
    assert!(!state.is_over());
    state.on_tick(Duration::from_millis(1500));
    assert!(!state.is_over());
    state.on_tick(Duration::from_millis(999));
    assert!(!state.is_over());
    state.on_tick(Duration::from_millis(1));
    assert!(state.is_over());
}

#[test]
fn keeps_feedback() {
    let state = FeedbackState::new(2, feedback(), Duration::from_secs(1));
    assert_eq!(state.feedback(), &feedback());
}
