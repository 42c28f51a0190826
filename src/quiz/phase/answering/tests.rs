use super::*;

fn build_question() -> Question {
    Question::new(
        "Which law says users prefer familiar patterns?",
        &["Fitts's Law", "Jakob's Law", "Miller's Law"],
        "Jakob's Law",
        "Users prefer familiar patterns",
    )
}

fn build_state() -> AnsweringState {
    AnsweringState::new(1)
}

#[test]
fn correct_choice_is_recognized() {
    let state = build_state();
    let question = build_question();
    let feedback = state.judge(&question, "Jakob's Law", 0).unwrap();
    assert!(feedback.is_correct);
    assert_eq!(feedback.message, MESSAGE_CORRECT);
    assert_eq!(feedback.explanation, "Users prefer familiar patterns");
}

#[test]
fn incorrect_choice_is_recognized() {
    let state = build_state();
    let question = build_question();
    let feedback = state.judge(&question, "Miller's Law", 5).unwrap();
    assert!(!feedback.is_correct);
    assert_eq!(feedback.message, MESSAGE_INCORRECT);
    assert_eq!(feedback.explanation, "Users prefer familiar patterns");
}

#[test]
fn second_correct_in_a_row_is_plain() {
    let state = build_state();
    let question = build_question();
    let feedback = state.judge(&question, "Jakob's Law", 1).unwrap();
    assert_eq!(feedback.message, MESSAGE_CORRECT);
}

#[test]
fn third_correct_in_a_row_celebrates_streak() {
    let state = build_state();
    let question = build_question();
    let feedback = state.judge(&question, "Jakob's Law", 2).unwrap();
    assert_eq!(feedback.message, "Amazing! 3 in a row!");
    let feedback = state.judge(&question, "Jakob's Law", 6).unwrap();
    assert_eq!(feedback.message, "Amazing! 7 in a row!");
}

#[test]
fn unlisted_choice_is_rejected() {
    let state = build_state();
    let question = build_question();
    assert_eq!(
        state.judge(&question, "Hick's Law", 0).unwrap_err(),
        QuizError::InvalidChoice {
            choice: "Hick's Law".to_owned()
        }
    );
}

#[test]
fn choices_are_matched_exactly() {
    let state = build_state();
    let question = build_question();
    assert!(state.judge(&question, "jakob's law", 0).is_err());
}

#[test]
fn never_ends_on_its_own() {
    let mut state = build_state();
    state.on_begin();
    state.on_tick(Duration::from_secs(3600));
    assert!(!state.is_over());
}
