use crate::output::QuizOutput;
use crate::quiz::{Phase, QuizState, Results};

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }
}

impl QuizOutput for TerminalOutput {
    fn on_state_change(&self, state: &QuizState) {
        if let Some(text) = render_state(state) {
            println!("{}", text);
        }
    }

    fn on_results(&self, results: &Results) {
        println!("{}", render_results(results));
    }
}

fn render_state(state: &QuizState) -> Option<String> {
    match state.phase {
        Phase::Answering => {
            let question = state.question.as_ref()?;
            let mut text = format!(
                "\n📋 Question {} of {} | Score: {}",
                state.current_index + 1,
                state.total,
                state.score
            );
            if state.streak > 0 {
                text += &format!(" | 🔥 {} in a row", state.streak);
            }
            text += &format!("\n**{}**", question.text);
            for (index, option) in question.options.iter().enumerate() {
                text += &format!("\n  {}. {}", index + 1, option);
            }
            Some(text)
        }
        Phase::ShowingFeedback => {
            let feedback = state.last_feedback.as_ref()?;
            let icon = if feedback.is_correct { "✅" } else { "❌" };
            Some(format!(
                "{} {}\n💡 {}",
                icon, feedback.message, feedback.explanation
            ))
        }
        Phase::Finished => state
            .is_perfect
            .filter(|is_perfect| *is_perfect)
            .map(|_| "🎉 Every single answer was right!".to_owned()),
    }
}

fn render_results(results: &Results) -> String {
    let mut text = format!(
        "\n🏆 {} ({}%)\nYou scored {} out of {} questions correctly",
        results.grade.headline(),
        results.percentage,
        results.score,
        results.total
    );
    if results.final_streak > 0 {
        text += &format!("\n🔥 Final streak: {}", results.final_streak);
    }
    text += "\nType `retry` to play again or `quit` to leave.";
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Feedback, Question};

    fn answering_state() -> QuizState {
        QuizState {
            current_index: 1,
            total: 3,
            score: 1,
            streak: 1,
            phase: Phase::Answering,
            question: Some(Question::new(
                "Fitts's Law relates to?",
                &["Time & memory", "Size & distance"],
                "Size & distance",
                "Bigger and closer is faster",
            )),
            last_feedback: None,
            is_perfect: None,
        }
    }

    #[test]
    fn renders_numbered_options() {
        let text = render_state(&answering_state()).unwrap();
        assert!(text.contains("Question 2 of 3"));
        assert!(text.contains("🔥 1 in a row"));
        assert!(text.contains("1. Time & memory"));
        assert!(text.contains("2. Size & distance"));
    }

    #[test]
    fn renders_feedback() {
        let mut state = answering_state();
        state.phase = Phase::ShowingFeedback;
        state.last_feedback = Some(Feedback {
            is_correct: false,
            message: "Not quite right. Keep learning!".to_owned(),
            explanation: "Bigger and closer is faster".to_owned(),
        });
        let text = render_state(&state).unwrap();
        assert!(text.starts_with("❌ Not quite right."));
        assert!(text.contains("💡 Bigger and closer is faster"));
    }

    #[test]
    fn finished_state_is_left_to_results() {
        let mut state = answering_state();
        state.phase = Phase::Finished;
        state.question = None;
        assert!(render_state(&state).is_none());
    }

    #[test]
    fn perfect_finish_is_celebrated() {
        let mut state = answering_state();
        state.phase = Phase::Finished;
        state.question = None;
        state.is_perfect = Some(true);
        assert!(render_state(&state).unwrap().contains("Every single answer"));
    }

    #[test]
    fn renders_results() {
        let text = render_results(&Results::new(2, 3, 1, 60));
        assert!(text.contains("Congratulations! (67%)"));
        assert!(text.contains("You scored 2 out of 3"));
        assert!(text.contains("Final streak: 1"));
    }
}
