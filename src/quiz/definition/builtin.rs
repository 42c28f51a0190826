use super::{Question, QuestionBank};

impl QuestionBank {
    /// The UX design quiz shipped with the application.
    pub fn builtin() -> QuestionBank {
        let questions = vec![
            Question::new(
                "What does UX stand for?",
                &[
                    "User Experience",
                    "Ultimate Experience",
                    "User Experiment",
                    "Unified Experience",
                ],
                "User Experience",
                "UX focuses on how users interact with and experience products",
            ),
            Question::new(
                "Which law says users prefer familiar patterns?",
                &["Fitts's Law", "Jakob's Law", "Miller's Law", "Hick's Law"],
                "Jakob's Law",
                "Users spend most of their time on other sites, so they prefer familiar patterns",
            ),
            Question::new(
                "Fitts's Law relates to?",
                &[
                    "Time & memory",
                    "Choices & cognition",
                    "Size & distance",
                    "Color & font",
                ],
                "Size & distance",
                "Fitts's Law states that the time to acquire a target is a function of the distance to and size of the target",
            ),
        ];
        QuestionBank { questions }
    }
}
