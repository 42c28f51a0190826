use log::info;
use std::time::Duration;

use crate::quiz::State;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    Passed,
    KeepLearning,
}

impl Grade {
    pub fn headline(&self) -> &'static str {
        match self {
            Grade::Perfect => "Perfect Score!",
            Grade::Passed => "Congratulations!",
            Grade::KeepLearning => "Keep Learning!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Results {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub final_streak: usize,
    pub is_perfect: bool,
    pub grade: Grade,
}

impl Results {
    pub fn new(score: usize, total: usize, final_streak: usize, pass_percentage: u32) -> Self {
        let percentage = compute_percentage(score, total);
        let is_perfect = score == total;
        let grade = if is_perfect {
            Grade::Perfect
        } else if percentage >= pass_percentage {
            Grade::Passed
        } else {
            Grade::KeepLearning
        };
        Results {
            score,
            total,
            percentage,
            final_streak,
            is_perfect,
            grade,
        }
    }
}

// Rounds half up.
fn compute_percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score * 200 + total) / (2 * total)) as u32
}

#[derive(Clone, Debug)]
pub struct ResultsState {
    results: Results,
}

impl ResultsState {
    pub fn new(results: Results) -> Self {
        ResultsState { results }
    }

    pub fn results(&self) -> &Results {
        &self.results
    }
}

impl State for ResultsState {
    fn on_begin(&mut self) {
        info!(
            "Quiz finished: {}/{} ({}%), grade {:?}",
            self.results.score, self.results.total, self.results.percentage, self.results.grade
        );
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
