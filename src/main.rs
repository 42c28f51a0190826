use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Instant;
use std::{env, thread};

mod commands;
mod output;
mod quiz;

use crate::commands::{parse_command, Command};
use crate::output::terminal::TerminalOutput;
use crate::output::QuizOutput;
use crate::quiz::{QuestionBank, Quiz, Settings, Submission};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let settings = Settings::from_env().context("Invalid settings")?;
    let bank = match env::args().nth(1) {
        Some(path) => QuestionBank::open(Path::new(&path))?,
        None => QuestionBank::builtin(),
    };

    let tick_interval = settings.tick_interval;
    let mut quiz = Quiz::new(bank, settings, TerminalOutput::new());
    let input = spawn_input_reader();

    let mut last_tick = Instant::now();
    loop {
        match input.recv_timeout(tick_interval) {
            Ok(line) => {
                if !handle_line(&mut quiz, &line) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => (),
            Err(RecvTimeoutError::Disconnected) => {
                info!("Input closed");
                break;
            }
        }

        let now = Instant::now();
        quiz.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    if let Some(results) = quiz.results() {
        info!(
            "Leaving with {}/{} correct answers",
            results.score, results.total
        );
    }
    Ok(())
}

fn spawn_input_reader() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Could not read input: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

// Returns false when the player wants to leave.
fn handle_line<O: QuizOutput>(quiz: &mut Quiz<O>, line: &str) -> bool {
    let command = match parse_command(line, &quiz.get_state()) {
        Some(command) => command,
        None => return true,
    };

    match command {
        Command::Answer(choice) => match quiz.submit_answer(&choice) {
            Ok(Submission::Accepted(feedback)) => {
                debug!("Answer {:?} judged: {}", choice, feedback.message)
            }
            Ok(Submission::Ignored) => {
                if quiz.is_over() {
                    println!("The quiz is over. Type `retry` to play again or `quit` to leave.");
                } else {
                    debug!("Answer {:?} arrived while feedback was showing", choice);
                }
            }
            Err(e) => {
                warn!("{:#}", e);
                println!("⚠️ {}", e);
            }
        },
        Command::Retry => quiz.reset(),
        Command::Quit => return false,
    }
    true
}
