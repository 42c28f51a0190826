use crate::quiz::QuizState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Answer(String),
    Retry,
    Quit,
}

/// Turns a line typed by the player into a command. Numbers pick an
/// option of the question currently on screen, anything else is passed
/// through as the answer text.
pub fn parse_command(line: &str, state: &QuizState) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.to_lowercase().as_str() {
        "quit" | "exit" => return Some(Command::Quit),
        "retry" => return Some(Command::Retry),
        _ => (),
    }

    let picked_option = line.parse::<usize>().ok().and_then(|number| {
        let question = state.question.as_ref()?;
        question.options.get(number.checked_sub(1)?).cloned()
    });

    Some(Command::Answer(picked_option.unwrap_or_else(|| line.to_owned())))
}
