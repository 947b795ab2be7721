//! Line commands for driving a `MemoryPage` from a terminal.

use std::time::Duration;

use review_form_core::{Key, KeyPress, Modifiers};
use thiserror::Error;

use super::{FormController, FormEvent, MemoryPage, Scheduler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the textarea content.
    Type(String),
    /// Add text to the end of the textarea content.
    Append(String),
    Submit,
    Key(KeyPress),
    Focus,
    Blur,
    /// Click the close button of the visible notification.
    Dismiss,
    Example(usize),
    /// The analysis result arrived without a reload.
    Finish,
    Wait(Duration),
    Show,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` needs an argument")]
    MissingArgument { command: &'static str },
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("unknown key chord `{0}`")]
    InvalidChord(String),
}

pub const HELP: &str = "commands: type <text> | append <text> | submit | key <chord> | focus | blur | dismiss | example <n> | finish | wait <ms> | show | quit";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line.trim(), None),
    };
    match word {
        "type" => Ok(Command::Type(rest.unwrap_or_default().to_string())),
        "append" => Ok(Command::Append(rest.unwrap_or_default().to_string())),
        "submit" => Ok(Command::Submit),
        "key" => {
            let chord = rest.ok_or(CommandError::MissingArgument { command: "key" })?;
            parse_chord(chord.trim()).map(Command::Key)
        }
        "focus" => Ok(Command::Focus),
        "blur" => Ok(Command::Blur),
        "dismiss" => Ok(Command::Dismiss),
        "example" => {
            let arg = rest.ok_or(CommandError::MissingArgument { command: "example" })?;
            let index = parse_number(arg)?;
            usize::try_from(index)
                .map(Command::Example)
                .map_err(|_| CommandError::InvalidNumber(arg.trim().to_string()))
        }
        "finish" => Ok(Command::Finish),
        "wait" => {
            let arg = rest.ok_or(CommandError::MissingArgument { command: "wait" })?;
            parse_number(arg).map(|ms| Command::Wait(Duration::from_millis(ms)))
        }
        "show" | "" => Ok(Command::Show),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_number(arg: &str) -> Result<u64, CommandError> {
    arg.trim()
        .parse()
        .map_err(|_| CommandError::InvalidNumber(arg.trim().to_string()))
}

/// Parses chords such as `escape`, `ctrl+enter` or `cmd+enter`.
pub fn parse_chord(chord: &str) -> Result<KeyPress, CommandError> {
    let mut modifiers = Modifiers::default();
    let mut key = None;
    for part in chord.split('+') {
        match part.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "cmd" | "meta" | "super" => modifiers.meta = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            "enter" | "return" => key = Some(Key::Enter),
            "esc" | "escape" => key = Some(Key::Escape),
            single if single.chars().count() == 1 => key = single.chars().next().map(Key::Char),
            _ => return Err(CommandError::InvalidChord(chord.to_string())),
        }
    }
    key.map(|key| KeyPress::new(key).with_modifiers(modifiers))
        .ok_or_else(|| CommandError::InvalidChord(chord.to_string()))
}

/// Applies a command to the controller. `Wait` and `Quit` are left to the
/// caller since they involve the event loop itself.
pub fn execute<S: Scheduler>(controller: &mut FormController<MemoryPage, S>, command: Command) {
    match command {
        Command::Type(text) => {
            controller.view_mut().set_value(text);
            controller.handle_event(FormEvent::Input);
        }
        Command::Append(text) => {
            let mut value = controller.view().value().to_string();
            value.push_str(&text);
            controller.view_mut().set_value(value);
            controller.handle_event(FormEvent::Input);
        }
        Command::Submit => {
            let outcome = controller.handle_event(FormEvent::Submit);
            if !outcome.default_prevented {
                controller.view_mut().record_submission();
            }
        }
        Command::Key(key) => {
            controller.handle_event(FormEvent::KeyDown(key));
        }
        Command::Focus => controller.view_mut().set_focus(true),
        Command::Blur => controller.view_mut().set_focus(false),
        Command::Dismiss => {
            if let Some(id) = controller.view().notification().map(|n| n.id) {
                controller.handle_event(FormEvent::NotificationClosed(id));
            }
        }
        Command::Example(index) => {
            controller.handle_event(FormEvent::ExampleClicked(index));
        }
        Command::Finish => controller.finish_submission(),
        Command::Wait(_) | Command::Show | Command::Quit => {}
    }
}
