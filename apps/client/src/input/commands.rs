//! Line commands for driving a session from a terminal.

use std::str::FromStr;

use super::synthetic::{swipe_path, Swipe};
use crate::domain::PlayerId;
use crate::session::SessionHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Swipe(Swipe),
    Target(PlayerId),
    Guess(u8),
    Cancel,
    Retry,
    Next,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let unknown = || UnknownCommand(line.trim().to_string());
        let command = match (words.next(), words.next()) {
            (Some("left"), None) => Command::Swipe(Swipe::Left),
            (Some("right"), None) => Command::Swipe(Swipe::Right),
            (Some("play"), None) => Command::Swipe(Swipe::Up),
            (Some("target"), Some(id)) => Command::Target(PlayerId::from(id)),
            (Some("guess"), Some(n)) => Command::Guess(n.parse().map_err(|_| unknown())?),
            (Some("cancel"), None) => Command::Cancel,
            (Some("retry"), None) => Command::Retry,
            (Some("next"), None) => Command::Next,
            (Some("quit"), None) => Command::Quit,
            _ => return Err(unknown()),
        };
        if words.next().is_some() {
            return Err(unknown());
        }
        Ok(command)
    }
}

impl Command {
    /// Feed the command to the session. Returns whether it was accepted.
    pub fn apply(&self, handle: &SessionHandle) -> bool {
        match self {
            Command::Swipe(swipe) => {
                let (start, moves) = swipe_path(*swipe);
                if !handle.pointer_down(start) {
                    return false;
                }
                for point in moves {
                    handle.pointer_move(point);
                }
                handle.pointer_up()
            }
            Command::Target(id) => handle.select_target(id.clone()),
            Command::Guess(n) => handle.select_guess(*n),
            Command::Cancel => handle.cancel_selection(),
            Command::Retry => handle.retry_draw(),
            Command::Next => handle.next_round(),
            Command::Quit => {
                handle.teardown();
                true
            }
        }
    }
}
