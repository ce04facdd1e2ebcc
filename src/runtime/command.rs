//! Commands: declarative side effects returned from `initialize`/`update`.
//!
//! A command describes work for the runtime; applications never perform
//! effects themselves. Each command is consumed exactly once by the
//! interpreter.

use std::time::Duration;

/// The result an application quits with.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum QuitResult {
    /// Normal termination, with an optional final message for the caller.
    Success(Option<String>),
    /// The application gave up.
    Failure,
}

/// Scroll distance for [`CursorCommand::Scroll`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollUnit {
    /// An absolute scroll offset in rows.
    Absolute(i32),
    /// A percentage (0-100) of the scrollable range.
    Percentage(u16),
}

/// Cursor-domain commands, routed to the focused view rather than to
/// `update`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CursorCommand {
    /// Move the cursor by a column/row delta.
    MoveCursor(i32, i32),
    /// Put the cursor at an absolute position.
    PutCursor(u16, u16),
    /// Jump the focused view's scroll offset.
    Scroll(ScrollUnit),
}

pub(crate) enum Command<Msg> {
    None,
    Command(Msg),
    Commands(Vec<Cmd<Msg>>),
    Task(Duration, Box<dyn FnOnce() -> Msg + Send>),
    Quit(QuitResult),
    Terminal(CursorCommand),
}

/// A side effect to be interpreted by the runtime.
pub struct Cmd<Msg> {
    pub(crate) command: Command<Msg>,
}

impl<Msg> Cmd<Msg> {
    /// No effect.
    pub const fn none() -> Self {
        Self {
            command: Command::None,
        }
    }

    /// Enqueue a message for asynchronous delivery.
    ///
    /// The message is never delivered synchronously, so `update` can safely
    /// emit messages to itself.
    pub fn message(msg: Msg) -> Self {
        Self {
            command: Command::Command(msg),
        }
    }

    /// Execute several commands in declaration order.
    pub fn batch(cmds: impl IntoIterator<Item = Self>) -> Self {
        Self {
            command: Command::Commands(cmds.into_iter().collect()),
        }
    }

    /// Run a thunk on a background worker after `delay`, delivering its
    /// result as a message. A zero delay still schedules asynchronously.
    pub fn task(delay: Duration, thunk: impl FnOnce() -> Msg + Send + 'static) -> Self {
        Self {
            command: Command::Task(delay, Box::new(thunk)),
        }
    }

    /// Quit successfully with no final message.
    pub fn quit() -> Self {
        Self {
            command: Command::Quit(QuitResult::Success(None)),
        }
    }

    /// Quit successfully with a final message for the caller.
    pub fn quit_with(message: impl Into<String>) -> Self {
        Self {
            command: Command::Quit(QuitResult::Success(Some(message.into()))),
        }
    }

    /// Quit with a failure indicator.
    pub fn fail() -> Self {
        Self {
            command: Command::Quit(QuitResult::Failure),
        }
    }

    /// Move the focused view's cursor by a delta.
    pub const fn move_cursor(dx: i32, dy: i32) -> Self {
        Self {
            command: Command::Terminal(CursorCommand::MoveCursor(dx, dy)),
        }
    }

    /// Put the cursor at an absolute position.
    pub const fn put_cursor(x: u16, y: u16) -> Self {
        Self {
            command: Command::Terminal(CursorCommand::PutCursor(x, y)),
        }
    }

    /// Jump the focused view's scroll offset.
    pub const fn scroll(unit: ScrollUnit) -> Self {
        Self {
            command: Command::Terminal(CursorCommand::Scroll(unit)),
        }
    }
}

impl<Msg> std::fmt::Debug for Cmd<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.command {
            Command::None => write!(f, "Cmd::None"),
            Command::Command(_) => write!(f, "Cmd::Command"),
            Command::Commands(cmds) => write!(f, "Cmd::Commands({})", cmds.len()),
            Command::Task(delay, _) => write!(f, "Cmd::Task({delay:?})"),
            Command::Quit(result) => write!(f, "Cmd::Quit({result:?})"),
            Command::Terminal(cc) => write!(f, "Cmd::Terminal({cc:?})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_build_expected_variants() {
        assert!(matches!(Cmd::<()>::none().command, Command::None));
        assert!(matches!(Cmd::message(1u8).command, Command::Command(1)));
        assert!(matches!(
            Cmd::<()>::quit_with("done").command,
            Command::Quit(QuitResult::Success(Some(_)))
        ));
        assert!(matches!(
            Cmd::<()>::fail().command,
            Command::Quit(QuitResult::Failure)
        ));
        assert!(matches!(
            Cmd::<()>::move_cursor(0, -1).command,
            Command::Terminal(CursorCommand::MoveCursor(0, -1))
        ));
    }

    #[test]
    fn test_batch_preserves_order() {
        let cmd: Cmd<u8> = Cmd::batch([Cmd::message(1), Cmd::message(2)]);
        let Command::Commands(cmds) = cmd.command else {
            panic!("expected a batch");
        };
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[0].command, Command::Command(1)));
        assert!(matches!(cmds[1].command, Command::Command(2)));
    }
}
