//! Command interpreter: executes a `Cmd` against the runtime's channel.

use crate::runtime::command::{Cmd, Command, CursorCommand, QuitResult};
use crate::terminal::TerminalEvent;
use crossbeam_channel::Sender;
use std::thread;
use std::time::{Duration, SystemTime};

/// Items carried by the serialized main-loop channel.
///
/// Everything the main loop reacts to flows through here in FIFO order:
/// application messages, cursor commands, raw terminal events, clock
/// ticks, and the input thread's shutdown handshake.
pub(crate) enum LoopItem<Msg> {
    /// An application message bound for `update`.
    Message(Msg),
    /// A cursor command bound for the focused view.
    Terminal(CursorCommand),
    /// A raw event from the input thread.
    Raw(TerminalEvent),
    /// A clock tick from the subscription at the given index.
    Tick(usize, SystemTime),
    /// The input thread hit a read error.
    InputError(String),
    /// The input thread saw the reserved interrupt key.
    Interrupt,
    /// The input thread acknowledged shutdown and exited.
    PollStopped,
}

/// Execute a command. Returns the quit result if the command (or any
/// nested command) requests shutdown.
///
/// Messages are always enqueued, never delivered synchronously, so the
/// loop cannot re-enter `update`. Within a batch the first quit wins.
pub(crate) fn interpret<Msg: Send + 'static>(
    cmd: Cmd<Msg>,
    tx: &Sender<LoopItem<Msg>>,
) -> Option<QuitResult> {
    match cmd.command {
        Command::None => None,
        Command::Command(msg) => {
            let _ = tx.send(LoopItem::Message(msg));
            None
        }
        Command::Commands(cmds) => {
            let mut quit = None;
            for cmd in cmds {
                let nested = interpret(cmd, tx);
                if quit.is_none() {
                    quit = nested;
                }
            }
            quit
        }
        Command::Task(delay, thunk) => {
            let tx = tx.clone();
            let _ = thread::Builder::new()
                .name("ratchet-task".to_string())
                .spawn(move || {
                    if delay > Duration::ZERO {
                        thread::sleep(delay);
                    }
                    let _ = tx.send(LoopItem::Message(thunk()));
                });
            None
        }
        Command::Quit(result) => Some(result),
        Command::Terminal(cursor_command) => {
            let _ = tx.send(LoopItem::Terminal(cursor_command));
            None
        }
    }
}
