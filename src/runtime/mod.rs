//! Runtime module: the concurrent event loop and its collaborators.
//!
//! Three kinds of thread cooperate through one FIFO channel:
//!
//! ```text
//! ┌──────────────┐   raw events / interrupt   ┌──────────────┐
//! │ Input Thread │ ─────────────────────────▶ │              │
//! └──────────────┘                            │  Main Loop   │──▶ Backend
//! ┌──────────────┐   task results / ticks     │ (owns model) │
//! │ Task Workers │ ─────────────────────────▶ │              │
//! │ Clock Driver │                            └──────────────┘
//! └──────────────┘
//! ```
//!
//! The main loop is the only consumer: it owns the model and the widget
//! tree, runs `update`, interprets commands, and draws. Shutdown cascades
//! from a `Quit` command (or the interrupt key) to the input thread, and
//! the loop exits only once the input thread acknowledges.

mod app;
mod command;
mod debug;
mod effect;
mod input;
mod interpreter;
mod subscription;
mod ticker;

pub use app::{application, application_with, App, RuntimeConfig};
pub use command::{Cmd, CursorCommand, QuitResult, ScrollUnit};
pub use debug::{Inspector, LogEntry};
pub use effect::{Effect, EffectError};
pub use subscription::{every, on_cursor, on_key, on_resize, Sub};
