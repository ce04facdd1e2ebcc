//! Terminal module: the boundary between the engine and the real terminal.
//!
//! The contract is split along the thread boundary:
//! - [`EventSource`] is the input side, owned by the dedicated poll thread
//! - [`Backend`] is the render surface, owned by the main thread
//!
//! [`CrosstermBackend`]/[`CrosstermEvents`] drive a real terminal;
//! [`TestBackend`]/[`ScriptedEvents`] drive applications headlessly in
//! tests.

mod backend;
mod event;
mod test;
mod tty;

pub use backend::Backend;
pub use event::{EventSource, KeyCode, KeyEvent, KeyMods, TerminalEvent};
pub use test::{ScriptedEvents, TestBackend};
pub use tty::{CrosstermBackend, CrosstermEvents};
