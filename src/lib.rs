//! # Ratchet
//!
//! An Elm-architecture terminal UI engine.
//!
//! Applications supply four things: an initial model, a pure `render`
//! function producing a widget tree, a pure `update` function reacting to
//! messages, and a list of subscriptions to external events. Ratchet owns
//! the rest: the constraint-based layout pipeline, the serialized event
//! loop, command interpretation, and keyboard/cursor/resize routing.
//!
//! ## Core Concepts
//!
//! - **Widget tree**: immutable nodes (`Horizontal`, `Vertical`, `Text`,
//!   legacy `Container`) rebuilt from scratch on every render
//! - **Layout pipeline**: measure → adjust → place, producing absolute
//!   screen rectangles
//! - **Commands**: declarative side effects (`Cmd`) returned from `update`
//!   and executed by the runtime, never by the application
//! - **Actor model**: a dedicated input-poll thread and background task
//!   workers feeding one FIFO channel consumed by the main loop
//!
//! ## Example
//!
//! ```rust,ignore
//! use ratchet::{application, App, Cmd, CrosstermBackend, CrosstermEvents};
//!
//! let app = App {
//!     initialize: Box::new(|| (0u32, Cmd::none())),
//!     render: Box::new(|count, _size| ratchet::text(format!("{count}")).into()),
//!     update: Box::new(|(), count| (count + 1, Cmd::none())),
//!     subscriptions: vec![],
//! };
//!
//! let mut backend = CrosstermBackend::new()?;
//! let result = application(app, &mut backend, CrosstermEvents::new())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod layout;
pub mod runtime;
pub mod style;
pub mod terminal;
pub mod text;
pub mod view;

// Re-exports for convenience
pub use layout::{compute, Padding, Rect, Size, ViewSize};
pub use runtime::{
    application, application_with, every, on_cursor, on_key, on_resize, App, Cmd, CursorCommand,
    Effect, EffectError, Inspector, LogEntry, QuitResult, RuntimeConfig, ScrollUnit, Sub,
};
pub use style::{Cell, Modifiers, Rgb, Style};
pub use terminal::{
    Backend, CrosstermBackend, CrosstermEvents, EventSource, KeyCode, KeyEvent, KeyMods,
    ScriptedEvents, TerminalEvent, TestBackend,
};
pub use text::StyledText;
pub use view::{
    container, horizontal, text, vertical, Container, Cursor, FlexChild, FlexDirection, FlexStyle,
    Node, Stack,
};
