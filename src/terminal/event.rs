//! Raw terminal events and the input-side contract.

use crate::layout::Size;
use bitflags::bitflags;
use std::io;
use std::time::Duration;

bitflags! {
    /// Key modifiers held during a keypress.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyMods: u8 {
        /// Shift key held.
        const SHIFT = 0b0000_0001;
        /// Control key held.
        const CONTROL = 0b0000_0010;
        /// Alt/Option key held.
        const ALT = 0b0000_0100;
        /// Super/Command/Windows key held.
        const SUPER = 0b0000_1000;
    }
}

impl std::fmt::Debug for KeyMods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Key codes for keyboard input.
///
/// This is a simplified subset of what terminals report, sufficient for
/// text-mode applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
}

/// A single keypress: code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during the keypress.
    pub mods: KeyMods,
}

impl KeyEvent {
    /// A key with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyMods::empty(),
        }
    }

    /// A printable character with no modifiers.
    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// A character with Control held.
    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            mods: KeyMods::CONTROL,
        }
    }

    /// Whether this is the reserved interrupt key (Ctrl-C).
    ///
    /// The interrupt key is never delivered to applications; the input
    /// driver turns it into a shutdown request.
    pub fn is_interrupt(&self) -> bool {
        self.code == KeyCode::Char('c') && self.mods.contains(KeyMods::CONTROL)
    }
}

/// A raw event read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(Size),
}

/// The input side of the terminal contract.
///
/// An event source is owned by the dedicated input-poll thread; it is the
/// only component that reads raw events.
pub trait EventSource {
    /// Wait up to `timeout` for the next raw event.
    ///
    /// Returns `Ok(None)` when the timeout elapses with no event.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying terminal read fails.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<TerminalEvent>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_detection() {
        assert!(KeyEvent::ctrl('c').is_interrupt());
        assert!(!KeyEvent::char('c').is_interrupt());
        assert!(!KeyEvent::ctrl('d').is_interrupt());
    }

    #[test]
    fn test_plain_has_no_mods() {
        assert!(KeyEvent::plain(KeyCode::Enter).mods.is_empty());
    }
}
