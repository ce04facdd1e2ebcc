//! Subscriptions: declarative mappings of external events to messages.
//!
//! The subscription list is supplied once by the application and never
//! changes. For each event class, the first matching subscription wins.

use crate::layout::Size;
use crate::terminal::KeyEvent;
use crate::view::Cursor;
use std::time::{Duration, SystemTime};

/// A standing declaration mapping a class of external events to a message
/// constructor.
pub enum Sub<Msg> {
    /// Keys not swallowed by the focused node.
    Keyboard(Box<dyn Fn(KeyEvent) -> Msg>),
    /// Cursor movement in the focused view.
    Cursor(Box<dyn Fn(Cursor) -> Msg>),
    /// Terminal resizes.
    TerminalSize(Box<dyn Fn(Size) -> Msg>),
    /// A tick every `interval`.
    Clock(Duration, Box<dyn Fn(SystemTime) -> Msg>),
    /// Subscribed to nothing.
    None,
}

/// Subscribe to key presses.
pub fn on_key<Msg>(f: impl Fn(KeyEvent) -> Msg + 'static) -> Sub<Msg> {
    Sub::Keyboard(Box::new(f))
}

/// Subscribe to cursor movement.
pub fn on_cursor<Msg>(f: impl Fn(Cursor) -> Msg + 'static) -> Sub<Msg> {
    Sub::Cursor(Box::new(f))
}

/// Subscribe to terminal resizes.
pub fn on_resize<Msg>(f: impl Fn(Size) -> Msg + 'static) -> Sub<Msg> {
    Sub::TerminalSize(Box::new(f))
}

/// Subscribe to a tick every `interval`.
pub fn every<Msg>(interval: Duration, f: impl Fn(SystemTime) -> Msg + 'static) -> Sub<Msg> {
    Sub::Clock(interval, Box::new(f))
}

pub(crate) fn keyboard<Msg>(subs: &[Sub<Msg>]) -> Option<&dyn Fn(KeyEvent) -> Msg> {
    subs.iter().find_map(|sub| match sub {
        Sub::Keyboard(f) => Some(f.as_ref()),
        _ => None,
    })
}

pub(crate) fn cursor<Msg>(subs: &[Sub<Msg>]) -> Option<&dyn Fn(Cursor) -> Msg> {
    subs.iter().find_map(|sub| match sub {
        Sub::Cursor(f) => Some(f.as_ref()),
        _ => None,
    })
}

pub(crate) fn terminal_size<Msg>(subs: &[Sub<Msg>]) -> Option<&dyn Fn(Size) -> Msg> {
    subs.iter().find_map(|sub| match sub {
        Sub::TerminalSize(f) => Some(f.as_ref()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_subscription_wins() {
        let subs: Vec<Sub<u8>> = vec![Sub::None, on_key(|_| 1), on_key(|_| 2)];
        let f = keyboard(&subs).expect("keyboard subscription");
        assert_eq!(f(KeyEvent::char('x')), 1);
    }

    #[test]
    fn test_absent_class_is_none() {
        let subs: Vec<Sub<u8>> = vec![on_key(|_| 1)];
        assert!(terminal_size(&subs).is_none());
        assert!(cursor(&subs).is_none());
    }
}
