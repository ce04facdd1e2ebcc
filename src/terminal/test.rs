//! In-memory backend and scripted event source for driving applications
//! headlessly in tests.

use crate::layout::Size;
use crate::style::Cell;
use crate::terminal::backend::Backend;
use crate::terminal::event::{EventSource, TerminalEvent};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// A render surface backed by an in-memory cell grid.
///
/// Tracks how often `present` and `restore` are called so tests can assert
/// on the runtime's drawing and shutdown behavior.
pub struct TestBackend {
    size: Size,
    front: Vec<Cell>,
    back: Vec<Cell>,
    cursor_pos: (u16, u16),
    presents: usize,
    restores: usize,
}

impl TestBackend {
    /// Create a backend with the given screen size.
    pub fn new(width: u16, height: u16) -> Self {
        let cells = usize::from(width) * usize::from(height);
        Self {
            size: Size::new(width, height),
            front: vec![Cell::EMPTY; cells],
            back: vec![Cell::EMPTY; cells],
            cursor_pos: (0, 0),
            presents: 0,
            restores: 0,
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.size.width && y < self.size.height)
            .then(|| usize::from(y) * usize::from(self.size.width) + usize::from(x))
    }

    /// The presented (front-buffer) cell at a position.
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.front[i])
    }

    /// The characters of a presented row, as a string.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.size.width)
            .filter_map(|x| self.cell(x, y))
            .map(|cell| cell.ch)
            .collect()
    }

    /// How many frames have been presented.
    pub const fn presents(&self) -> usize {
        self.presents
    }

    /// How many times the terminal was restored.
    pub const fn restores(&self) -> usize {
        self.restores
    }
}

impl Backend for TestBackend {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        let cells = usize::from(size.width) * usize::from(size.height);
        self.front = vec![Cell::EMPTY; cells];
        self.back = vec![Cell::EMPTY; cells];
    }

    fn cursor_position(&self) -> (u16, u16) {
        self.cursor_pos
    }

    fn move_cursor(&mut self, x: u16, y: u16) {
        self.cursor_pos = (x, y);
    }

    fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(index) = self.index(x, y) {
            self.back[index] = cell;
        }
    }

    fn modify(&mut self, x: u16, y: u16, f: &dyn Fn(Cell) -> Cell) {
        if let Some(index) = self.index(x, y) {
            self.back[index] = f(self.back[index]);
        }
    }

    fn clear_buffer(&mut self) {
        self.back.fill(Cell::EMPTY);
    }

    fn present(&mut self) -> io::Result<()> {
        self.front.copy_from_slice(&self.back);
        self.presents += 1;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.restores += 1;
        Ok(())
    }
}

/// An event source that replays a fixed script, then reports quiet.
pub struct ScriptedEvents {
    events: VecDeque<TerminalEvent>,
}

impl ScriptedEvents {
    /// Create a source that yields the given events in order.
    pub fn new(events: impl IntoIterator<Item = TerminalEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<TerminalEvent>> {
        match self.events.pop_front() {
            Some(event) => Ok(Some(event)),
            None => {
                // Simulate a quiet terminal: block out the timeout.
                std::thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::KeyEvent;

    #[test]
    fn test_backend_put_and_present() {
        let mut backend = TestBackend::new(4, 2);
        backend.put(0, 0, Cell::new('h'));
        backend.put(1, 0, Cell::new('i'));
        assert_eq!(backend.row_text(0), "    ");
        backend.present().unwrap();
        assert_eq!(backend.row_text(0), "hi  ");
        assert_eq!(backend.presents(), 1);
    }

    #[test]
    fn test_backend_ignores_out_of_bounds() {
        let mut backend = TestBackend::new(2, 2);
        backend.put(5, 5, Cell::new('x'));
        backend.present().unwrap();
        assert_eq!(backend.row_text(0), "  ");
    }

    #[test]
    fn test_scripted_events_drain_then_quiet() {
        let mut source = ScriptedEvents::new([TerminalEvent::Key(KeyEvent::char('a'))]);
        let timeout = Duration::from_millis(1);
        assert_eq!(
            source.poll(timeout).unwrap(),
            Some(TerminalEvent::Key(KeyEvent::char('a')))
        );
        assert_eq!(source.poll(timeout).unwrap(), None);
    }
}
