//! Crossterm-driven terminal backend and event source.
//!
//! The backend owns stdout and a pair of cell grids. A frame is drawn into
//! the back grid, then `present` diffs it against the front grid and
//! flushes the changed cells as one queued write, which keeps partial
//! frames off the screen.

use crate::layout::Size;
use crate::style::{Cell, Modifiers, Style};
use crate::terminal::backend::Backend;
use crate::terminal::event::{EventSource, KeyCode, KeyEvent, KeyMods, TerminalEvent};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Render surface backed by a real terminal via crossterm.
pub struct CrosstermBackend {
    stdout: Stdout,
    size: Size,
    front: Vec<Cell>,
    back: Vec<Cell>,
    cursor_pos: (u16, u16),
    needs_full_redraw: bool,
    restored: bool,
}

impl CrosstermBackend {
    /// Enter raw mode and the alternate screen, hiding the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let size = Size::new(width, height);
        let cells = usize::from(width) * usize::from(height);
        Ok(Self {
            stdout,
            size,
            front: vec![Cell::EMPTY; cells],
            back: vec![Cell::EMPTY; cells],
            cursor_pos: (0, 0),
            needs_full_redraw: true,
            restored: false,
        })
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.size.width && y < self.size.height)
            .then(|| usize::from(y) * usize::from(self.size.width) + usize::from(x))
    }
}

impl Backend for CrosstermBackend {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        let cells = usize::from(size.width) * usize::from(size.height);
        self.front = vec![Cell::EMPTY; cells];
        self.back = vec![Cell::EMPTY; cells];
        self.needs_full_redraw = true;
    }

    fn cursor_position(&self) -> (u16, u16) {
        self.cursor_pos
    }

    fn move_cursor(&mut self, x: u16, y: u16) {
        self.cursor_pos = (x, y);
        let _ = execute!(self.stdout, cursor::MoveTo(x, y), cursor::Show);
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
        let mut last_style: Option<Style> = None;
        let mut skip_next = false;

        for y in 0..self.size.height {
            for x in 0..self.size.width {
                if skip_next {
                    skip_next = false;
                    continue;
                }
                let index = usize::from(y) * usize::from(self.size.width) + usize::from(x);
                let cell = self.back[index];
                if !self.needs_full_redraw && cell == self.front[index] {
                    continue;
                }

                queue!(self.stdout, cursor::MoveTo(x, y))?;
                if last_style != Some(cell.style) {
                    apply_style(&mut self.stdout, cell.style)?;
                    last_style = Some(cell.style);
                }
                queue!(self.stdout, Print(cell.ch))?;

                // Wide glyphs occupy the following column as well.
                if unicode_width::UnicodeWidthChar::width(cell.ch) == Some(2) {
                    skip_next = true;
                }
            }
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.front.copy_from_slice(&self.back);
        self.needs_full_redraw = false;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

fn apply_style(stdout: &mut Stdout, style: Style) -> io::Result<()> {
    queue!(
        stdout,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(Color::Rgb {
            r: style.fg.r,
            g: style.fg.g,
            b: style.fg.b,
        }),
        SetBackgroundColor(Color::Rgb {
            r: style.bg.r,
            g: style.bg.g,
            b: style.bg.b,
        }),
    )?;
    if style.attrs.contains(Modifiers::BOLD) {
        queue!(stdout, SetAttribute(Attribute::Bold))?;
    }
    if style.attrs.contains(Modifiers::DIM) {
        queue!(stdout, SetAttribute(Attribute::Dim))?;
    }
    if style.attrs.contains(Modifiers::ITALIC) {
        queue!(stdout, SetAttribute(Attribute::Italic))?;
    }
    if style.attrs.contains(Modifiers::UNDERLINE) {
        queue!(stdout, SetAttribute(Attribute::Underlined))?;
    }
    if style.attrs.contains(Modifiers::REVERSED) {
        queue!(stdout, SetAttribute(Attribute::Reverse))?;
    }
    if style.attrs.contains(Modifiers::STRIKETHROUGH) {
        queue!(stdout, SetAttribute(Attribute::CrossedOut))?;
    }
    Ok(())
}

/// Event source reading raw crossterm events.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl CrosstermEvents {
    /// Create a new crossterm event source.
    pub const fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<TerminalEvent>> {
        if event::poll(timeout)? {
            Ok(convert_event(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Convert a crossterm event into a terminal event.
///
/// Only key presses and resizes are of interest; key releases/repeats and
/// mouse/focus/paste events are dropped.
fn convert_event(event: Event) -> Option<TerminalEvent> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            let code = convert_key_code(key.code)?;
            Some(TerminalEvent::Key(KeyEvent {
                code,
                mods: convert_modifiers(key.modifiers),
            }))
        }
        Event::Resize(width, height) => Some(TerminalEvent::Resize(Size::new(width, height))),
        _ => None,
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::BackTab => KeyCode::BackTab,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Insert => KeyCode::Insert,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None, // Ignore other key codes
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyMods {
    let mut out = KeyMods::empty();
    if mods.contains(event::KeyModifiers::SHIFT) {
        out |= KeyMods::SHIFT;
    }
    if mods.contains(event::KeyModifiers::CONTROL) {
        out |= KeyMods::CONTROL;
    }
    if mods.contains(event::KeyModifiers::ALT) {
        out |= KeyMods::ALT;
    }
    if mods.contains(event::KeyModifiers::SUPER) {
        out |= KeyMods::SUPER;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: event::KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(event::KeyEvent {
            code,
            modifiers: mods,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_convert_plain_char() {
        let converted = convert_event(press(event::KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(
            converted,
            Some(TerminalEvent::Key(KeyEvent::char('q')))
        );
    }

    #[test]
    fn test_convert_ctrl_char() {
        let converted = convert_event(press(event::KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(converted, Some(TerminalEvent::Key(KeyEvent::ctrl('c'))));
    }

    #[test]
    fn test_release_is_dropped() {
        let released = Event::Key(event::KeyEvent {
            code: event::KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(convert_event(released), None);
    }

    #[test]
    fn test_convert_resize() {
        let converted = convert_event(Event::Resize(80, 24));
        assert_eq!(
            converted,
            Some(TerminalEvent::Resize(Size::new(80, 24)))
        );
    }
}
