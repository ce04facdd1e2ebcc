//! Text node: a single row of styled content with an optional key table.

use crate::layout::{adjust_size, Rect, Size, ViewSize};
use crate::style::Cell;
use crate::terminal::{Backend, KeyEvent};
use crate::text::StyledText;

/// A leaf node holding one row of styled text.
///
/// A text node is always exactly one row high. When it sits under the
/// cursor of a focused container, its key table is consulted before any
/// application-level keyboard subscription ("swallowing" the event).
#[derive(Clone, Debug)]
pub struct Text<Msg> {
    pub(crate) content: StyledText,
    pub(crate) events: Vec<(KeyEvent, Msg)>,
    pub(crate) rect: Rect,
    pub(crate) width: ViewSize,
}

impl<Msg> Text<Msg> {
    pub(crate) fn new(content: StyledText) -> Self {
        Self {
            content,
            events: Vec::new(),
            rect: Rect::ZERO,
            width: ViewSize::Auto,
        }
    }

    /// The styled content.
    pub fn content(&self) -> &StyledText {
        &self.content
    }

    /// The key table consulted while this node is focused.
    pub fn events(&self) -> &[(KeyEvent, Msg)] {
        &self.events
    }

    pub(crate) fn measure(mut self) -> Self {
        self.rect = self.rect.with_width(self.content.count()).with_height(1);
        self
    }

    pub(crate) fn adjust_to(mut self, max_width: u16, max_height: u16) -> Self {
        let width = adjust_size(self.width, self.rect.width, max_width);
        let height = self.rect.height.min(max_height);
        self.rect = self.rect.with_width(width).with_height(height);
        self
    }

    pub(crate) fn place_at(mut self, x: u16, y: u16) -> Self {
        self.rect = self.rect.at(x, y);
        self
    }

    pub(crate) fn actual_size(&self) -> Size {
        Size::new(self.content.count(), 1)
    }

    pub(crate) fn message_for(&self, key: &KeyEvent) -> Option<Msg>
    where
        Msg: Clone,
    {
        self.events
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, msg)| msg.clone())
    }

    pub(crate) fn render_clipped<B: Backend>(&self, backend: &mut B, shift: i32, clip: Option<Rect>) {
        let row = i32::from(self.rect.y) + shift;
        let Ok(row) = u16::try_from(row) else {
            return;
        };
        if let Some(clip) = clip {
            if !clip.contains_row(row) {
                return;
            }
        }
        for (offset, glyph) in self.content.glyphs().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            if offset >= self.rect.width {
                break;
            }
            let col = self.rect.x.saturating_add(offset);
            if let Some(clip) = clip {
                if col < clip.x || col >= clip.right() {
                    continue;
                }
            }
            backend.put(col, row, Cell::styled(glyph.ch, glyph.style));
        }
    }
}
