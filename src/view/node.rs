//! Node: the closed widget-tree sum type.
//!
//! Layout logic matches exhaustively over the four variants; there is no
//! open-ended widget registration. All operations are pure: transforms
//! consume the node and return a new one, queries borrow.

use crate::layout::{Padding, Rect, Size, ViewSize};
use crate::runtime::{CursorCommand, ScrollUnit};
use crate::terminal::{Backend, KeyEvent};
use crate::view::container::Container;
use crate::view::cursor::{self, Cursor};
use crate::view::stack::{Axis, Stack};
use crate::view::text::Text;
use std::fmt::Write as _;

/// A widget-tree node.
#[derive(Clone, Debug)]
pub enum Node<Msg> {
    /// Legacy grow/shrink flex container.
    Container(Container<Msg>),
    /// Children flow left to right.
    Horizontal(Stack<Msg>),
    /// Children flow top to bottom.
    Vertical(Stack<Msg>),
    /// One row of styled text.
    Text(Text<Msg>),
}

impl<Msg> Node<Msg> {
    /// The node's screen rectangle, as assigned by the layout passes.
    pub fn rect(&self) -> Rect {
        match self {
            Self::Container(c) => c.rect,
            Self::Horizontal(s) | Self::Vertical(s) => s.rect,
            Self::Text(t) => t.rect,
        }
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        match self {
            Self::Container(c) => c.rect = rect,
            Self::Horizontal(s) | Self::Vertical(s) => s.rect = rect,
            Self::Text(t) => t.rect = rect,
        }
    }

    /// Borrow the node's children (empty for `Text`).
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Container(c) => c.children.iter().map(|fc| &fc.node).collect(),
            Self::Horizontal(s) | Self::Vertical(s) => s.children.iter().collect(),
            Self::Text(_) => Vec::new(),
        }
    }

    /// The declared width specification.
    pub fn width_spec(&self) -> ViewSize {
        match self {
            Self::Container(_) => ViewSize::Auto,
            Self::Horizontal(s) | Self::Vertical(s) => s.width,
            Self::Text(t) => t.width,
        }
    }

    /// The declared height specification. A `Text` node is always exactly
    /// one row high.
    pub fn height_spec(&self) -> ViewSize {
        match self {
            Self::Container(_) => ViewSize::Auto,
            Self::Horizontal(s) | Self::Vertical(s) => s.height,
            Self::Text(_) => ViewSize::Exact(1),
        }
    }

    /// Measure pass: compute the natural, unconstrained size bottom-up.
    #[must_use]
    pub fn measure(self) -> Self {
        match self {
            Self::Container(c) => Self::Container(c.measure()),
            Self::Horizontal(s) => Self::Horizontal(s.measure(Axis::Row)),
            Self::Vertical(s) => Self::Vertical(s.measure(Axis::Column)),
            Self::Text(t) => Self::Text(t.measure()),
        }
    }

    /// Adjust pass: reconcile the measured size against the offered space.
    #[must_use]
    pub fn adjust_to(self, max_width: u16, max_height: u16) -> Self {
        match self {
            Self::Container(c) => Self::Container(c.adjust_to(max_width, max_height)),
            Self::Horizontal(s) => Self::Horizontal(s.adjust_to(Axis::Row, max_width, max_height)),
            Self::Vertical(s) => Self::Vertical(s.adjust_to(Axis::Column, max_width, max_height)),
            Self::Text(t) => Self::Text(t.adjust_to(max_width, max_height)),
        }
    }

    /// Place pass: assign absolute coordinates top-down.
    #[must_use]
    pub fn place_at(self, x: u16, y: u16) -> Self {
        match self {
            Self::Container(c) => Self::Container(c.place_at(x, y)),
            Self::Horizontal(s) => Self::Horizontal(s.place_at(Axis::Row, x, y)),
            Self::Vertical(s) => Self::Vertical(s.place_at(Axis::Column, x, y)),
            Self::Text(t) => Self::Text(t.place_at(x, y)),
        }
    }

    /// The deepest node whose rectangle's row range contains `y`.
    pub fn content_at(&self, y: u16) -> Option<&Self> {
        match self {
            Self::Container(c) => c.content_at(y),
            Self::Horizontal(s) | Self::Vertical(s) => s.content_at(y),
            Self::Text(t) => (t.rect.y == y).then_some(self),
        }
    }

    /// The node under the focus cursor, if any node is focused.
    ///
    /// The search is depth-first for the first cursor marker; a marked
    /// container restricts the search to the child containing the cursor's
    /// row.
    pub fn view_focused(&self) -> Option<&Self> {
        match self {
            Self::Container(c) => c.children.iter().find_map(|fc| fc.node.view_focused()),
            Self::Horizontal(s) | Self::Vertical(s) => s.view_focused(),
            Self::Text(_) => None,
        }
    }

    /// The full (unclipped) content extent, used to bound scrolling.
    pub fn actual_size(&self) -> Size {
        match self {
            Self::Container(c) => c.actual_size(),
            Self::Horizontal(s) | Self::Vertical(s) => s.actual_size(),
            Self::Text(t) => t.actual_size(),
        }
    }

    /// Whether this node itself carries the focus cursor.
    pub fn has_cursor(&self) -> bool {
        match self {
            Self::Horizontal(s) | Self::Vertical(s) => s.cursor.is_some(),
            _ => false,
        }
    }

    /// The focus cursor carried by this node or any descendant.
    pub fn cursor(&self) -> Option<Cursor> {
        match self {
            Self::Container(c) => c.children.iter().find_map(|fc| fc.node.cursor()),
            Self::Horizontal(s) | Self::Vertical(s) => {
                s.cursor.or_else(|| s.children.iter().find_map(Self::cursor))
            }
            Self::Text(_) => None,
        }
    }

    /// The message mapped to `key` in this node's event table, if any.
    pub fn event_message(&self, key: &KeyEvent) -> Option<Msg>
    where
        Msg: Clone,
    {
        match self {
            Self::Text(t) => t.message_for(key),
            _ => None,
        }
    }

    /// Apply a cursor command to the focused node, leaving the rest of the
    /// tree untouched.
    ///
    /// Returns the transformed tree and, when a focused node exists, the
    /// new cursor.
    #[must_use]
    pub fn apply_cursor(mut self, command: &CursorCommand) -> (Self, Option<Cursor>) {
        let cursor = self.apply_cursor_mut(command);
        (self, cursor)
    }

    fn apply_cursor_mut(&mut self, command: &CursorCommand) -> Option<Cursor> {
        match self {
            Self::Horizontal(s) | Self::Vertical(s) => {
                if s.cursor.is_some() {
                    Some(apply_to_stack(s, command))
                } else {
                    s.children
                        .iter_mut()
                        .find_map(|c| c.apply_cursor_mut(command))
                }
            }
            Self::Container(c) => c
                .children
                .iter_mut()
                .find_map(|fc| fc.node.apply_cursor_mut(command)),
            Self::Text(_) => None,
        }
    }

    /// Transform the focused stack, leaving the rest of the tree untouched.
    ///
    /// Does nothing when no node is focused.
    #[must_use]
    pub fn modify_focused(mut self, f: impl FnOnce(&mut Stack<Msg>)) -> Self {
        let mut slot = Some(f);
        self.walk_focused(&mut |stack| {
            if let Some(f) = slot.take() {
                f(stack);
            }
        });
        self
    }

    fn walk_focused(&mut self, f: &mut dyn FnMut(&mut Stack<Msg>)) -> bool {
        match self {
            Self::Horizontal(s) | Self::Vertical(s) => {
                if s.cursor.is_some() {
                    f(s);
                    true
                } else {
                    s.children.iter_mut().any(|c| c.walk_focused(f))
                }
            }
            Self::Container(c) => c.children.iter_mut().any(|fc| fc.node.walk_focused(f)),
            Self::Text(_) => false,
        }
    }

    /// Draw the node into a backend's cell buffer.
    pub fn render_to<B: Backend>(&self, backend: &mut B) {
        self.render_clipped(backend, 0, None);
    }

    pub(crate) fn render_clipped<B: Backend>(&self, backend: &mut B, shift: i32, clip: Option<Rect>) {
        match self {
            Self::Container(c) => c.render_clipped(backend, shift, clip),
            Self::Horizontal(s) | Self::Vertical(s) => s.render_clipped(backend, shift, clip),
            Self::Text(t) => t.render_clipped(backend, shift, clip),
        }
    }

    /// An indented textual outline of the laid-out tree, for inspection.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(0, &mut out);
        out
    }

    fn outline_into(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self {
            Self::Container(c) => {
                let _ = writeln!(out, "{indent}Container({:?})", c.rect);
                for child in &c.children {
                    child.node.outline_into(depth + 1, out);
                }
            }
            Self::Horizontal(s) => {
                let _ = writeln!(out, "{indent}Horizontal({:?})", s.rect);
                for child in &s.children {
                    child.outline_into(depth + 1, out);
                }
            }
            Self::Vertical(s) => {
                let _ = writeln!(out, "{indent}Vertical({:?})", s.rect);
                for child in &s.children {
                    child.outline_into(depth + 1, out);
                }
            }
            Self::Text(t) => {
                let _ = writeln!(out, "{indent}Text({:?}) {:?}", t.rect, t.content.to_plain_string());
            }
        }
    }

    // ---- fluent construction ------------------------------------------

    /// Set the declared width (no effect on `Container`).
    #[must_use]
    pub fn width(mut self, width: ViewSize) -> Self {
        match &mut self {
            Self::Horizontal(s) | Self::Vertical(s) => s.width = width,
            Self::Text(t) => t.width = width,
            Self::Container(_) => {}
        }
        self
    }

    /// Set the declared height (no effect on `Container` or `Text`).
    #[must_use]
    pub fn height(mut self, height: ViewSize) -> Self {
        if let Self::Horizontal(s) | Self::Vertical(s) = &mut self {
            s.height = height;
        }
        self
    }

    /// Set the padding (stacks only).
    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        if let Self::Horizontal(s) | Self::Vertical(s) = &mut self {
            s.padding = padding;
        }
        self
    }

    /// Mark a stack as focused, giving it the cursor.
    #[must_use]
    pub fn focused(mut self, cursor: Cursor) -> Self {
        if let Self::Horizontal(s) | Self::Vertical(s) = &mut self {
            s.cursor = Some(cursor);
        }
        self
    }

    /// Map a key to a message while this `Text` node is focused.
    #[must_use]
    pub fn on_key(mut self, key: KeyEvent, msg: Msg) -> Self {
        if let Self::Text(t) = &mut self {
            t.events.push((key, msg));
        }
        self
    }
}

fn apply_to_stack<Msg>(stack: &mut Stack<Msg>, command: &CursorCommand) -> Cursor {
    let current = stack.cursor.unwrap_or_default();
    let content = stack.actual_size();
    let next = match command {
        CursorCommand::MoveCursor(_, dy) => cursor::step(stack.rect, content, current, *dy),
        CursorCommand::PutCursor(_, y) => current.with_y(*y),
        CursorCommand::Scroll(unit) => {
            let max_scroll = content.height.saturating_sub(stack.rect.height);
            let scroll = match unit {
                ScrollUnit::Absolute(n) => {
                    u16::try_from((*n).max(0)).unwrap_or(u16::MAX).min(max_scroll)
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                ScrollUnit::Percentage(pct) => {
                    ((f32::from(*pct) / 100.0) * f32::from(max_scroll)).round() as u16
                }
            };
            current.with_scroll(scroll)
        }
    };
    stack.cursor = Some(next);
    next
}
