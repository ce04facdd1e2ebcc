//! Stack: the payload shared by `Horizontal` and `Vertical` containers.

use crate::layout::{adjust_size, Padding, Rect, Size, ViewSize};
use crate::style::Rgb;
use crate::terminal::Backend;
use crate::view::cursor::Cursor;
use crate::view::node::Node;

/// Main-axis orientation of a stack.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Axis {
    /// Children flow left to right.
    Row,
    /// Children flow top to bottom.
    Column,
}

/// Children, sizing, padding, and the optional focus cursor of a
/// `Horizontal` or `Vertical` container.
#[derive(Clone, Debug)]
pub struct Stack<Msg> {
    pub(crate) children: Vec<Node<Msg>>,
    pub(crate) rect: Rect,
    pub(crate) width: ViewSize,
    pub(crate) height: ViewSize,
    pub(crate) padding: Padding,
    pub(crate) cursor: Option<Cursor>,
}

impl<Msg> Stack<Msg> {
    pub(crate) fn new(children: Vec<Node<Msg>>) -> Self {
        Self {
            children,
            rect: Rect::ZERO,
            width: ViewSize::Auto,
            height: ViewSize::Auto,
            padding: Padding::NONE,
            cursor: None,
        }
    }

    /// The container's children.
    pub fn children(&self) -> &[Node<Msg>] {
        &self.children
    }

    /// The focus cursor, if this container carries one.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    pub(crate) fn measure(mut self, axis: Axis) -> Self {
        self.children = self.children.into_iter().map(Node::measure).collect();

        let sum_widths: u16 = sum(self.children.iter().map(|c| c.rect().width));
        let sum_heights: u16 = sum(self.children.iter().map(|c| c.rect().height));
        let max_width = self.children.iter().map(|c| c.rect().width).max().unwrap_or(0);
        let max_height = self.children.iter().map(|c| c.rect().height).max().unwrap_or(0);

        let (content_width, content_height) = match axis {
            Axis::Row => (sum_widths, max_height),
            Axis::Column => (max_width, sum_heights),
        };

        let width = match self.width {
            ViewSize::Exact(exact) => exact,
            _ => content_width.saturating_add(self.padding.horizontal()),
        };
        let height = match self.height {
            ViewSize::Exact(exact) => exact,
            _ => content_height.saturating_add(self.padding.vertical()),
        };

        self.rect = Rect::new(0, 0, width, height);
        self
    }

    pub(crate) fn adjust_to(mut self, axis: Axis, max_width: u16, max_height: u16) -> Self {
        let width = adjust_size(self.width, self.rect.width, max_width);
        let height = adjust_size(self.height, self.rect.height, max_height);

        // Slack along the main axis goes, in full, to the first Fill child;
        // everyone else is offered the container's full resolved extent.
        let main_total: u16 = match axis {
            Axis::Row => sum(self.children.iter().map(|c| c.rect().width)),
            Axis::Column => sum(self.children.iter().map(|c| c.rect().height)),
        };
        let resolved_main = match axis {
            Axis::Row => width,
            Axis::Column => height,
        };
        let mut slack = resolved_main.saturating_sub(main_total);

        self.children = self
            .children
            .into_iter()
            .map(|child| {
                let fills = match axis {
                    Axis::Row => child.width_spec() == ViewSize::Fill,
                    Axis::Column => child.height_spec() == ViewSize::Fill,
                };
                if fills {
                    // Later Fill siblings find the slack already spent and
                    // are offered nothing beyond their natural size.
                    let granted = std::mem::take(&mut slack);
                    match axis {
                        Axis::Row => {
                            let new_width = child.rect().width.saturating_add(granted);
                            child.adjust_to(new_width, height)
                        }
                        Axis::Column => {
                            let new_height = child.rect().height.saturating_add(granted);
                            child.adjust_to(width, new_height)
                        }
                    }
                } else {
                    child.adjust_to(width, height)
                }
            })
            .collect();

        self.rect = self.rect.with_width(width).with_height(height);
        self
    }

    pub(crate) fn place_at(mut self, axis: Axis, x: u16, y: u16) -> Self {
        let mut next_x = x.saturating_add(self.padding.left);
        let mut next_y = y.saturating_add(self.padding.top);

        self.children = self
            .children
            .into_iter()
            .map(|child| {
                let placed = child.place_at(next_x, next_y);
                match axis {
                    Axis::Row => next_x = next_x.saturating_add(placed.rect().width),
                    Axis::Column => next_y = next_y.saturating_add(placed.rect().height),
                }
                placed
            })
            .collect();

        self.rect = self.rect.at(x, y);
        self
    }

    /// Full content extent, ignoring clipping: the widest child by the
    /// summed height of all children. Bounds vertical scrolling.
    pub(crate) fn actual_size(&self) -> Size {
        let width = self.children.iter().map(|c| c.rect().width).max().unwrap_or(0);
        let height = sum(self.children.iter().map(|c| c.rect().height));
        Size::new(width, height)
    }

    pub(crate) fn content_at(&self, y: u16) -> Option<&Node<Msg>> {
        self.children
            .iter()
            .find(|c| c.rect().contains_row(y))
            .and_then(|c| c.content_at(y))
    }

    pub(crate) fn view_focused(&self) -> Option<&Node<Msg>> {
        if let Some(cursor) = self.cursor {
            self.content_at(cursor.y)
        } else {
            self.children.iter().find_map(Node::view_focused)
        }
    }

    pub(crate) fn render_clipped<B: Backend>(&self, backend: &mut B, shift: i32, clip: Option<Rect>) {
        let (child_shift, child_clip) = if let Some(cursor) = self.cursor {
            // A focused view clips to its own window and shifts children by
            // its scroll offset.
            (shift - i32::from(cursor.scroll), Some(shifted_clip(self.rect, shift, clip)))
        } else {
            (shift, clip)
        };

        for child in &self.children {
            child.render_clipped(backend, child_shift, child_clip);
        }

        if let Some(cursor) = self.cursor {
            self.highlight_row(backend, cursor.y);
        }
    }

    // Marker cell on the left edge, tinted background across the rest.
    fn highlight_row<B: Backend>(&self, backend: &mut B, row: u16) {
        if self.rect.width == 0 || !self.rect.contains_row(row) {
            return;
        }
        backend.modify(self.rect.x, row, &|cell| {
            cell.with_fg(Rgb::BLACK).with_bg(Rgb::BLUE)
        });
        for x in self.rect.x.saturating_add(1)..self.rect.right() {
            backend.modify(x, row, &|cell| cell.with_bg(Rgb::DARK_GRAY));
        }
    }
}

// Apply the renderer's row shift to a clip rect and intersect with the
// clip inherited from enclosing views.
fn shifted_clip(rect: Rect, shift: i32, outer: Option<Rect>) -> Rect {
    let y = i32::from(rect.y) + shift;
    let clipped = Rect::new(rect.x, u16::try_from(y).unwrap_or(0), rect.width, rect.height);
    match outer {
        None => clipped,
        Some(outer) => {
            let x = clipped.x.max(outer.x);
            let y = clipped.y.max(outer.y);
            let right = clipped.right().min(outer.right());
            let bottom = clipped.bottom().min(outer.bottom());
            Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
        }
    }
}

fn sum(values: impl Iterator<Item = u16>) -> u16 {
    values.fold(0u16, u16::saturating_add)
}
