//! Cursor: the focus marker owned by at most one container per tree.
//!
//! A cursor couples the screen row it occupies with the scroll offset of
//! the view that owns it. Motion keeps the cursor inside the view's
//! visible window; once it reaches a window edge, further motion scrolls
//! the window instead and the cursor stays pinned to the edge.

use crate::layout::{Rect, Size};

/// The vertical screen row the terminal cursor occupies and the scroll
/// offset of the owning scrollable container.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cursor {
    /// Absolute screen row.
    pub y: u16,
    /// Scroll offset of the owning view, in rows.
    pub scroll: u16,
}

impl Cursor {
    /// Cursor at the top of an unscrolled view.
    pub const fn initial() -> Self {
        Self { y: 0, scroll: 0 }
    }

    /// Cursor at a specific row with no scroll.
    pub const fn at_row(y: u16) -> Self {
        Self { y, scroll: 0 }
    }

    /// Copy with a new row.
    #[must_use]
    pub const fn with_y(mut self, y: u16) -> Self {
        self.y = y;
        self
    }

    /// Copy with a new scroll offset.
    #[must_use]
    pub const fn with_scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Move a cursor by `steps` rows within `view`, scrolling at the window
/// edges.
///
/// `content` is the view's full (unclipped) content extent, which bounds
/// how far the window may scroll.
pub(crate) fn step(view: Rect, content: Size, cursor: Cursor, steps: i32) -> Cursor {
    match steps {
        0 => cursor,
        s if s < 0 => {
            let up = s.unsigned_abs().try_into().unwrap_or(u16::MAX);
            if cursor.y <= view.y {
                // Pinned to the top edge: scroll the window instead.
                cursor.with_scroll(cursor.scroll.saturating_sub(up))
            } else {
                cursor.with_y(cursor.y.saturating_sub(up).max(view.y))
            }
        }
        s => {
            let down = u16::try_from(s).unwrap_or(u16::MAX);
            let visible = view.height.min(content.height);
            let last = view.y.saturating_add(visible.saturating_sub(1));
            if cursor.y >= last {
                // Pinned to the bottom edge: scroll, bounded by the content.
                let max_scroll = content.height.saturating_sub(view.height);
                cursor.with_scroll(cursor.scroll.saturating_add(down).min(max_scroll))
            } else {
                cursor.with_y(cursor.y.saturating_add(down).min(last))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Rect = Rect::new(0, 0, 20, 5);

    #[test]
    fn test_move_down_within_window() {
        let content = Size::new(20, 10);
        let cursor = step(VIEW, content, Cursor::initial(), 1);
        assert_eq!(cursor, Cursor { y: 1, scroll: 0 });
    }

    #[test]
    fn test_move_down_at_edge_scrolls() {
        let content = Size::new(20, 10);
        let cursor = step(VIEW, content, Cursor::at_row(4), 1);
        assert_eq!(cursor, Cursor { y: 4, scroll: 1 });
    }

    #[test]
    fn test_move_down_scroll_capped_by_content() {
        let content = Size::new(20, 10);
        let at_edge = Cursor { y: 4, scroll: 5 };
        let cursor = step(VIEW, content, at_edge, 3);
        // max scroll is content height (10) - view height (5)
        assert_eq!(cursor, Cursor { y: 4, scroll: 5 });
    }

    #[test]
    fn test_move_down_fully_visible_content_is_noop() {
        let content = Size::new(20, 5);
        let at_edge = Cursor::at_row(4);
        assert_eq!(step(VIEW, content, at_edge, 1), at_edge);
    }

    #[test]
    fn test_move_down_capped_by_short_content() {
        // Content shorter than the window: cursor stops on its last row.
        let content = Size::new(20, 3);
        let cursor = step(VIEW, content, Cursor::initial(), 9);
        assert_eq!(cursor, Cursor { y: 2, scroll: 0 });
    }

    #[test]
    fn test_move_up_within_window() {
        let content = Size::new(20, 10);
        let cursor = step(VIEW, content, Cursor::at_row(3), -2);
        assert_eq!(cursor, Cursor { y: 1, scroll: 0 });
    }

    #[test]
    fn test_move_up_at_top_scrolls_back() {
        let content = Size::new(20, 10);
        let scrolled = Cursor { y: 0, scroll: 4 };
        let cursor = step(VIEW, content, scrolled, -1);
        assert_eq!(cursor, Cursor { y: 0, scroll: 3 });
    }

    #[test]
    fn test_move_up_scroll_floors_at_zero() {
        let content = Size::new(20, 10);
        let cursor = step(VIEW, content, Cursor::initial(), -3);
        assert_eq!(cursor, Cursor::initial());
    }

    #[test]
    fn test_offset_view_respects_own_top() {
        let view = Rect::new(0, 2, 20, 5);
        let content = Size::new(20, 5);
        let cursor = step(view, content, Cursor::at_row(3), -5);
        assert_eq!(cursor, Cursor::at_row(2));
    }
}
