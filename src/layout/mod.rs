//! Layout module: the measure → adjust → place pipeline.
//!
//! Layout is a pure function of a widget tree and the offered bounds.
//! Three ordered passes run over the tree:
//!
//! 1. **Measure** (bottom-up): every node computes its natural,
//!    unconstrained size from its content.
//! 2. **Adjust** (top-down): natural sizes are reconciled against the space
//!    the parent offers, including `Fill` slack distribution.
//! 3. **Place** (top-down): absolute coordinates are assigned.
//!
//! Running the pipeline twice over the same tree and bounds yields
//! identical rectangles.

mod rect;
mod size;

pub use rect::{Rect, Size};
pub use size::{Padding, ViewSize};

pub(crate) use size::adjust_size;

use crate::view::Node;

/// Lay out a widget tree inside the given bounds.
///
/// Returns a new tree in which every node carries its absolute screen
/// rectangle.
pub fn compute<Msg>(node: Node<Msg>, width: u16, height: u16) -> Node<Msg> {
    node.measure().adjust_to(width, height).place_at(0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{horizontal, text, vertical};

    fn build() -> Node<()> {
        vertical(vec![
            horizontal(vec![text("hash"), text("Message").width(ViewSize::Fill)])
                .width(ViewSize::Fill),
            text("status"),
        ])
        .width(ViewSize::Fill)
        .height(ViewSize::Fill)
    }

    #[test]
    fn test_layout_is_idempotent() {
        let once = compute(build(), 40, 12);
        let twice = compute(compute(build(), 40, 12), 40, 12);
        assert_eq!(once.rect(), twice.rect());
        let rects = |node: &Node<()>| {
            node.children()
                .iter()
                .map(|c| c.rect())
                .collect::<Vec<_>>()
        };
        assert_eq!(rects(&once), rects(&twice));
    }

    #[test]
    fn test_zero_budget_propagates_zero_sizes() {
        let view: Node<()> = vertical(vec![horizontal(vec![text("abc")]), text("def")]);
        let laid = compute(view, 0, 0);
        assert_eq!(laid.rect().size(), Size::ZERO);
        for child in laid.children() {
            assert_eq!(child.rect().size(), Size::ZERO);
        }
    }
}
