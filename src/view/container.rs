//! Container: the legacy grow/shrink flex variant.
//!
//! This predates the `ViewSize`-driven stacks and survives for the call
//! sites that still size children by proportional grow/shrink weights. Its
//! distribution algorithm is numerically distinct from the `Fill` policy of
//! `Stack` and the two are kept as separate code paths.

use crate::layout::{Rect, Size};
use crate::terminal::Backend;
use crate::view::node::Node;

/// Direction children flow in a [`Container`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FlexDirection {
    /// Children flow left to right.
    #[default]
    Row,
    /// Children flow top to bottom.
    Column,
}

/// Proportional sizing weights for a [`Container`] child.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FlexStyle {
    /// Direction children flow (only meaningful on the container itself).
    pub direction: FlexDirection,
    /// Share of extra space this child absorbs.
    pub grow: f32,
    /// Share of overflow this child gives up, scaled by its size.
    pub shrink: f32,
}

impl FlexStyle {
    /// A row container that neither grows nor shrinks.
    pub const fn new(direction: FlexDirection, grow: f32, shrink: f32) -> Self {
        Self {
            direction,
            grow,
            shrink,
        }
    }

    /// Copy with a new grow weight.
    #[must_use]
    pub const fn with_grow(mut self, grow: f32) -> Self {
        self.grow = grow;
        self
    }
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            grow: 0.0,
            shrink: 1.0,
        }
    }
}

/// A child of a [`Container`] together with its flex weights.
#[derive(Clone, Debug)]
pub struct FlexChild<Msg> {
    /// Grow/shrink weights consulted by the parent's distribution pass.
    pub style: FlexStyle,
    /// The wrapped node.
    pub node: Node<Msg>,
}

impl<Msg> FlexChild<Msg> {
    /// Wrap a node with explicit flex weights.
    pub fn new(style: FlexStyle, node: Node<Msg>) -> Self {
        Self { style, node }
    }

    /// Wrap a node with the default weights (no grow, shrink 1).
    pub fn plain(node: Node<Msg>) -> Self {
        Self {
            style: FlexStyle::default(),
            node,
        }
    }
}

/// The legacy flex container node.
#[derive(Clone, Debug)]
pub struct Container<Msg> {
    pub(crate) style: FlexStyle,
    pub(crate) rect: Rect,
    pub(crate) children: Vec<FlexChild<Msg>>,
}

impl<Msg> Container<Msg> {
    pub(crate) fn new(style: FlexStyle, children: Vec<FlexChild<Msg>>) -> Self {
        Self {
            style,
            rect: Rect::ZERO,
            children,
        }
    }

    /// The container's children with their flex weights.
    pub fn children(&self) -> &[FlexChild<Msg>] {
        &self.children
    }

    fn main_size(&self, rect: Rect) -> u16 {
        match self.style.direction {
            FlexDirection::Row => rect.width,
            FlexDirection::Column => rect.height,
        }
    }

    pub(crate) fn measure(mut self) -> Self {
        self.children = self
            .children
            .into_iter()
            .map(|child| FlexChild {
                style: child.style,
                node: child.node.measure(),
            })
            .collect();

        let main: u16 = self
            .children
            .iter()
            .map(|c| self.main_size(c.node.rect()))
            .fold(0, u16::saturating_add);
        let cross: u16 = self
            .children
            .iter()
            .map(|c| match self.style.direction {
                FlexDirection::Row => c.node.rect().height,
                FlexDirection::Column => c.node.rect().width,
            })
            .max()
            .unwrap_or(0);

        self.rect = match self.style.direction {
            FlexDirection::Row => Rect::new(0, 0, main, cross),
            FlexDirection::Column => Rect::new(0, 0, cross, main),
        };
        self
    }

    /// Two-case distribution: grow into extra space, or shrink out of an
    /// overflow, proportionally to the children's weights. Zero total
    /// weight disables the corresponding branch.
    pub(crate) fn adjust_to(mut self, max_width: u16, max_height: u16) -> Self {
        let available = match self.style.direction {
            FlexDirection::Row => max_width,
            FlexDirection::Column => max_height,
        };
        let measured = self.main_size(self.rect);

        if measured < available {
            let remaining = available - measured;
            let total_grow: f32 = self.children.iter().map(|c| c.style.grow).sum();
            if total_grow > 0.0 {
                let one_grow = f32::from(remaining) / total_grow;
                self.resize_children(|child, size| {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let delta = (child.grow * one_grow).round() as u16;
                    size.saturating_add(delta)
                });
            }
        } else if measured > available {
            let total_scaled: f32 = self
                .children
                .iter()
                .map(|c| c.style.shrink * f32::from(self.main_size(c.node.rect())))
                .sum();
            if total_scaled > 0.0 {
                self.resize_children(|child, size| {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let scaled = (child.shrink * f32::from(size) / total_scaled
                        * f32::from(available))
                    .round() as u16;
                    scaled
                });
            }
        }

        let new_main: u16 = self
            .children
            .iter()
            .map(|c| self.main_size(c.node.rect()))
            .fold(0, u16::saturating_add);
        self.rect = match self.style.direction {
            FlexDirection::Row => self.rect.with_width(new_main),
            FlexDirection::Column => self.rect.with_height(new_main),
        };
        self
    }

    // Child rects are resized in place along the main axis; unlike the
    // stack pass there is no re-descent into the child subtree.
    fn resize_children(&mut self, resize: impl Fn(&FlexStyle, u16) -> u16) {
        let direction = self.style.direction;
        for child in &mut self.children {
            let rect = child.node.rect();
            let current = match direction {
                FlexDirection::Row => rect.width,
                FlexDirection::Column => rect.height,
            };
            let next = resize(&child.style, current);
            let new_rect = match direction {
                FlexDirection::Row => rect.with_width(next),
                FlexDirection::Column => rect.with_height(next),
            };
            child.node.set_rect(new_rect);
        }
    }

    pub(crate) fn place_at(mut self, x: u16, y: u16) -> Self {
        let mut next_x = x;
        let mut next_y = y;
        let direction = self.style.direction;

        self.children = self
            .children
            .into_iter()
            .map(|child| {
                let placed = child.node.place_at(next_x, next_y);
                match direction {
                    FlexDirection::Row => next_x = next_x.saturating_add(placed.rect().width),
                    FlexDirection::Column => next_y = next_y.saturating_add(placed.rect().height),
                }
                FlexChild {
                    style: child.style,
                    node: placed,
                }
            })
            .collect();

        self.rect = self.rect.at(x, y);
        self
    }

    pub(crate) fn actual_size(&self) -> Size {
        let width = self
            .children
            .iter()
            .map(|c| c.node.rect().width)
            .max()
            .unwrap_or(0);
        let height = self
            .children
            .iter()
            .map(|c| c.node.rect().height)
            .fold(0, u16::saturating_add);
        Size::new(width, height)
    }

    pub(crate) fn content_at(&self, y: u16) -> Option<&Node<Msg>> {
        self.children
            .iter()
            .find(|c| c.node.rect().contains_row(y))
            .and_then(|c| c.node.content_at(y))
    }

    pub(crate) fn render_clipped<B: Backend>(&self, backend: &mut B, shift: i32, clip: Option<Rect>) {
        for child in &self.children {
            child.node.render_clipped(backend, shift, clip);
        }
    }
}
