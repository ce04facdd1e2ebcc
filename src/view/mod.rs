//! View module: the immutable widget tree.
//!
//! Trees are rebuilt from scratch on every render; no node survives across
//! renders by identity. Construction goes through the helper functions
//! below plus the fluent setters on [`Node`]; conditional children are
//! ordinary control flow producing a `Vec` before construction.
//!
//! ```
//! use ratchet::{horizontal, text, vertical, Node, ViewSize};
//!
//! let view: Node<()> = vertical(vec![
//!     horizontal(vec![
//!         text("status"),
//!         text("message").width(ViewSize::Fill),
//!     ])
//!     .width(ViewSize::Fill),
//!     text("footer"),
//! ]);
//! ```

mod container;
mod cursor;
mod node;
mod stack;
mod text;

pub use container::{Container, FlexChild, FlexDirection, FlexStyle};
pub use cursor::Cursor;
pub use node::Node;
pub use stack::Stack;
pub use text::Text;

use crate::text::StyledText;

/// A container whose children flow left to right.
pub fn horizontal<Msg>(children: Vec<Node<Msg>>) -> Node<Msg> {
    Node::Horizontal(Stack::new(children))
}

/// A container whose children flow top to bottom.
pub fn vertical<Msg>(children: Vec<Node<Msg>>) -> Node<Msg> {
    Node::Vertical(Stack::new(children))
}

/// A single row of text.
pub fn text<Msg>(content: impl Into<StyledText>) -> Node<Msg> {
    Node::Text(Text::new(content.into()))
}

/// A legacy flex container with explicit grow/shrink weights.
pub fn container<Msg>(style: FlexStyle, children: Vec<FlexChild<Msg>>) -> Node<Msg> {
    Node::Container(Container::new(style, children))
}
