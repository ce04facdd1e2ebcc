//! Styled text: the glyph sequence rendered by `Text` nodes.
//!
//! A `StyledText` is a flat run of `(style, character)` pairs. Construction
//! is grapheme-aware so that combining sequences do not inflate the column
//! count the layout engine works with.

use crate::style::{Rgb, Style};
use unicode_segmentation::UnicodeSegmentation;

/// One styled glyph.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Glyph {
    /// Styling for this glyph.
    pub style: Style,
    /// The character occupying the column.
    pub ch: char,
}

/// A run of styled glyphs, one column each.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct StyledText {
    glyphs: Vec<Glyph>,
}

impl StyledText {
    /// Empty text.
    pub const fn empty() -> Self {
        Self { glyphs: Vec::new() }
    }

    /// Plain text with the default style.
    pub fn plain(content: &str) -> Self {
        Self::styled(content, Style::DEFAULT)
    }

    /// Text with a uniform style.
    pub fn styled(content: &str, style: Style) -> Self {
        let glyphs = content
            .graphemes(true)
            .filter_map(|g| g.chars().next())
            .map(|ch| Glyph { style, ch })
            .collect();
        Self { glyphs }
    }

    /// Text with uniform foreground and background colors.
    pub fn colored(content: &str, fg: Rgb, bg: Rgb) -> Self {
        Self::styled(content, Style::new(fg, bg))
    }

    /// Number of columns the text occupies.
    pub fn count(&self) -> u16 {
        u16::try_from(self.glyphs.len()).unwrap_or(u16::MAX)
    }

    /// Check if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over the glyphs.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    /// The unstyled character content.
    pub fn to_plain_string(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }
}

impl From<&str> for StyledText {
    fn from(content: &str) -> Self {
        Self::plain(content)
    }
}

impl From<String> for StyledText {
    fn from(content: String) -> Self {
        Self::plain(&content)
    }
}

impl std::ops::Add for StyledText {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.glyphs.extend(rhs.glyphs);
        self
    }
}

impl std::ops::Add<&str> for StyledText {
    type Output = Self;

    fn add(self, rhs: &str) -> Self {
        self + Self::plain(rhs)
    }
}

impl std::fmt::Display for StyledText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph.ch)?;
        }
        Ok(())
    }
}
