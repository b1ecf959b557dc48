//! Bracketed severity tags with ANSI-aware padding.
//!
//! Escape sequences occupy bytes but no columns, so naive width formatting
//! misaligns colored tags. Padding here targets the visible width and widens
//! the byte target by the escape overhead.

use super::ansi;

/// Which side of a padded field the text hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Pad on the right.
    Left,
    /// Pad on the left — keeps the message column start consistent.
    #[default]
    Right,
}

/// Every padding knob in one struct so tag rendering doesn't need loose parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFormat {
    /// Width the label is padded to inside the brackets.
    pub label_width: usize,
    /// Which side of the inner field the label hugs.
    pub label_justify: Justify,
    /// Text appended after the closing bracket, before outer padding.
    pub trailer: String,
    /// Visible width the finished tag is padded to, trailer included.
    pub padding: usize,
    /// Pad the finished tag on the right instead of the left.
    pub left_justify: bool,
}

impl Default for TagFormat {
    fn default() -> Self {
        Self {
            label_width: 7,
            label_justify: Justify::Right,
            trailer: " ".to_string(),
            padding: 10,
            left_justify: false,
        }
    }
}

/// Renders a colored, bracketed, padded tag from a label and a color sequence.
///
/// The color is opened before the label and closed with `reset` inside the
/// brackets, so the brackets themselves stay uncolored. The pad target is
/// `format.padding` plus the escape-byte overhead, which keeps the visible
/// width uniform whether the color is a 16-color or a 256-color sequence.
#[must_use]
pub fn generate(text: &str, color: &str, reset: &str, format: &TagFormat) -> String {
    let label = pad(text, format.label_width, format.label_justify);
    let tag = format!("[{color}{label}{reset}]{}", format.trailer);

    let overhead = tag.len() - ansi::visible_len(&tag);
    let justify = if format.left_justify {
        Justify::Left
    } else {
        Justify::Right
    };
    pad(&tag, format.padding + overhead, justify)
}

/// Space-pads to `width` without ever truncating — text already at or past the
/// target width is returned unchanged.
fn pad(s: &str, width: usize, justify: Justify) -> String {
    if s.len() >= width {
        return s.to_string();
    }

    let padding = " ".repeat(width - s.len());
    match justify {
        Justify::Left => format!("{s}{padding}"),
        Justify::Right => format!("{padding}{s}"),
    }
}
