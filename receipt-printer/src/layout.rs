//! Line wrapping and page composition
//!
//! Wraps memo text into lines that fit the paper width, then pads the
//! result into a fixed receipt stub layout (one blank line on top,
//! a content-dependent number of blank lines at the bottom).

use crate::width::text_width;

/// Maximum display width per printed line.
///
/// 80mm paper on the SRP-330II fits 40 single-width cells at the
/// default font.
pub const COLUMN_BUDGET: usize = 40;

/// Greedy word-wrap against a display-width budget.
///
/// Words are split on whitespace and packed left to right; a
/// single-width space joins words already on a line. Words are never
/// split mid-word: a word wider than the budget is placed alone on a
/// line that exceeds the budget rather than being broken.
pub fn wrap(text: &str, budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = text_width(word);
        let space_width = if current.is_empty() { 0 } else { 1 };

        if current_width + space_width + word_width <= budget {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// A fully padded receipt page, ready for preview or encoding.
///
/// Immutable once composed; the only way to build one is
/// [`Page::compose`] or [`paginate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    /// Compose content lines into a page.
    ///
    /// One blank line is prepended. The trailing blank count depends
    /// only on the content line count, so short memos sit roughly
    /// centered on the stub:
    ///
    /// | content lines | bottom padding |
    /// |---------------|----------------|
    /// | 1             | 3              |
    /// | 2             | 2              |
    /// | 0 or ≥3       | 1              |
    pub fn compose(content: Vec<String>) -> Self {
        let n = content.len();
        let bottom_padding = match n {
            1 => 3,
            2 => 2,
            _ => 1,
        };

        let mut lines = Vec::with_capacity(1 + n + bottom_padding);
        lines.push(String::new());
        lines.extend(content);
        for _ in 0..bottom_padding {
            lines.push(String::new());
        }

        Self { lines }
    }

    /// All lines of the page, padding included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Total line count, padding included. Always ≥ 2.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Wrap and compose in one step, using the default column budget.
pub fn paginate(text: &str) -> Page {
    Page::compose(wrap(text, COLUMN_BUDGET))
}
