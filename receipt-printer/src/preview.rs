//! Bordered text preview of a composed page
//!
//! Renders what the receipt will look like without touching the
//! printer. Lines are padded to the column budget by character count,
//! not display width, so Hangul lines visually misalign inside the
//! border. That mismatch is intentional: callers compare this output
//! byte-for-byte and depend on the existing layout.

use crate::layout::{COLUMN_BUDGET, Page};

/// Render a page as a bordered block with a trailing line-count summary.
pub fn render(page: &Page) -> String {
    let rule = "=".repeat(COLUMN_BUDGET + 2);

    let body = page
        .lines()
        .iter()
        .map(|line| format!("|{:<width$}|", line, width = COLUMN_BUDGET))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{rule}\n{body}\n{rule}\n총 {}줄", page.len())
}
