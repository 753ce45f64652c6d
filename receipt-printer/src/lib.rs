//! # receipt-printer
//!
//! Text-to-receipt formatting and ESC/POS encoding for Korean thermal
//! receipt printers (BIXOLON SRP series and compatible).
//!
//! ## Scope
//!
//! This crate handles HOW a memo becomes printable bytes:
//! - Display-width measurement (Hangul = 2 cells, ASCII = 1)
//! - Greedy word-wrap against a 40-cell column budget
//! - Page composition with fixed top/bottom blank padding
//! - ESC/POS command building with EUC-KR encoding
//! - Bordered text preview rendering
//!
//! Everything here is pure and side-effect-free. Talking to CUPS
//! (spool file, `lp`, `lpstat`) lives in the `print-agent` crate.
//!
//! ## Example
//!
//! ```
//! use receipt_printer::{paginate, encode_page, preview};
//!
//! let page = paginate("우유 사오기");
//! assert_eq!(page.len(), 5); // blank + 1 content line + 3 blanks
//!
//! let data = encode_page(&page);
//! assert_eq!(&data[..2], &[0x1B, 0x40]); // starts with printer reset
//!
//! let text = preview::render(&page);
//! assert!(text.starts_with("="));
//! ```

mod escpos;
mod layout;
pub mod preview;
mod width;

// Re-exports
pub use escpos::{EscPosBuilder, encode_page};
pub use layout::{COLUMN_BUDGET, Page, paginate, wrap};
pub use width::text_width;
