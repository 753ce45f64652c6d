//! ESC/POS command builder
//!
//! Builds the binary command stream for Korean thermal printers.
//! Text is encoded as EUC-KR (the SRP-330II's CP949 codepage); lines
//! that EUC-KR cannot represent fall back to UTF-8 bytes, which recent
//! firmware renders for characters outside KS X 1001.

use crate::layout::Page;
use tracing::instrument;

/// ESC/POS command builder
///
/// Starts with a printer reset; callers chain commands and finish
/// with [`EscPosBuilder::build`]. Command byte values follow the
/// Epson ESC/POS reference as implemented by BIXOLON.
pub struct EscPosBuilder {
    buf: Vec<u8>,
}

impl EscPosBuilder {
    pub fn new() -> Self {
        let mut buf = Vec::with_capacity(1024);
        // Initialize printer (ESC @)
        buf.extend_from_slice(&[0x1B, 0x40]);
        Self { buf }
    }

    // === Korean Text Support ===

    /// Select the CP949/EUC-KR codepage and enable Hangul mode.
    pub fn korean_mode(&mut self) -> &mut Self {
        // ESC t 18 - Select CP949/EUC-KR codepage
        self.buf.extend_from_slice(&[0x1B, 0x74, 0x12]);
        // FS & - Enable Hangul mode
        self.buf.extend_from_slice(&[0x1C, 0x26]);
        // FS . - Clear then re-apply Hangul mode
        self.buf.extend_from_slice(&[0x1C, 0x2E]);
        self
    }

    // === Alignment ===

    /// Align text to center
    pub fn center(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x01]);
        self
    }

    /// Align text to left (default)
    pub fn left(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x00]);
        self
    }

    // === Text Output ===

    /// Write one line of text followed by a line feed.
    ///
    /// The text is EUC-KR encoded; if any character is unmappable the
    /// whole line is written as UTF-8 instead.
    pub fn line(&mut self, s: &str) -> &mut Self {
        let (encoded, _, had_errors) = encoding_rs::EUC_KR.encode(s);
        if had_errors {
            self.buf.extend_from_slice(s.as_bytes());
        } else {
            self.buf.extend_from_slice(&encoded);
        }
        self.buf.push(b'\n');
        self
    }

    // === Paper Control ===

    /// Feed blank lines as raw line feeds.
    pub fn feed(&mut self, lines: usize) -> &mut Self {
        for _ in 0..lines {
            self.buf.push(b'\n');
        }
        self
    }

    /// Cut paper (full cut)
    pub fn cut(&mut self) -> &mut Self {
        // GS V 0 - Full cut
        self.buf.extend_from_slice(&[0x1D, 0x56, 0x00]);
        self
    }

    // === Build ===

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a composed page into the full print job byte stream.
///
/// Reset, codepage/Hangul setup, centered page body, left-align
/// restore, feed and full cut — deterministic for a given page.
#[instrument(skip(page), fields(lines = page.len()))]
pub fn encode_page(page: &Page) -> Vec<u8> {
    let mut b = EscPosBuilder::new();
    b.korean_mode();
    b.center();
    for line in page.lines() {
        b.line(line);
    }
    b.left();
    b.feed(3);
    b.cut();
    b.build()
}
