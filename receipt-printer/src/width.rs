//! Display width measurement for mixed Korean/ASCII text
//!
//! Receipt printers render Hangul (and everything else outside the
//! 7-bit range) in double-width cells, ASCII in single-width cells.
//! No combining-character or locale awareness; this matches what the
//! printer actually does with EUC-KR text.

/// Display cell width of a single character: 1 for ASCII, 2 otherwise.
pub fn char_width(c: char) -> usize {
    if (c as u32) <= 127 { 1 } else { 2 }
}

/// Total display cell width of a string.
///
/// Additive over concatenation: `text_width(a) + text_width(b)`
/// equals the width of `a` followed by `b`.
pub fn text_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(text_width("hello"), 5);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn test_hangul_width() {
        assert_eq!(text_width("우유"), 4); // 2 Hangul chars = 4 cells
        assert_eq!(text_width("우유 사오기"), 11); // 5 Hangul + 1 space
    }

    #[test]
    fn test_mixed_width() {
        assert_eq!(text_width("AB한글CD"), 8); // 4 ASCII + 2 Hangul
    }

    #[test]
    fn test_additive_over_concatenation() {
        let a = "회의 준비";
        let b = "사항 123";
        assert_eq!(
            text_width(&format!("{}{}", a, b)),
            text_width(a) + text_width(b)
        );
    }
}
