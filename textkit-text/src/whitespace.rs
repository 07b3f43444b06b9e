//! Whitespace handling: collapse, clean, normalize

/// Collapse every run of whitespace into a single ASCII space and drop
/// leading and trailing whitespace.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove all whitespace
pub fn clean_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Zero-width characters that render as nothing but are not `char::is_whitespace`
const ZERO_WIDTH: [char; 4] = ['\u{200b}', '\u{200c}', '\u{200d}', '\u{feff}'];

/// Drop zero-width characters, then collapse. Text that only looked blank
/// normalizes to the empty string.
pub fn normalize_whitespace(s: &str) -> String {
    let visible: String = s.chars().filter(|c| !ZERO_WIDTH.contains(c)).collect();
    collapse_whitespace(&visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a  b "), "a b");
        assert_eq!(collapse_whitespace("a\t\tb\n\nc"), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_clean_whitespace() {
        assert_eq!(clean_whitespace("  a  b "), "ab");
        assert_eq!(clean_whitespace("a\u{00a0}b\u{3000}c"), "abc");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("a\u{00a0}\u{00a0}b\r\nc"), "a b c");
        assert_eq!(normalize_whitespace("\u{2003}\t"), "");
        assert_eq!(normalize_whitespace("\u{200b}\u{feff}"), "");
        assert_eq!(normalize_whitespace("a\u{200b}b"), "ab");
    }
}
