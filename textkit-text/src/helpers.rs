//! Helper functions for text operations
//!
//! Regex compilation with caching, plus character-index utilities.

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use textkit_core::PatternError;

/// Upper bound on the compiled size of a caller-supplied pattern
pub const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Most patterns the cache holds before it is flushed
pub const REGEX_CACHE_CAPACITY: usize = 256;

/// Regex cache for compiled patterns
static REGEX_CACHE: OnceLock<RwLock<HashMap<String, Regex>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, Regex>> {
    REGEX_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Compile a pattern without touching the cache
pub fn compile_regex(pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            details: e.to_string(),
        })
}

/// Get or compile a regex pattern with caching
pub fn get_regex(pattern: &str) -> Result<Regex, PatternError> {
    let cache = get_cache();

    // Try read lock first
    if let Ok(read_guard) = cache.read() {
        if let Some(re) = read_guard.get(pattern) {
            return Ok(re.clone());
        }
    }

    let re = compile_regex(pattern)?;

    // Try to cache it (don't fail if we can't)
    if let Ok(mut write_guard) = cache.write() {
        if write_guard.len() >= REGEX_CACHE_CAPACITY {
            write_guard.clear();
        }
        write_guard.insert(pattern.to_string(), re.clone());
    }

    Ok(re)
}

/// Convert character index to byte position (handling Unicode)
pub fn char_to_byte_index(s: &str, char_idx: usize) -> Option<usize> {
    if char_idx == s.chars().count() {
        return Some(s.len());
    }
    s.char_indices().nth(char_idx).map(|(i, _)| i)
}

/// Number of Unicode scalar values in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_regex() {
        let re = get_regex(r"\d+").unwrap();
        assert!(re.is_match("123"));
    }

    #[test]
    fn test_get_regex_cached() {
        let a = get_regex(r"^[a-z]+$").unwrap();
        let b = get_regex(r"^[a-z]+$").unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_regex_cache_is_bounded() {
        for i in 0..REGEX_CACHE_CAPACITY * 3 {
            get_regex(&format!("^bounded{}$", i)).unwrap();
        }
        let len = get_cache().read().unwrap().len();
        assert!(len <= REGEX_CACHE_CAPACITY);
        assert!(get_regex("^bounded0$").unwrap().is_match("bounded0"));
    }

    #[test]
    fn test_get_regex_invalid() {
        let result = get_regex(r"[invalid");
        assert!(matches!(result, Err(PatternError::InvalidPattern { .. })));
    }

    #[test]
    fn test_char_to_byte_index() {
        assert_eq!(char_to_byte_index("café!", 4), Some(5));
        assert_eq!(char_to_byte_index("abc", 3), Some(3));
        assert_eq!(char_to_byte_index("abc", 4), None);
    }

    #[test]
    fn test_char_len() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!("héllo".len(), 6);
    }
}
