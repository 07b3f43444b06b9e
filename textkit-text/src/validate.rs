//! Text validation predicates: is_empty, is_blank, is_email, is_url, is_uuid,
//! is_valid_length, is_alphanumeric, is_alpha, is_numeric, is_domain

use crate::helpers::char_len;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use textkit_core::TextError;

// ============ Compiled regex patterns ============

fn strict_email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Dot-atom local part, hostname labels of at most 63 chars, alphabetic TLD
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
        )
        .unwrap()
    })
}

fn lenient_email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn strict_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^https?://(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}(?::\d{1,5})?(?:[/?#]\S*)?$",
        )
        .unwrap()
    })
}

fn lenient_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(https?|ftp)://[^\s/$.?#].[^\s]*$").unwrap())
}

fn strict_uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // RFC 4122 versions 1-5 with the 10xx variant
        Regex::new(
            r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
        )
        .unwrap()
    })
}

fn lenient_uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .unwrap()
    })
}

fn domain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$").unwrap()
    })
}

fn numeric_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap())
}

/// Anchored email rule
pub fn email_regex(strict: bool) -> &'static Regex {
    if strict {
        strict_email_regex()
    } else {
        lenient_email_regex()
    }
}

/// Unanchored email rule for extraction.
///
/// The lenient rule without anchors, also stopping at delimiters that neither
/// rule allows in a dot-atom address, so every strict match extracts whole
/// and every extracted substring is a lenient match.
pub fn email_search_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"[^\s@<>()\[\],;:"]+@[^\s@<>()\[\],;:"]+\.[^\s@<>()\[\],;:"]+"#).unwrap()
    })
}

/// Anchored URL rule
pub fn url_regex(strict: bool) -> &'static Regex {
    if strict {
        strict_url_regex()
    } else {
        lenient_url_regex()
    }
}

/// Unanchored URL rule for extraction
pub fn url_search_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Same host prefix as the lenient rule: two characters at least
    RE.get_or_init(|| Regex::new(r"(?:https?|ftp)://[^\s/$.?#]\S[^\s<>]*").unwrap())
}

/// Anchored UUID rule
pub fn uuid_regex(strict: bool) -> &'static Regex {
    if strict {
        strict_uuid_regex()
    } else {
        lenient_uuid_regex()
    }
}

/// Unanchored UUID rule for extraction
pub fn uuid_search_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
            .unwrap()
    })
}

// ============ Predicates ============

/// True for the zero-length string only
pub fn is_empty(s: &str) -> bool {
    s.is_empty()
}

/// True for empty or whitespace-only text
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_email(s: &str, strict: bool) -> bool {
    // RFC 5321 caps the whole address at 254 octets
    if strict && s.len() > 254 {
        return false;
    }
    email_regex(strict).is_match(s)
}

pub fn is_url(s: &str, strict: bool) -> bool {
    url_regex(strict).is_match(s)
}

/// Any 8-4-4-4-12 hexadecimal UUID, regardless of version
pub fn is_uuid(s: &str) -> bool {
    uuid_regex(false).is_match(s)
}

pub fn is_domain(s: &str) -> bool {
    s.len() <= 253 && domain_regex().is_match(s)
}

/// Non-empty and every character is a Unicode letter or digit
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

/// Non-empty and every character is a Unicode letter
pub fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Decimal or scientific notation, surrounding whitespace ignored
pub fn is_numeric(s: &str) -> bool {
    numeric_regex().is_match(s.trim())
}

/// Unit used when measuring a value's length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-8 bytes
    Bytes,
}

impl LengthUnit {
    pub fn measure(self, s: &str) -> usize {
        match self {
            LengthUnit::Chars => char_len(s),
            LengthUnit::Bytes => s.len(),
        }
    }
}

/// Check that `s` has between `min` and `max` characters, inclusive.
///
/// An inverted range (`min > max`) is reported as `InvalidLengthRange`
/// rather than as an out-of-range value.
pub fn check_length(s: &str, min: usize, max: usize) -> Result<(), TextError> {
    check_length_in(s, min, max, LengthUnit::Chars)
}

/// Like [`check_length`], measuring in the given unit
pub fn check_length_in(s: &str, min: usize, max: usize, unit: LengthUnit) -> Result<(), TextError> {
    if min > max {
        return Err(TextError::invalid_length_range(min, max));
    }
    let len = unit.measure(s);
    if len < min || len > max {
        return Err(TextError::invalid_length(len, min, max));
    }
    Ok(())
}

pub fn is_valid_length(s: &str, min: usize, max: usize) -> bool {
    check_length(s, min, max).is_ok()
}
