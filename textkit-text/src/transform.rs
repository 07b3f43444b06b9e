//! Text transformations: case conversion, case styles, filtering, truncation

use crate::helpers::char_to_byte_index;

// ============ Case conversion ============

pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Uppercase the first letter of every whitespace-separated word and
/// lowercase the rest. Whitespace is preserved as-is.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c.is_whitespace() {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

// ============ Case styles ============

/// Split an identifier-ish string into words.
///
/// Words break on any non-alphanumeric character and on case boundaries:
/// `helloWorld` → `hello`, `World`; `HTTPServer` → `HTTP`, `Server`;
/// `v2Beta` → `v2`, `Beta`.
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

fn join_lower(s: &str, sep: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// `Hello World` → `hello_world`
pub fn snake_case(s: &str) -> String {
    join_lower(s, "_")
}

/// `Hello World` → `hello-world`
pub fn kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

/// `hello_world` → `helloWorld`
pub fn camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in split_words(s).iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            result.push_str(&capitalize_word(word));
        }
    }
    result
}

/// `hello_world` → `HelloWorld`
pub fn pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize_word(w)).collect()
}

/// Lowercase, with every run of non-alphanumerics turned into a single `-`
pub fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
        } else if !result.is_empty() && !result.ends_with('-') {
            result.push('-');
        }
    }
    while result.ends_with('-') {
        result.pop();
    }
    result
}

// ============ Filtering ============

pub fn alphanumeric_only(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).collect()
}

pub fn alpha_only(s: &str) -> String {
    s.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Drop control characters except tab, newline and carriage return
pub fn remove_non_printable(s: &str) -> String {
    s.chars()
        .filter(|&c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

// ============ Misc ============

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Truncate to at most `max_chars` characters, `suffix` included.
///
/// Text that already fits is returned unchanged. When the suffix alone
/// does not fit, the first `max_chars` characters of the suffix are used.
pub fn truncate(s: &str, max_chars: usize, suffix: &str) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let suffix_len = suffix.chars().count();
    if suffix_len >= max_chars {
        return suffix.chars().take(max_chars).collect();
    }

    let content_len = max_chars - suffix_len;
    let cut = char_to_byte_index(s, content_len).unwrap_or(s.len());
    let mut result = String::with_capacity(cut + suffix.len());
    result.push_str(&s[..cut]);
    result.push_str(suffix);
    result
}
