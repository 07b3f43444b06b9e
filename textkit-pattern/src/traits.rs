//! Matcher traits

use crate::SharedRegistry;
use regex::Regex;
use serde::Serialize;
use textkit_core::TextError;
use tracing::trace;

/// Metadata describing a pattern group
#[derive(Debug, Clone, Serialize)]
pub struct GroupMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

fn extract_first(rule: &Regex, input: &str) -> String {
    rule.find(input)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn extract_every(rule: &Regex, input: &str) -> Vec<String> {
    rule.find_iter(input).map(|m| m.as_str().to_string()).collect()
}

/// Matcher bound to one fixed, built-in rule with strict and lenient modes.
///
/// Implementers supply the compiled rules; matching and extraction are
/// provided. None of the operations can fail.
pub trait BasicPatternGroup: Send + Sync {
    fn meta(&self) -> GroupMeta;

    /// Anchored rule used by `matches`
    fn rule(&self, strict: bool) -> &Regex;

    /// Unanchored rule used by the extract operations
    fn search_rule(&self) -> &Regex;

    fn matches(&self, input: &str, strict: bool) -> bool {
        self.rule(strict).is_match(input)
    }

    /// First matching substring, or an empty string
    fn extract(&self, input: &str) -> String {
        extract_first(self.search_rule(), input)
    }

    /// Every non-overlapping match, left to right
    fn extract_all(&self, input: &str) -> Vec<String> {
        extract_every(self.search_rule(), input)
    }
}

/// Matcher that resolves its rule by name through a shared registry.
///
/// Every operation fails with `PatternNotFound` when the name is not
/// registered; a missing rule is never reported as "no match".
pub trait ComplexPatternGroup: Send + Sync {
    fn meta(&self) -> GroupMeta;

    fn registry(&self) -> &SharedRegistry;

    /// Resolve `name`, logging misses
    fn resolve(&self, name: &str) -> Result<Regex, TextError> {
        self.registry().get(name).inspect_err(|_| {
            trace!(group = self.meta().name, name, "pattern lookup missed");
        })
    }

    fn matches(&self, input: &str, name: &str) -> Result<bool, TextError> {
        Ok(self.resolve(name)?.is_match(input))
    }

    fn extract(&self, input: &str, name: &str) -> Result<String, TextError> {
        Ok(extract_first(&self.resolve(name)?, input))
    }

    fn extract_all(&self, input: &str, name: &str) -> Result<Vec<String>, TextError> {
        Ok(extract_every(&self.resolve(name)?, input))
    }
}
