//! Structured errors for string validation and pattern lookup
//!
//! Validation errors are values: a pipeline latches them, matchers return
//! them, and callers decide what to do. Each error carries a machine-readable
//! code alongside its typed kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
    pub const INVALID_URL: &str = "INVALID_URL";
    pub const INVALID_UUID: &str = "INVALID_UUID";
    pub const INVALID_LENGTH_RANGE: &str = "INVALID_LENGTH_RANGE";
    pub const INVALID_LENGTH: &str = "INVALID_LENGTH";
    pub const EMPTY: &str = "EMPTY";
    pub const EMPTY_AFTER_NORMALIZATION: &str = "EMPTY_AFTER_NORMALIZATION";
    pub const NOT_ALPHANUMERIC: &str = "NOT_ALPHANUMERIC";
    pub const NOT_ALPHA: &str = "NOT_ALPHA";
    pub const INVALID_DOMAIN: &str = "INVALID_DOMAIN";
    pub const PATTERN_NOT_FOUND: &str = "PATTERN_NOT_FOUND";
    pub const PATTERN_MISMATCH: &str = "PATTERN_MISMATCH";
    pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
    pub const CUSTOM: &str = "CUSTOM";
}

/// Kind of failure, one per error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidEmail,
    InvalidUrl,
    InvalidUuid,
    /// The requested bounds themselves are malformed (`min > max`)
    InvalidLengthRange,
    /// The value falls outside well-formed bounds
    InvalidLength,
    Empty,
    EmptyAfterNormalization,
    NotAlphaNumeric,
    NotAlpha,
    InvalidDomain,
    PatternNotFound,
    PatternMismatch,
    InvalidPattern,
    Custom,
}

impl ErrorKind {
    /// Machine-readable code for this kind
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidEmail => codes::INVALID_EMAIL,
            ErrorKind::InvalidUrl => codes::INVALID_URL,
            ErrorKind::InvalidUuid => codes::INVALID_UUID,
            ErrorKind::InvalidLengthRange => codes::INVALID_LENGTH_RANGE,
            ErrorKind::InvalidLength => codes::INVALID_LENGTH,
            ErrorKind::Empty => codes::EMPTY,
            ErrorKind::EmptyAfterNormalization => codes::EMPTY_AFTER_NORMALIZATION,
            ErrorKind::NotAlphaNumeric => codes::NOT_ALPHANUMERIC,
            ErrorKind::NotAlpha => codes::NOT_ALPHA,
            ErrorKind::InvalidDomain => codes::INVALID_DOMAIN,
            ErrorKind::PatternNotFound => codes::PATTERN_NOT_FOUND,
            ErrorKind::PatternMismatch => codes::PATTERN_MISMATCH,
            ErrorKind::InvalidPattern => codes::INVALID_PATTERN,
            ErrorKind::Custom => codes::CUSTOM,
        }
    }
}

/// Where an error was raised
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Pipeline step that latched the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,

    /// Registry name of the pattern involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Structured text error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextError {
    /// Typed kind
    pub kind: ErrorKind,

    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl TextError {
    /// Create a new error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: kind.code().to_string(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: record the pipeline step
    pub fn in_step(mut self, step: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.step = Some(step.into());
        self
    }

    /// Builder: record the pattern name
    pub fn with_pattern(mut self, name: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.pattern = Some(name.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Step recorded in the context, if any
    pub fn step(&self) -> Option<&str> {
        self.context.as_ref().and_then(|c| c.step.as_deref())
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_email(input: &str) -> Self {
        Self::new(ErrorKind::InvalidEmail, format!("Invalid email address: '{}'", input))
            .with_suggestion("Use the form local@domain.tld")
    }

    pub fn invalid_url(input: &str) -> Self {
        Self::new(ErrorKind::InvalidUrl, format!("Invalid URL: '{}'", input))
            .with_suggestion("Include a scheme and host, e.g. https://example.com")
    }

    pub fn invalid_uuid(input: &str) -> Self {
        Self::new(ErrorKind::InvalidUuid, format!("Invalid UUID: '{}'", input))
            .with_suggestion("Use the 8-4-4-4-12 hexadecimal form")
    }

    pub fn invalid_length_range(min: usize, max: usize) -> Self {
        Self::new(
            ErrorKind::InvalidLengthRange,
            format!("Invalid length range: min {} is greater than max {}", min, max),
        )
        .with_suggestion("Swap the bounds so that min <= max")
    }

    pub fn invalid_length(len: usize, min: usize, max: usize) -> Self {
        Self::new(
            ErrorKind::InvalidLength,
            format!("Length {} is outside the range {}..={}", len, min, max),
        )
    }

    pub fn empty() -> Self {
        Self::new(ErrorKind::Empty, "Value is empty")
    }

    pub fn empty_after_normalization() -> Self {
        Self::new(
            ErrorKind::EmptyAfterNormalization,
            "Value is empty after whitespace normalization",
        )
    }

    pub fn not_alphanumeric(input: &str) -> Self {
        Self::new(
            ErrorKind::NotAlphaNumeric,
            format!("Value contains non-alphanumeric characters: '{}'", input),
        )
    }

    pub fn not_alpha(input: &str) -> Self {
        Self::new(
            ErrorKind::NotAlpha,
            format!("Value contains non-alphabetic characters: '{}'", input),
        )
    }

    pub fn invalid_domain(input: &str) -> Self {
        Self::new(ErrorKind::InvalidDomain, format!("Invalid domain name: '{}'", input))
            .with_suggestion("Use dot-separated labels ending in an alphabetic TLD")
    }

    pub fn pattern_not_found(name: &str) -> Self {
        Self::new(ErrorKind::PatternNotFound, format!("Pattern not found: {}", name))
            .with_pattern(name)
            .with_suggestion(format!("Register '{}' before matching against it", name))
    }

    pub fn pattern_mismatch(rule: &str, input: &str) -> Self {
        Self::new(
            ErrorKind::PatternMismatch,
            format!("Value '{}' does not match pattern {}", input, rule),
        )
        .with_pattern(rule)
    }

    pub fn invalid_pattern(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern, format!("Invalid pattern: {}", details.into()))
            .with_suggestion("Check the regular expression syntax")
    }

    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Custom, message)
    }
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for TextError {}

/// Error type for pattern registry operations
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("Pattern not found: {0}")]
    NotFound(String),

    #[error("Invalid regex '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    #[error("Invalid pattern source: {0}")]
    InvalidSource(String),
}

impl From<PatternError> for TextError {
    fn from(err: PatternError) -> Self {
        match err {
            PatternError::NotFound(name) => Self::pattern_not_found(&name),
            PatternError::InvalidPattern { pattern, details } => {
                Self::invalid_pattern(format!("'{}': {}", pattern, details))
            }
            PatternError::InvalidSource(details) => Self::invalid_pattern(details),
        }
    }
}
