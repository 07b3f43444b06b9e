//! Fluent string pipeline
//!
//! A `Pipeline` carries a string value and at most one latched error through
//! a chain of steps:
//!
//! - Manipulation steps rewrite the value. They never touch the error and
//!   always run, even after a validation step has failed. Nothing is rolled
//!   back.
//! - Validation steps check the current value. The first failure is latched;
//!   later failures are ignored, so terminals always report the first error.
//!   Validation steps still evaluate after a failure, they just cannot
//!   replace the latched error.
//! - Terminal steps consume the pipeline and hand back the value, the error,
//!   or both.
//!
//! ```ignore
//! let (value, err) = Pipeline::new("  Jane.Doe@Example.com ")
//!     .trim()
//!     .to_lower()
//!     .require_email()
//!     .result();
//! ```

use crate::config::PipelineConfig;
use std::fmt;
use textkit_core::TextError;
use textkit_pattern::{BasicPatternGroup, ComplexPatternGroup};
use textkit_text::{html, transform, validate, whitespace};
use tracing::{debug, trace};

/// Chainable string builder with first-error-wins validation
#[derive(Debug, Clone)]
pub struct Pipeline {
    value: String,
    err: Option<TextError>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Wrap `input` unchanged, with the default configuration
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_config(input, PipelineConfig::default())
    }

    pub fn with_config(input: impl Into<String>, config: PipelineConfig) -> Self {
        Self {
            value: input.into(),
            err: None,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn map(mut self, f: impl FnOnce(&str) -> String) -> Self {
        self.value = f(&self.value);
        self
    }

    /// Latch `err` unless an earlier step already failed
    fn latch(&mut self, step: &'static str, err: TextError) {
        match &self.err {
            None => {
                debug!(step, code = %err.code, "pipeline validation failed");
                self.err = Some(err.in_step(step));
            }
            Some(first) => {
                trace!(step, latched = %first.code, "ignoring failure, pipeline already failed");
            }
        }
    }

    fn check(mut self, step: &'static str, outcome: Result<(), TextError>) -> Self {
        if let Err(err) = outcome {
            self.latch(step, err);
        }
        self
    }

    fn ensure(self, step: &'static str, ok: bool, err: impl FnOnce(&str) -> TextError) -> Self {
        let outcome = if ok { Ok(()) } else { Err(err(&self.value)) };
        self.check(step, outcome)
    }

    // ========== Manipulation ==========

    pub fn trim(self) -> Self {
        self.map(|s| s.trim().to_string())
    }

    /// Collapse whitespace runs to one space and trim the ends
    pub fn collapse_whitespace(self) -> Self {
        self.map(whitespace::collapse_whitespace)
    }

    /// Remove every whitespace character
    pub fn clean_whitespace(self) -> Self {
        self.map(whitespace::clean_whitespace)
    }

    /// Drop zero-width characters, then collapse whitespace
    pub fn normalize_whitespace(self) -> Self {
        self.map(whitespace::normalize_whitespace)
    }

    pub fn to_lower(self) -> Self {
        self.map(transform::to_lower)
    }

    pub fn to_upper(self) -> Self {
        self.map(transform::to_upper)
    }

    pub fn capitalize(self) -> Self {
        self.map(transform::capitalize)
    }

    pub fn to_title_case(self) -> Self {
        self.map(transform::title_case)
    }

    pub fn to_snake_case(self) -> Self {
        self.map(transform::snake_case)
    }

    pub fn to_kebab_case(self) -> Self {
        self.map(transform::kebab_case)
    }

    pub fn to_camel_case(self) -> Self {
        self.map(transform::camel_case)
    }

    pub fn to_pascal_case(self) -> Self {
        self.map(transform::pascal_case)
    }

    pub fn slugify(self) -> Self {
        self.map(transform::slugify)
    }

    pub fn strip_html(self) -> Self {
        self.map(html::strip_html)
    }

    pub fn escape_html(self) -> Self {
        self.map(html::escape_html)
    }

    pub fn unescape_html(self) -> Self {
        self.map(html::unescape_html)
    }

    pub fn alphanumeric_only(self) -> Self {
        self.map(transform::alphanumeric_only)
    }

    pub fn alpha_only(self) -> Self {
        self.map(transform::alpha_only)
    }

    pub fn remove_non_printable(self) -> Self {
        self.map(transform::remove_non_printable)
    }

    pub fn reverse(self) -> Self {
        self.map(transform::reverse)
    }

    /// Cut to `max_chars` characters, `suffix` included
    pub fn truncate(self, max_chars: usize, suffix: &str) -> Self {
        self.map(|s| transform::truncate(s, max_chars, suffix))
    }

    pub fn replace_all(self, from: &str, to: &str) -> Self {
        if from.is_empty() {
            return self;
        }
        self.map(|s| s.replace(from, to))
    }

    /// Apply an arbitrary string function; never validates
    pub fn transform(self, f: impl FnOnce(&str) -> String) -> Self {
        self.map(f)
    }

    /// Apply `f` only when `cond` holds.
    ///
    /// An error latched before the branch survives it, even if `f` builds a
    /// fresh pipeline instead of chaining on the one it was given.
    pub fn when(self, cond: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if !cond {
            return self;
        }
        let latched = self.err.clone();
        let mut next = f(self);
        if latched.is_some() {
            next.err = latched;
        }
        next
    }

    // ========== Validation ==========

    pub fn require_not_empty(self) -> Self {
        let ok = !validate::is_empty(&self.value);
        self.ensure("require_not_empty", ok, |_| TextError::empty())
    }

    /// Fails when nothing but whitespace or zero-width characters remain.
    /// The value itself is left as-is.
    pub fn require_not_empty_normalized(self) -> Self {
        let ok = !whitespace::normalize_whitespace(&self.value).is_empty();
        self.ensure("require_not_empty_normalized", ok, |_| {
            TextError::empty_after_normalization()
        })
    }

    /// Email check using the configured strictness
    pub fn require_email(self) -> Self {
        let strict = self.config.strict_email;
        self.require_email_strict(strict)
    }

    pub fn require_email_strict(self, strict: bool) -> Self {
        let ok = validate::is_email(&self.value, strict);
        self.ensure("require_email", ok, TextError::invalid_email)
    }

    /// URL check using the configured strictness
    pub fn require_url(self) -> Self {
        let strict = self.config.strict_url;
        self.require_url_strict(strict)
    }

    pub fn require_url_strict(self, strict: bool) -> Self {
        let ok = validate::is_url(&self.value, strict);
        self.ensure("require_url", ok, TextError::invalid_url)
    }

    pub fn require_uuid(self) -> Self {
        let ok = validate::is_uuid(&self.value);
        self.ensure("require_uuid", ok, TextError::invalid_uuid)
    }

    /// Length within `[min, max]`, measured per the configured unit.
    /// `min > max` latches `InvalidLengthRange`.
    pub fn require_length(self, min: usize, max: usize) -> Self {
        let outcome = validate::check_length_in(&self.value, min, max, self.config.length_unit);
        self.check("require_length", outcome)
    }

    pub fn require_alphanumeric(self) -> Self {
        let ok = validate::is_alphanumeric(&self.value);
        self.ensure("require_alphanumeric", ok, TextError::not_alphanumeric)
    }

    pub fn require_alpha(self) -> Self {
        let ok = validate::is_alpha(&self.value);
        self.ensure("require_alpha", ok, TextError::not_alpha)
    }

    pub fn require_domain(self) -> Self {
        let ok = validate::is_domain(&self.value);
        self.ensure("require_domain", ok, TextError::invalid_domain)
    }

    /// Value must match a built-in rule set
    pub fn require_basic<G>(self, group: &G, strict: bool) -> Self
    where
        G: BasicPatternGroup + ?Sized,
    {
        let ok = group.matches(&self.value, strict);
        let rule = group.meta().name;
        self.ensure("require_basic", ok, |v| TextError::pattern_mismatch(rule, v))
    }

    /// Value must match the rule registered as `name`.
    ///
    /// An unregistered name latches `PatternNotFound`, a mismatch latches
    /// `PatternMismatch`.
    pub fn require_pattern<G>(self, group: &G, name: &str) -> Self
    where
        G: ComplexPatternGroup + ?Sized,
    {
        let outcome = match group.matches(&self.value, name) {
            Ok(true) => Ok(()),
            Ok(false) => Err(TextError::pattern_mismatch(name, &self.value)),
            Err(err) => Err(err),
        };
        self.check("require_pattern", outcome)
    }

    /// Caller-supplied predicate; `err` is latched when it returns false
    pub fn require(self, predicate: impl FnOnce(&str) -> bool, err: TextError) -> Self {
        let ok = predicate(&self.value);
        self.ensure("require", ok, |_| err)
    }

    // ========== Terminals ==========

    /// Current value, whatever the error state
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&TextError> {
        self.err.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// The value, or a panic carrying the first latched error.
    ///
    /// For call sites with no recovery path; prefer [`Pipeline::result`] or
    /// [`Pipeline::into_result`] everywhere else.
    #[track_caller]
    pub fn must(self) -> String {
        match self.err {
            Some(err) => panic!("{}", err),
            None => self.value,
        }
    }

    /// Value and latched error together
    pub fn result(self) -> (String, Option<TextError>) {
        (self.value, self.err)
    }

    pub fn into_result(self) -> Result<String, TextError> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Pipeline {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for Pipeline {
    fn from(input: String) -> Self {
        Self::new(input)
    }
}
