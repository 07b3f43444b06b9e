//! Textkit - string validation, sanitization and transformation
//!
//! The `Pipeline` builder chains manipulation and validation steps over one
//! string with first-error-wins semantics. Named patterns live in a
//! `SharedRegistry` and are applied through `ComplexPatternGroup` matchers.

pub mod config;
pub mod pipeline;

pub use config::PipelineConfig;
pub use pipeline::Pipeline;

pub use textkit_core::{codes, ErrorContext, ErrorKind, PatternError, TextError};
pub use textkit_pattern::{
    groups, BasicPatternGroup, ComplexPatternGroup, EmailPatterns, GroupMeta, NamedPatterns,
    PatternRegistry, PhonePatterns, PostalCodePatterns, SharedRegistry, UrlPatterns, UuidPatterns,
};
pub use textkit_text as text;

/// Entry point holding a configuration and a registry of named patterns
pub struct Textkit {
    config: PipelineConfig,
    patterns: NamedPatterns,
}

impl Textkit {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            config: PipelineConfig::default(),
            patterns: NamedPatterns::new(registry),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a named pattern, compiling `source`
    pub fn register(&self, name: &str, source: &str) -> Result<(), TextError> {
        self.patterns.registry().add_pattern(name, source)
    }

    pub fn registry(&self) -> &SharedRegistry {
        self.patterns.registry()
    }

    /// Matcher over this toolkit's registry
    pub fn patterns(&self) -> &NamedPatterns {
        &self.patterns
    }

    /// Start a pipeline using this toolkit's configuration
    pub fn pipeline(&self, input: impl Into<String>) -> Pipeline {
        Pipeline::with_config(input, self.config.clone())
    }

    /// Shorthand for `pipeline(input).require_pattern(patterns(), name)`
    pub fn check(&self, input: impl Into<String>, name: &str) -> Pipeline {
        self.pipeline(input).require_pattern(&self.patterns, name)
    }
}

impl Default for Textkit {
    fn default() -> Self {
        Self::new(SharedRegistry::new())
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Pipeline, PipelineConfig, Textkit};
    pub use textkit_pattern::prelude::*;
}
