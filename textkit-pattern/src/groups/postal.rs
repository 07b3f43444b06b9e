//! Postal code matcher backed by a registry, one rule per country

use crate::{ComplexPatternGroup, GroupMeta, SharedRegistry};
use textkit_core::TextError;

/// Default rules, keyed by lowercase ISO 3166 alpha-2 code (`uk` for GB)
pub const DEFAULT_POSTAL_PATTERNS: [(&str, &str); 8] = [
    ("us", r"^\d{5}(?:-\d{4})?$"),
    ("ca", r"(?i)^[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d$"),
    ("uk", r"(?i)^[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}$"),
    ("de", r"^\d{5}$"),
    ("fr", r"^(?:0[1-9]|[1-8]\d|9[0-8])\d{3}$"),
    ("nl", r"(?i)^[1-9]\d{3} ?[A-Z]{2}$"),
    ("jp", r"^\d{3}-?\d{4}$"),
    ("in", r"^[1-9]\d{5}$"),
];

pub struct PostalCodePatterns {
    registry: SharedRegistry,
}

static POSTAL_EXAMPLES: [&str; 3] = [
    "matches(\"90210-1234\", \"us\") → true",
    "matches(\"SW1A 1AA\", \"uk\") → true",
    "matches(\"12345\", \"zz\") → PATTERN_NOT_FOUND",
];

impl PostalCodePatterns {
    /// Matcher over a private registry seeded with the default countries
    pub fn new() -> Self {
        let registry = SharedRegistry::new();
        Self::register_defaults(&registry);
        Self { registry }
    }

    /// Matcher over a caller-owned registry, used as-is
    pub fn with_registry(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Add the default country rules to `registry`
    pub fn register_defaults(registry: &SharedRegistry) {
        registry.update(|r| {
            for (name, source) in DEFAULT_POSTAL_PATTERNS {
                if let Err(e) = r.add_pattern(name, source) {
                    tracing::error!(name, error = %e, "built-in postal pattern failed to compile");
                }
            }
        });
    }

    /// Register (or replace) the rule for one country
    pub fn register(&self, country: &str, source: &str) -> Result<(), TextError> {
        self.registry.add_pattern(country.to_lowercase(), source)
    }
}

impl Default for PostalCodePatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexPatternGroup for PostalCodePatterns {
    fn meta(&self) -> GroupMeta {
        GroupMeta {
            name: "postal_code",
            description: "Postal codes by country",
            examples: &POSTAL_EXAMPLES,
        }
    }

    fn registry(&self) -> &SharedRegistry {
        &self.registry
    }
}
