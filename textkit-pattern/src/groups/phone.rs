//! Phone number matcher backed by a registry

use crate::{ComplexPatternGroup, GroupMeta, SharedRegistry};

pub const DEFAULT_PHONE_PATTERNS: [(&str, &str); 4] = [
    ("e164", r"^\+[1-9]\d{1,14}$"),
    ("us", r"^(?:\+?1[-. ]?)?\(?[2-9]\d{2}\)?[-. ]?\d{3}[-. ]?\d{4}$"),
    ("uk", r"^(?:\+44 ?|0)(?:\d ?){9,10}$"),
    // Loose catch-all: +1-555-123-4567, (555) 123-4567, 555.123.4567
    ("intl", r"^[+]?[\d\s\-().]{7,20}$"),
];

pub struct PhonePatterns {
    registry: SharedRegistry,
}

static PHONE_EXAMPLES: [&str; 2] = [
    "matches(\"+14155552671\", \"e164\") → true",
    "matches(\"(415) 555-2671\", \"us\") → true",
];

impl PhonePatterns {
    pub fn new() -> Self {
        let registry = SharedRegistry::new();
        Self::register_defaults(&registry);
        Self { registry }
    }

    pub fn with_registry(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub fn register_defaults(registry: &SharedRegistry) {
        registry.update(|r| {
            for (name, source) in DEFAULT_PHONE_PATTERNS {
                if let Err(e) = r.add_pattern(name, source) {
                    tracing::error!(name, error = %e, "built-in phone pattern failed to compile");
                }
            }
        });
    }
}

impl Default for PhonePatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexPatternGroup for PhonePatterns {
    fn meta(&self) -> GroupMeta {
        GroupMeta {
            name: "phone",
            description: "Phone numbers by numbering plan",
            examples: &PHONE_EXAMPLES,
        }
    }

    fn registry(&self) -> &SharedRegistry {
        &self.registry
    }
}
