//! Textkit Pattern System
//!
//! Provides the named-pattern store and the two matcher contracts:
//! - `PatternRegistry` / `SharedRegistry`: compiled rules keyed by name
//! - `BasicPatternGroup`: fixed built-in rule with strict/lenient modes
//! - `ComplexPatternGroup`: rules resolved by name through a registry

mod traits;
mod registry;
pub mod groups;

pub use traits::{BasicPatternGroup, ComplexPatternGroup, GroupMeta};
pub use registry::{PatternRegistry, SharedRegistry};
pub use groups::{EmailPatterns, NamedPatterns, PhonePatterns, PostalCodePatterns, UrlPatterns, UuidPatterns};

/// Re-export core types for rule-set authors
pub mod prelude {
    pub use crate::{
        BasicPatternGroup, ComplexPatternGroup, GroupMeta,
        PatternRegistry, SharedRegistry,
    };
    pub use textkit_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use textkit_core::ErrorKind;

    /// A third-party rule set built only on the public traits
    struct HexColors {
        registry: SharedRegistry,
    }

    impl ComplexPatternGroup for HexColors {
        fn meta(&self) -> GroupMeta {
            GroupMeta { name: "hex_color", description: "CSS hex colors", examples: &[] }
        }

        fn registry(&self) -> &SharedRegistry {
            &self.registry
        }
    }

    #[test]
    fn test_digits_scenario() {
        let registry = SharedRegistry::new();
        registry.add("digits", Regex::new(r"^[0-9]+$").unwrap());
        let group = HexColors { registry };

        assert_eq!(group.matches("12345", "digits").unwrap(), true);
        assert_eq!(group.matches("12a45", "digits").unwrap(), false);
        assert_eq!(
            group.matches("x", "missing").unwrap_err().kind(),
            ErrorKind::PatternNotFound
        );
    }

    #[test]
    fn test_extract_agrees_with_extract_all() {
        let registry = SharedRegistry::new();
        registry.add_pattern("hex", r"#[0-9a-fA-F]{6}\b").unwrap();
        let group = HexColors { registry };

        let text = "fg #ff0000 bg #00FF00 border #abc";
        let all = group.extract_all(text, "hex").unwrap();
        assert_eq!(all, vec!["#ff0000", "#00FF00"]);
        assert_eq!(group.extract(text, "hex").unwrap(), all[0]);
        assert_eq!(group.extract("none", "hex").unwrap(), "");
    }
}
