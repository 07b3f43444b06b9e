//! General-purpose complex matcher with no built-in rules

use crate::{ComplexPatternGroup, GroupMeta, SharedRegistry};

/// Matches against whatever the caller registers
#[derive(Debug, Clone, Default)]
pub struct NamedPatterns {
    registry: SharedRegistry,
}

impl NamedPatterns {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }
}

impl ComplexPatternGroup for NamedPatterns {
    fn meta(&self) -> GroupMeta {
        GroupMeta {
            name: "named",
            description: "Caller-registered patterns",
            examples: &[],
        }
    }

    fn registry(&self) -> &SharedRegistry {
        &self.registry
    }
}
