//! Pattern Registry
//!
//! `PatternRegistry` is a plain map with no internal locking: mutation takes
//! `&mut self`, so a single owner (or a caller-held lock) serializes writes.
//! `SharedRegistry` is the lock boundary used when several complex matchers
//! reference the same registry.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use textkit_core::{PatternError, TextError};
use textkit_text::helpers::get_regex;
use tracing::{debug, warn};

/// Named store of compiled matching rules
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    patterns: HashMap<String, Regex>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }

    /// Build a registry from a JSON object mapping names to regex sources
    pub fn from_json(json: &str) -> Result<Self, TextError> {
        let sources: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| PatternError::InvalidSource(e.to_string()))?;

        let mut registry = Self::new();
        for (name, source) in &sources {
            registry.add_pattern(name, source)?;
        }
        Ok(registry)
    }

    pub fn with_pattern(mut self, name: impl Into<String>, rule: Regex) -> Self {
        self.add(name, rule);
        self
    }

    /// Insert `rule` under `name`, replacing any previous rule.
    ///
    /// Empty names are ignored so that every stored key stays non-empty.
    pub fn add(&mut self, name: impl Into<String>, rule: Regex) {
        let name = name.into();
        if name.is_empty() {
            warn!(pattern = rule.as_str(), "ignoring pattern registered under an empty name");
            return;
        }
        debug!(name = %name, pattern = rule.as_str(), "registering pattern");
        if self.patterns.insert(name, rule).is_some() {
            debug!("previous pattern overwritten");
        }
    }

    /// Compile `source` and add it under `name`
    pub fn add_pattern(&mut self, name: impl Into<String>, source: &str) -> Result<(), TextError> {
        let rule = get_regex(source)?;
        self.add(name, rule);
        Ok(())
    }

    /// Remove `name`; returns whether an entry existed
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.patterns.remove(name).is_some();
        if removed {
            debug!(name, "removed pattern");
        }
        removed
    }

    pub fn get(&self, name: &str) -> Result<&Regex, TextError> {
        self.patterns
            .get(name)
            .ok_or_else(|| PatternError::NotFound(name.to_string()).into())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    /// Registered names, in no particular order
    pub fn names(&self) -> Vec<String> {
        self.patterns.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// A `PatternRegistry` behind a read-write lock, cheap to clone and share
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<PatternRegistry>>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::from_registry(PatternRegistry::new())
    }

    pub fn from_registry(registry: PatternRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    // The map holds no cross-entry invariant, so a poisoned lock is still usable
    fn read(&self) -> RwLockReadGuard<'_, PatternRegistry> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, PatternRegistry> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, name: impl Into<String>, rule: Regex) {
        self.write().add(name, rule);
    }

    pub fn add_pattern(&self, name: impl Into<String>, source: &str) -> Result<(), TextError> {
        self.write().add_pattern(name, source)
    }

    pub fn remove(&self, name: &str) -> bool {
        self.write().remove(name)
    }

    /// Clone of the rule under `name`; `Regex` clones share the compiled program
    pub fn get(&self, name: &str) -> Result<Regex, TextError> {
        self.read().get(name).cloned()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.read().exists(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.read().names()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Run `f` with the write lock held, for batches of changes
    pub fn update<R>(&self, f: impl FnOnce(&mut PatternRegistry) -> R) -> R {
        f(&mut self.write())
    }
}

impl From<PatternRegistry> for SharedRegistry {
    fn from(registry: PatternRegistry) -> Self {
        Self::from_registry(registry)
    }
}
