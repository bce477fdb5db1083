//! Validator registry - rule name to validator resolution

use super::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Caller-supplied validators by rule name
pub type Validators = HashMap<String, Arc<dyn Validator>>;

/// Two-tier lookup of validators by rule name
///
/// Instance overrides are consulted first, then the process-wide built-in
/// table. The override table is never mutated after construction:
/// [`ValidatorRegistry::with`] produces a new registry, so any clone held
/// elsewhere keeps seeing the same set.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    /// Instance-level overrides
    overrides: Arc<Validators>,
}

impl ValidatorRegistry {
    /// Create a registry with built-ins only
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from caller-supplied overrides
    pub fn from_overrides(overrides: Validators) -> Self {
        debug!("Creating validator registry with {} override(s)", overrides.len());
        Self {
            overrides: Arc::new(overrides),
        }
    }

    /// Return a new registry with one more override; `self` is untouched
    ///
    /// The new entry wins over an earlier override of the same name.
    pub fn with(&self, name: &str, validator: Arc<dyn Validator>) -> Self {
        debug!("Registering validator: {} ({})", name, validator.validator_type());
        let mut overrides = (*self.overrides).clone();
        overrides.insert(name.to_string(), validator);
        Self {
            overrides: Arc::new(overrides),
        }
    }

    /// Resolve a rule name: override first, then built-in
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Validator>> {
        if let Some(validator) = self.overrides.get(name) {
            trace!("Resolved '{}' to override", name);
            return Some(Arc::clone(validator));
        }
        builtin::get(name)
    }

    /// Check if a rule name resolves
    pub fn contains(&self, name: &str) -> bool {
        self.overrides.contains_key(name) || builtin::get(name).is_some()
    }

    /// The overrides as supplied
    pub fn overrides(&self) -> &Validators {
        &self.overrides
    }

    /// Get all override names
    pub fn override_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.overrides.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all built-in names
    pub fn builtin_names() -> Vec<&'static str> {
        builtin::names()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("overrides", &self.override_names())
            .finish()
    }
}
