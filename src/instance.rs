//! Validator instances
//!
//! A [`Dataval`] bundles a form identifier, parsed rules and validator
//! overrides. It is immutable: [`Dataval::add`] returns a new instance and
//! leaves the receiver as it was, so a clone handed to another task keeps a
//! stable rule and validator set.

use crate::engine;
use crate::rules::{parse_rule_map, serialize_rule_map, FieldRules, RuleStrings};
use crate::validators::{
    async_validator_fn, validator_fn, DatavalError, ValidationContext, ValidationResult,
    Validator, ValidatorRegistry, Validators,
};
use crate::value::ValidationInput;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Construction input for a [`Dataval`]; every part is optional
#[derive(Clone, Default)]
pub struct DatavalConfig {
    /// Form identifier handed to every validator
    pub form: Option<String>,

    /// Raw rule string per field key
    pub rules: RuleStrings,

    /// Validators that take precedence over built-ins of the same name
    pub validators: Validators,
}

impl DatavalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn rule(mut self, key: impl Into<String>, rules: impl Into<String>) -> Self {
        self.rules.insert(key.into(), rules.into());
        self
    }

    pub fn validator(mut self, name: impl Into<String>, validator: Arc<dyn Validator>) -> Self {
        self.validators.insert(name.into(), validator);
        self
    }
}

impl std::fmt::Debug for DatavalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut validators: Vec<&String> = self.validators.keys().collect();
        validators.sort();
        f.debug_struct("DatavalConfig")
            .field("form", &self.form)
            .field("rules", &self.rules)
            .field("validators", &validators)
            .finish()
    }
}

/// An immutable, shareable validator instance
#[derive(Clone, Debug, Default)]
pub struct Dataval {
    form: Option<String>,
    rules: Arc<FieldRules>,
    registry: ValidatorRegistry,
}

impl Dataval {
    /// Build an instance, parsing every rule string once
    pub fn new(config: DatavalConfig) -> Self {
        let rules = parse_rule_map(&config.rules);
        debug!(
            form = ?config.form,
            fields = rules.len(),
            overrides = config.validators.len(),
            "Created validator instance"
        );

        Self {
            form: config.form,
            rules: Arc::new(rules),
            registry: ValidatorRegistry::from_overrides(config.validators),
        }
    }

    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }

    /// Parsed rules per field
    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    /// Overrides as supplied at construction or via [`Dataval::add`]
    pub fn validators(&self) -> &Validators {
        self.registry.overrides()
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Return a new instance with one more validator override
    ///
    /// Rules carry over through a serialize-then-parse round trip, which is
    /// lossless. `self` is not modified.
    pub fn add(&self, name: &str, validator: Arc<dyn Validator>) -> Self {
        let registry = self.registry.with(name, validator);
        let rules = parse_rule_map(&serialize_rule_map(&self.rules));

        Self {
            form: self.form.clone(),
            rules: Arc::new(rules),
            registry,
        }
    }

    /// [`Dataval::add`] for a synchronous predicate closure
    pub fn add_fn<F>(&self, name: &str, f: F) -> Self
    where
        F: Fn(&ValidationContext) -> bool + Send + Sync + 'static,
    {
        self.add(name, validator_fn(f))
    }

    /// [`Dataval::add`] for an asynchronous predicate closure
    pub fn add_async_fn<F, Fut>(&self, name: &str, f: F) -> Self
    where
        F: Fn(ValidationContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.add(name, async_validator_fn(f))
    }

    /// Validate submitted values
    ///
    /// Fails with [`DatavalError::UnknownValidator`] if a submitted field has a
    /// rule that resolves to no validator; no partial result is returned.
    pub async fn validate(&self, values: ValidationInput) -> Result<ValidationResult, DatavalError> {
        engine::validate(self.form(), &self.rules, &self.registry, values).await
    }

    /// [`Dataval::validate`] driven to completion on the current thread
    ///
    /// Must not be called from inside an async runtime's worker; validators
    /// that depend on a runtime's timers or I/O need [`Dataval::validate`].
    pub fn validate_blocking(
        &self,
        values: ValidationInput,
    ) -> Result<ValidationResult, DatavalError> {
        futures::executor::block_on(self.validate(values))
    }

    /// `(key, rule)` pairs whose rule name resolves to no validator
    pub fn unresolved_rules(&self) -> Vec<(String, String)> {
        self.rules
            .iter()
            .flat_map(|(key, descriptors)| {
                descriptors
                    .iter()
                    .filter(|descriptor| !self.registry.contains(&descriptor.name))
                    .map(move |descriptor| (key.clone(), descriptor.name.clone()))
            })
            .collect()
    }
}

impl From<DatavalConfig> for Dataval {
    fn from(config: DatavalConfig) -> Self {
        Self::new(config)
    }
}
