//! Core validator traits and interfaces
//!
//! This module defines the single extension point of the engine: anything
//! implementing [`Validator`] can be registered under a rule name.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;

use super::ValidationContext;

/// The core validator trait that all validators must implement.
///
/// Validators can be synchronous (for simple checks) or asynchronous
/// (for lookups against a database or remote service). They must suspend
/// cooperatively rather than block; the engine applies no timeout, so a
/// validator that never completes stalls the whole `validate` call.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Decide whether the value in `ctx` passes this rule.
    ///
    /// Returning `false` is an ordinary "invalid" outcome and is reported by
    /// rule name in the validation result.
    async fn validate(&self, ctx: &ValidationContext) -> bool;

    /// Get validator type (builtin or custom)
    fn validator_type(&self) -> ValidatorType {
        ValidatorType::Custom
    }
}

/// Where a validator came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorType {
    Builtin,
    Custom,
}

impl std::fmt::Display for ValidatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidatorType::Builtin => write!(f, "builtin"),
            ValidatorType::Custom => write!(f, "custom"),
        }
    }
}

/// Adapter for a synchronous predicate closure
pub struct FnValidator<F>(F);

#[async_trait]
impl<F> Validator for FnValidator<F>
where
    F: Fn(&ValidationContext) -> bool + Send + Sync + 'static,
{
    async fn validate(&self, ctx: &ValidationContext) -> bool {
        (self.0)(ctx)
    }
}

/// Adapter for a closure returning a future.
///
/// The closure receives an owned copy of the context so the returned future
/// is free of borrows.
pub struct AsyncFnValidator<F>(F);

#[async_trait]
impl<F, Fut> Validator for AsyncFnValidator<F>
where
    F: Fn(ValidationContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    async fn validate(&self, ctx: &ValidationContext) -> bool {
        (self.0)(ctx.clone()).await
    }
}

/// Wrap a synchronous predicate as a shareable validator
pub fn validator_fn<F>(f: F) -> Arc<dyn Validator>
where
    F: Fn(&ValidationContext) -> bool + Send + Sync + 'static,
{
    Arc::new(FnValidator(f))
}

/// Wrap an asynchronous predicate as a shareable validator
pub fn async_validator_fn<F, Fut>(f: F) -> Arc<dyn Validator>
where
    F: Fn(ValidationContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    Arc::new(AsyncFnValidator(f))
}
