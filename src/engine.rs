//! Validation engine
//!
//! One call runs in two phases:
//!
//! 1. **Plan**: for every submitted key, resolve each of its rules against the
//!    registry. An unresolved rule name aborts the whole call before any
//!    validator runs.
//! 2. **Run**: every check of every field is polled concurrently; the call
//!    completes once all of them have settled, then failures are aggregated
//!    per field in rule declaration order.
//!
//! Keys without rules (or with an empty rule list) are skipped, and fields
//! that have rules but were not submitted are never checked.

use crate::rules::FieldRules;
use crate::validators::{
    DatavalError, FieldErrors, ValidationContext, ValidationResult, Validator, ValidatorRegistry,
};
use crate::value::ValidationInput;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// A resolved rule ready to run
struct Check {
    validator: Arc<dyn Validator>,
    ctx: ValidationContext,
}

/// All checks for one submitted field
struct FieldPlan {
    key: String,
    checks: Vec<Check>,
}

/// Validate `values` against `rules`, resolving rule names through `registry`
#[tracing::instrument(skip_all, fields(form = ?form, fields = values.len()), level = "debug")]
pub async fn validate(
    form: Option<&str>,
    rules: &FieldRules,
    registry: &ValidatorRegistry,
    values: ValidationInput,
) -> Result<ValidationResult, DatavalError> {
    let values = Arc::new(values);
    let plan = plan(form, rules, registry, &values)?;

    if plan.is_empty() {
        debug!("No submitted field has rules");
        return Ok(ValidationResult::ok());
    }

    let fields = join_all(plan.into_iter().map(run_field)).await;
    let result = ValidationResult::from_fields(fields);

    debug!(valid = result.valid, failed_fields = result.errors.len(), "Validation finished");
    Ok(result)
}

/// Resolve every rule of every submitted field
fn plan(
    form: Option<&str>,
    rules: &FieldRules,
    registry: &ValidatorRegistry,
    values: &Arc<ValidationInput>,
) -> Result<Vec<FieldPlan>, DatavalError> {
    let mut plan = Vec::new();

    for (key, value) in values.iter() {
        let descriptors = match rules.get(key) {
            Some(descriptors) if !descriptors.is_empty() => descriptors,
            _ => continue,
        };

        let mut checks = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let validator = registry.resolve(&descriptor.name).ok_or_else(|| {
                warn!("❌ No validator registered for rule '{}' on field '{}'", descriptor.name, key);
                DatavalError::UnknownValidator {
                    key: key.clone(),
                    rule: descriptor.name.clone(),
                }
            })?;

            checks.push(Check {
                validator,
                ctx: ValidationContext {
                    key: key.clone(),
                    value: value.clone(),
                    values: Arc::clone(values),
                    form: form.map(str::to_string),
                    rule: descriptor.name.clone(),
                    args: descriptor.args.clone(),
                },
            });
        }

        plan.push(FieldPlan {
            key: key.clone(),
            checks,
        });
    }

    Ok(plan)
}

/// Run one field's checks concurrently, keeping failures in rule order
async fn run_field(field: FieldPlan) -> FieldErrors {
    let outcomes = join_all(
        field
            .checks
            .iter()
            .map(|check| check.validator.validate(&check.ctx)),
    )
    .await;

    let message: Vec<String> = field
        .checks
        .iter()
        .zip(outcomes)
        .filter(|(_, passed)| !passed)
        .map(|(check, _)| check.ctx.rule.clone())
        .collect();

    debug!(key = %field.key, failed = ?message, "Field checked");

    FieldErrors {
        key: field.key,
        message,
    }
}
