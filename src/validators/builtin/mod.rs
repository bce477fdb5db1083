//! Built-in validators
//!
//! Pure predicates over a single field value. Composite checks (`between`,
//! `isAfter`, ...) apply their type check first and return `false` when it
//! fails; no built-in ever panics on odd input or arguments.

mod date;
mod numeric;
mod presence;
mod types;

use crate::validators::*;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Predicate signature shared by every built-in
pub type Predicate = fn(&ValidationContext) -> bool;

/// A named built-in predicate
pub struct BuiltinValidator {
    name: &'static str,
    predicate: Predicate,
}

impl BuiltinValidator {
    pub const fn new(name: &'static str, predicate: Predicate) -> Self {
        Self { name, predicate }
    }

    pub fn name(&self) -> &str {
        self.name
    }
}

#[async_trait]
impl Validator for BuiltinValidator {
    async fn validate(&self, ctx: &ValidationContext) -> bool {
        (self.predicate)(ctx)
    }

    fn validator_type(&self) -> ValidatorType {
        ValidatorType::Builtin
    }
}

const BUILTINS: &[(&str, Predicate)] = &[
    ("required", presence::required),
    ("length", presence::length),
    ("isEmpty", presence::is_empty),
    ("isString", types::is_string),
    ("isBoolean", types::is_boolean),
    ("isNumber", types::is_number),
    ("isTrue", types::is_true),
    ("isFalse", types::is_false),
    ("max", numeric::max),
    ("min", numeric::min),
    ("between", numeric::between),
    ("isDate", date::is_date),
    ("isAfter", date::is_after),
    ("isBefore", date::is_before),
];

static REGISTRY: Lazy<HashMap<&'static str, Arc<dyn Validator>>> = Lazy::new(|| {
    let table: HashMap<&'static str, Arc<dyn Validator>> = BUILTINS
        .iter()
        .map(|&(name, predicate)| {
            let validator: Arc<dyn Validator> = Arc::new(BuiltinValidator::new(name, predicate));
            (name, validator)
        })
        .collect();
    info!("🔧 Registered {} built-in validators", table.len());
    table
});

/// Look up a built-in by rule name
pub fn get(name: &str) -> Option<Arc<dyn Validator>> {
    REGISTRY.get(name).cloned()
}

/// Names of all built-ins, in declaration order
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Integer-prefix parse: leading whitespace, optional sign, then digits.
///
/// `"10px"` reads as 10; `"px"` and `""` read as nothing.
pub(crate) fn parse_int(arg: &str) -> Option<i64> {
    let trimmed = arg.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Whole-string numeric parse for bound arguments
pub(crate) fn parse_number(arg: &str) -> Option<f64> {
    arg.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}
