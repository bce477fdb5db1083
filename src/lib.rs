//! # Dataval
//!
//! Declarative field validation. Each field gets a compact rule string such as
//! `required|length:10:10`; submitted values are checked against those rules
//! and every failing rule is reported by name, per field.
//!
//! ## Features
//! - `|`/`:` rule grammar parsed once per instance
//! - Built-in validators (`required`, `length`, `isNumber`, `between`, `isDate`, ...)
//! - Custom validators, sync or async, that may read sibling fields
//! - Concurrent evaluation of every rule of every submitted field
//! - Immutable instances: `add` returns a new instance
//!
//! ```rust
//! use dataval::{Dataval, DatavalConfig, ValidationInput, Value};
//!
//! let taken = vec!["1234567890".to_string()];
//! let dataval = Dataval::new(
//!     DatavalConfig::new()
//!         .form("auth")
//!         .rule("nationalCode", "required|length:10:10|unique"),
//! )
//! .add_fn("unique", move |ctx| {
//!     ctx.value.as_str().map(|v| !taken.iter().any(|t| t == v)).unwrap_or(false)
//! });
//!
//! let mut values = ValidationInput::new();
//! values.insert("nationalCode".to_string(), Value::from("1234567890"));
//!
//! let result = dataval.validate_blocking(values).unwrap();
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].message, vec!["unique"]);
//! ```

pub mod config;
pub mod engine;
pub mod instance;
pub mod rules;
pub mod validators;
pub mod value;

pub use config::Config;
pub use instance::{Dataval, DatavalConfig};
pub use rules::{FieldRules, RuleDescriptor, RuleStrings};
pub use validators::{
    async_validator_fn, validator_fn, DatavalError, FieldErrors, ValidationContext,
    ValidationResult, Validator, ValidatorRegistry, Validators,
};
pub use value::{ValidationInput, Value};
