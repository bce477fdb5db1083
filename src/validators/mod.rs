//! Validator framework
//!
//! Rule names resolve to validators through a two-tier registry: overrides
//! supplied by the caller are consulted first, then the fixed built-in table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       Validator Registry                │
//! ├─────────────────────────────────────────┤
//! │  • Instance overrides (caller-supplied) │
//! │  • Copy-on-write on `with`              │
//! │  • Resolve by rule name                 │
//! └────────┬────────────────────────────────┘
//!          │ fallback
//!          └──> Built-in Validators (required, length, isNumber, ...)
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use dataval::validators::*;
//!
//! let registry = ValidatorRegistry::new()
//!     .with("even", validator_fn(|ctx| {
//!         ctx.value.as_number().map(|n| n % 2.0 == 0.0).unwrap_or(false)
//!     }));
//!
//! assert!(registry.resolve("even").is_some());
//! assert!(registry.resolve("required").is_some());
//! assert!(registry.resolve("unique").is_none());
//! ```

pub mod builtin;
pub mod context;
pub mod registry;
pub mod result;
pub mod traits;

// Re-export commonly used types
pub use context::ValidationContext;
pub use registry::{ValidatorRegistry, Validators};
pub use result::{DatavalError, FieldErrors, ValidationResult};
pub use traits::{async_validator_fn, validator_fn, AsyncFnValidator, FnValidator, Validator, ValidatorType};
