//! Validation context - data passed to validators

use crate::value::{ValidationInput, Value};
use std::sync::Arc;

/// Context provided to a validator for one rule on one field
///
/// Besides the field's own value it carries the complete input batch, so a
/// validator can consult sibling fields (e.g. "required unless `phone` is set").
#[derive(Clone, Debug)]
pub struct ValidationContext {
    /// Field key being validated
    pub key: String,

    /// Submitted value of the field
    pub value: Value,

    /// Every submitted field, shared read-only across all checks of one call
    pub values: Arc<ValidationInput>,

    /// Form identifier of the instance, if any
    pub form: Option<String>,

    /// Name of the rule being evaluated
    pub rule: String,

    /// Positional arguments of the rule clause
    pub args: Vec<String>,
}

impl ValidationContext {
    /// Positional argument, if present
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Value of another submitted field
    pub fn sibling(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Check if another field was submitted
    pub fn has_sibling(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_lookup() {
        let mut values = ValidationInput::new();
        values.insert("email".to_string(), Value::from("a@b.c"));
        values.insert("phone".to_string(), Value::from(""));

        let ctx = ValidationContext {
            key: "email".to_string(),
            value: Value::from("a@b.c"),
            values: Arc::new(values),
            form: Some("signup".to_string()),
            rule: "requiredIfNot".to_string(),
            args: vec!["phone".to_string()],
        };

        assert_eq!(ctx.arg(0), Some("phone"));
        assert_eq!(ctx.arg(1), None);
        assert!(ctx.has_sibling("phone"));
        assert_eq!(ctx.sibling("phone"), Some(&Value::from("")));
        assert!(!ctx.has_sibling("fax"));
    }
}
