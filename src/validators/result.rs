//! Validation result types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Aggregate outcome of one `validate` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff no field has a failed rule
    pub valid: bool,

    /// Failing fields only, in input order
    pub errors: Vec<FieldErrors>,
}

/// Failed rule names for one field, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub key: String,
    pub message: Vec<String>,
}

/// Error type for a `validate` call that could not complete
///
/// A rule that evaluates to false is not an error; it is recorded in
/// [`ValidationResult::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatavalError {
    /// A rule names a validator that is neither overridden nor built in
    #[error("Validator {rule} is not registered but a rule on field {key} requires it.")]
    UnknownValidator { key: String, rule: String },

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Submitted values could not be decoded
    #[error("Input error: {0}")]
    Input(String),
}

impl ValidationResult {
    /// Result with no failures
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Aggregate per-field outcomes, dropping fields without failures
    pub fn from_fields(fields: impl IntoIterator<Item = FieldErrors>) -> Self {
        let errors: Vec<FieldErrors> = fields
            .into_iter()
            .filter(|field| !field.message.is_empty())
            .collect();

        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Failed rule names for a field, if it failed
    pub fn errors_for(&self, key: &str) -> Option<&[String]> {
        self.errors
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.message.as_slice())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_drops_passing_fields() {
        let result = ValidationResult::from_fields(vec![
            FieldErrors {
                key: "a".to_string(),
                message: vec![],
            },
            FieldErrors {
                key: "b".to_string(),
                message: vec!["required".to_string()],
            },
        ]);

        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors_for("b"), Some(&["required".to_string()][..]));
        assert_eq!(result.errors_for("a"), None);
    }

    #[test]
    fn test_empty_is_valid() {
        assert_eq!(ValidationResult::from_fields(vec![]), ValidationResult::ok());
    }

    #[test]
    fn test_serialized_shape() {
        let result = ValidationResult::from_fields(vec![FieldErrors {
            key: "k".to_string(),
            message: vec!["isNumber".to_string(), "required".to_string()],
        }]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "errors": [{ "key": "k", "message": ["isNumber", "required"] }]
            })
        );
    }

    #[test]
    fn test_unknown_validator_message() {
        let err = DatavalError::UnknownValidator {
            key: "nationalCode".to_string(),
            rule: "unique".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Validator unique is not registered but a rule on field nationalCode requires it."
        );
    }
}
