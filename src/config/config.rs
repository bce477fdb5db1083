//! TOML configuration for a validator instance.
//!
//! ```toml
//! form = "auth"
//!
//! [rules]
//! nationalCode = "required|length:10:10"
//! birthDate = "isDate|isBefore:1546300800000"
//! ```
//!
//! Both keys are optional; a file without `[rules]` yields an instance that
//! accepts everything.

use crate::instance::{Dataval, DatavalConfig};
use crate::rules::RuleStrings;
use crate::validators::DatavalError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Form identifier passed to validators
    #[serde(default)]
    pub form: Option<String>,

    /// Rule string per field, in file order
    #[serde(default)]
    pub rules: RuleStrings,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatavalError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| DatavalError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = contents.parse()?;
        info!(
            "📄 Loaded {} field rule(s) from {}",
            config.rules.len(),
            path.display()
        );
        Ok(config)
    }

    /// Construction input for an instance built from this file
    pub fn to_instance_config(&self) -> DatavalConfig {
        DatavalConfig {
            form: self.form.clone(),
            rules: self.rules.clone(),
            validators: Default::default(),
        }
    }

    /// Build a validator instance with no custom validators
    pub fn into_instance(self) -> Dataval {
        Dataval::new(self.to_instance_config())
    }
}

impl FromStr for Config {
    type Err = DatavalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| DatavalError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
form = "auth"

[rules]
nationalCode = "required|length:10:10"
email = "required|isString"
age = "isNumber|between:18:99"
"#;

        let config: Config = toml_str.parse().unwrap();
        assert_eq!(config.form.as_deref(), Some("auth"));
        assert_eq!(config.rules.len(), 3);
        assert_eq!(config.rules["nationalCode"], "required|length:10:10");

        let keys: Vec<&str> = config.rules.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["nationalCode", "email", "age"]);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = "".parse().unwrap();
        assert!(config.form.is_none());
        assert!(config.rules.is_empty());

        let dataval = config.into_instance();
        assert!(dataval.rules().is_empty());
    }

    #[test]
    fn test_rejects_non_string_rules() {
        let err = "[rules]\nage = 5\n".parse::<Config>().unwrap_err();
        assert!(matches!(err, DatavalError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = "forms = \"auth\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(err, DatavalError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/dataval.toml").unwrap_err();
        match err {
            DatavalError::Config(msg) => assert!(msg.contains("/nonexistent/dataval.toml")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_into_instance_parses_rules() {
        let config: Config = "form = \"f\"\n[rules]\ncode = \"length:3:10|required\"\n"
            .parse()
            .unwrap();

        let instance_config = config.to_instance_config();
        assert_eq!(instance_config.form.as_deref(), Some("f"));
        assert!(instance_config.validators.is_empty());

        let dataval = config.into_instance();
        assert_eq!(dataval.form(), Some("f"));
        assert_eq!(dataval.rules()["code"].len(), 2);
        assert_eq!(dataval.rules()["code"][0].name, "length");
    }
}
