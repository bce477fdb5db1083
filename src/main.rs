//! # dataval
//!
//! Validate a JSON document of field values against the rules in a TOML file.
//!
//! ```text
//! dataval <config.toml> [values.json]
//! ```
//!
//! With a values file the result is printed as JSON; the exit code is 0 when
//! valid, 1 when invalid, 2 on any error. Without one, the rules are checked
//! for names that resolve to no validator.

use dataval::{Config, DatavalError, ValidationInput};
use std::env;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_VALID: u8 = 0;
const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(config_path) = args.get(1) else {
        eprintln!("usage: dataval <config.toml> [values.json]");
        return ExitCode::from(EXIT_ERROR);
    };

    ExitCode::from(exit_code(config_path, args.get(2).map(String::as_str)))
}

/// Run the CLI and map any fatal error to [`EXIT_ERROR`]
fn exit_code(config_path: &str, values_path: Option<&str>) -> u8 {
    match run(config_path, values_path) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            EXIT_ERROR
        }
    }
}

fn run(config_path: &str, values_path: Option<&str>) -> Result<u8, DatavalError> {
    eprintln!("🔧 Loading configuration from: {}", config_path);
    let dataval = Config::from_file(config_path)?.into_instance();

    if let Some(form) = dataval.form() {
        eprintln!("   Form: {}", form);
    }
    for (key, rules) in dataval.rules() {
        let names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        eprintln!("   • {} → {}", key, names.join(", "));
    }

    let Some(values_path) = values_path else {
        let unresolved = dataval.unresolved_rules();
        if unresolved.is_empty() {
            eprintln!("✅ All rules resolve to a validator");
            return Ok(EXIT_VALID);
        }
        for (key, rule) in &unresolved {
            eprintln!("❌ Field '{}' uses unknown rule '{}'", key, rule);
        }
        return Ok(EXIT_ERROR);
    };

    let contents = fs::read_to_string(values_path)
        .map_err(|e| DatavalError::Input(format!("{}: {}", values_path, e)))?;
    let values: ValidationInput = serde_json::from_str(&contents)
        .map_err(|e| DatavalError::Input(format!("{}: {}", values_path, e)))?;

    let result = dataval.validate_blocking(values)?;
    let rendered = serde_json::to_string_pretty(&result)
        .map_err(|e| DatavalError::Input(e.to_string()))?;
    println!("{}", rendered);

    Ok(if result.valid { EXIT_VALID } else { EXIT_INVALID })
}
