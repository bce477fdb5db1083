//! Rule-string grammar.
//!
//! A field's rule string is a `|`-separated list of clauses, each clause a
//! `:`-separated list whose first segment is the rule name and the rest are
//! positional arguments:
//!
//! ```text
//! length:3:10|required
//! └─ name ─┘└args┘ └name┘
//! ```
//!
//! There is no escaping: a literal `|` or `:` cannot appear inside an argument.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separates clauses within a rule string
pub const CLAUSE_SEPARATOR: char = '|';

/// Separates the rule name and its arguments within a clause
pub const ARG_SEPARATOR: char = ':';

/// One parsed rule clause: a name plus ordered string arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl RuleDescriptor {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Parse a single clause (no `|` handling)
    pub fn parse_clause(clause: &str) -> Self {
        let mut segments = clause.split(ARG_SEPARATOR);
        // split always yields at least one segment, possibly empty
        let name = segments.next().unwrap_or_default().to_string();
        let args = segments.map(str::to_string).collect();
        Self { name, args }
    }

    /// Positional argument, if present
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// Renders the clause exactly as [`RuleDescriptor::parse_clause`] reads it.
///
/// A clause without arguments renders as its bare name. Empty arguments are
/// kept, so `a:` stays `a:` and parses back to one empty argument.
impl fmt::Display for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, "{}{}", ARG_SEPARATOR, arg)?;
        }
        Ok(())
    }
}

/// Parse a full rule string into its ordered clauses.
///
/// Malformed input is not rejected: an empty clause yields a descriptor with
/// an empty name, which later fails to resolve to a validator.
pub fn parse(rules: &str) -> Vec<RuleDescriptor> {
    rules
        .split(CLAUSE_SEPARATOR)
        .map(RuleDescriptor::parse_clause)
        .collect()
}

/// Inverse of [`parse`].
pub fn serialize(rules: &[RuleDescriptor]) -> String {
    rules
        .iter()
        .map(RuleDescriptor::to_string)
        .collect::<Vec<_>>()
        .join(&CLAUSE_SEPARATOR.to_string())
}
