//! Rule grammar and per-field rule sets.
//!
//! Rule strings are parsed once, when an instance is built, into
//! [`FieldRules`]: an ordered list of [`RuleDescriptor`]s per field key.

mod grammar;

pub use grammar::{parse, serialize, RuleDescriptor, ARG_SEPARATOR, CLAUSE_SEPARATOR};

use indexmap::IndexMap;

/// Field key to its ordered rule descriptors
pub type FieldRules = IndexMap<String, Vec<RuleDescriptor>>;

/// Field key to its raw rule string
pub type RuleStrings = IndexMap<String, String>;

/// Parse every field's rule string
pub fn parse_rule_map(rules: &RuleStrings) -> FieldRules {
    rules
        .iter()
        .map(|(key, rule)| (key.clone(), parse(rule)))
        .collect()
}

/// Serialize every field's rules back to rule strings
pub fn serialize_rule_map(rules: &FieldRules) -> RuleStrings {
    rules
        .iter()
        .map(|(key, descriptors)| (key.clone(), serialize(descriptors)))
        .collect()
}
