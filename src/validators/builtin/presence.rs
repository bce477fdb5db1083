//! Presence and length checks
//!
//! Both measure the stringified value, so `12345` has length 5.

use super::parse_int;
use crate::validators::ValidationContext;
use crate::value::Value;

/// String or number whose stringified form is non-empty
pub fn required(ctx: &ValidationContext) -> bool {
    match &ctx.value {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) => true,
        Value::Bool(_) => false,
    }
}

/// `length:min[:max]`, inclusive; absent or non-numeric `max` is unbounded
pub fn length(ctx: &ValidationContext) -> bool {
    let len = ctx.value.char_len() as i64;
    let Some(min) = ctx.arg(0).and_then(parse_int) else {
        return false;
    };
    let max = ctx.arg(1).and_then(parse_int).unwrap_or(i64::MAX);
    len >= min && len <= max
}

pub fn is_empty(ctx: &ValidationContext) -> bool {
    ctx.value.char_len() == 0
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ctx;
    use super::*;

    #[test]
    fn test_required() {
        assert!(required(&ctx("x", &[])));
        assert!(required(&ctx(0, &[])));
        assert!(!required(&ctx("", &[])));
        assert!(!required(&ctx(true, &[])));
    }

    #[test]
    fn test_length_bounds() {
        assert!(length(&ctx("1234567890", &["10", "10"])));
        assert!(!length(&ctx("123456789", &["10", "10"])));
        assert!(length(&ctx("abc", &["3"])));
        assert!(length(&ctx("abcdef", &["3", "unbounded"])));
        assert!(!length(&ctx("abcd", &["1", "3"])));
        assert!(!length(&ctx("ab", &["3"])));
    }

    #[test]
    fn test_length_stringifies_numbers() {
        assert!(length(&ctx(12345, &["5", "5"])));
        assert!(length(&ctx(1.5, &["3", "3"])));
        assert!(length(&ctx(1e-7, &["4", "4"])));
        assert!(length(&ctx(1e21, &["5", "5"])));
        assert!(!is_empty(&ctx(1e-7, &[])));
    }

    #[test]
    fn test_length_without_min_fails() {
        assert!(!length(&ctx("abc", &[])));
        assert!(!length(&ctx("abc", &["x"])));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&ctx("", &[])));
        assert!(!is_empty(&ctx(" ", &[])));
        assert!(!is_empty(&ctx(0, &[])));
    }
}
