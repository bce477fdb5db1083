//! Type checks on the scalar variant

use crate::validators::ValidationContext;
use crate::value::Value;

pub fn is_string(ctx: &ValidationContext) -> bool {
    matches!(ctx.value, Value::String(_))
}

pub fn is_boolean(ctx: &ValidationContext) -> bool {
    matches!(ctx.value, Value::Bool(_))
}

pub fn is_number(ctx: &ValidationContext) -> bool {
    matches!(ctx.value, Value::Number(_))
}

pub fn is_true(ctx: &ValidationContext) -> bool {
    ctx.value.as_bool() == Some(true)
}

pub fn is_false(ctx: &ValidationContext) -> bool {
    ctx.value.as_bool() == Some(false)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ctx;
    use super::*;

    #[test]
    fn test_type_checks() {
        assert!(is_string(&ctx("1", &[])));
        assert!(!is_string(&ctx(1, &[])));
        assert!(is_number(&ctx(1, &[])));
        assert!(!is_number(&ctx("1", &[])));
        assert!(is_boolean(&ctx(false, &[])));
        assert!(!is_boolean(&ctx("false", &[])));
    }

    #[test]
    fn test_true_false_require_boolean() {
        assert!(is_true(&ctx(true, &[])));
        assert!(!is_true(&ctx("true", &[])));
        assert!(!is_true(&ctx(1, &[])));
        assert!(is_false(&ctx(false, &[])));
        assert!(!is_false(&ctx("", &[])));
        assert!(!is_false(&ctx(0, &[])));
    }
}
