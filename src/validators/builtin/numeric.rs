//! Numeric bound checks
//!
//! Only `Number` values qualify; numeric-looking strings fail.

use super::parse_number;
use crate::validators::ValidationContext;

fn bound(ctx: &ValidationContext, index: usize) -> Option<f64> {
    ctx.arg(index).and_then(parse_number)
}

/// `max:n`
pub fn max(ctx: &ValidationContext) -> bool {
    match (ctx.value.as_number(), bound(ctx, 0)) {
        (Some(value), Some(max)) => value <= max,
        _ => false,
    }
}

/// `min:n`
pub fn min(ctx: &ValidationContext) -> bool {
    match (ctx.value.as_number(), bound(ctx, 0)) {
        (Some(value), Some(min)) => value >= min,
        _ => false,
    }
}

/// `between:min:max`, inclusive
pub fn between(ctx: &ValidationContext) -> bool {
    match (ctx.value.as_number(), bound(ctx, 0), bound(ctx, 1)) {
        (Some(value), Some(min), Some(max)) => value >= min && value <= max,
        _ => false,
    }
}
