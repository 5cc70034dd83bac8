//! Integer arithmetic with native fixed-width semantics
//!
//! Overflow wraps (two's complement) in every build profile. These functions
//! sit directly behind `extern "C"` symbols, where a panic would abort the
//! host process, so no arithmetic here is allowed to panic.

use crate::error::{CoreError, Result};

/// Sum of `a` and `b`, wrapping on overflow
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Product of `a` and `b`, wrapping on overflow
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// `base` raised to `exp` by repeated multiplication
///
/// `exponent(x, 0)` is 1 for every `x`, including 0. Intermediate products
/// wrap exactly like [`multiply`].
pub const fn exponent(base: i32, exp: u32) -> i32 {
    let mut result: i32 = 1;
    let mut remaining = exp;
    while remaining > 0 {
        result = result.wrapping_mul(base);
        // zero is absorbing
        if result == 0 {
            break;
        }
        remaining -= 1;
    }
    result
}

/// Quotient of `dividend` by `divisor`, truncated toward zero
///
/// `i32::MIN / -1` wraps to `i32::MIN`.
pub const fn divide(dividend: i32, divisor: i32) -> Result<i32> {
    if divisor == 0 {
        return Err(CoreError::DivisionByZero);
    }
    Ok(dividend.wrapping_div(divisor))
}
