//! C ABI for the numlib arithmetic core
//!
//! Every export is an unmangled `extern "C"` function with a `numlib_`
//! prefix; `include/numlib.h` declares them for C, C++ and cgo hosts.
//!
//! # Error signalling
//!
//! Nothing raised on this side of the boundary can reach the caller, so the
//! one fallible operation returns a status code and writes its value through
//! an out-parameter:
//!
//! ```text
//! int quotient;
//! int status = numlib_divide(10, 0, &quotient);
//! if (status != NUMLIB_OK) {
//!     fprintf(stderr, "%s\n", numlib_error_message(status));
//! }
//! ```
//!
//! Status and code parameters are plain `int` rather than a Rust enum, so a
//! caller may pass any value without producing an invalid discriminant.

use numlib_core::{Status, ABI_VERSION};
use std::ffi::{c_char, c_int, c_uint, CStr};

const VERSION: &CStr = match CStr::from_bytes_with_nul(
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes(),
) {
    Ok(version) => version,
    Err(_) => c"",
};

/// Add two integers, wrapping on overflow
#[no_mangle]
pub extern "C" fn numlib_add(a: c_int, b: c_int) -> c_int {
    numlib_core::add(a, b)
}

/// Multiply two integers, wrapping on overflow
#[no_mangle]
pub extern "C" fn numlib_multiply(a: c_int, b: c_int) -> c_int {
    numlib_core::multiply(a, b)
}

/// Raise `base` to the power `exp`
///
/// Only `exp >= 0` is part of the contract; the result for a negative `exp`
/// is unspecified.
#[no_mangle]
pub extern "C" fn numlib_exponent(base: c_int, exp: c_int) -> c_int {
    numlib_core::exponent(base, u32::try_from(exp).unwrap_or(0))
}

/// Divide two integers
///
/// Returns a status code. The quotient is written to `out_quotient` only
/// when the status is `NUMLIB_OK`; otherwise the location is left untouched.
/// A null `out_quotient` yields `NUMLIB_INVALID_ARGUMENT`.
///
/// # Safety
///
/// `out_quotient` must be null or valid for writing one `int`.
#[no_mangle]
pub unsafe extern "C" fn numlib_divide(
    dividend: c_int,
    divisor: c_int,
    out_quotient: *mut c_int,
) -> c_int {
    if out_quotient.is_null() {
        tracing::trace!(dividend, divisor, "null quotient pointer");
        return Status::InvalidArgument.code();
    }

    match numlib_core::divide(dividend, divisor) {
        Ok(quotient) => {
            // SAFETY: non-null, and the caller guarantees it is writable.
            unsafe { out_quotient.write(quotient) };
            Status::Ok.code()
        }
        Err(err) => {
            tracing::trace!(dividend, divisor, %err, "division rejected");
            err.status().code()
        }
    }
}

/// Message for a status code
///
/// Never returns null. The string is static: the caller must not free it
/// and may keep it for the life of the process. Unknown codes yield
/// `"Unknown error"`.
#[no_mangle]
pub extern "C" fn numlib_error_message(code: c_int) -> *const c_char {
    numlib_core::message_for(code).as_ptr()
}

/// Revision of the exported symbols and status codes
#[no_mangle]
pub extern "C" fn numlib_abi_version() -> c_uint {
    ABI_VERSION
}

/// Version of this library as a static, NUL-terminated string
#[no_mangle]
pub extern "C" fn numlib_version() -> *const c_char {
    VERSION.as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(code: c_int) -> &'static str {
        // SAFETY: the pointer comes from a static NUL-terminated string.
        unsafe { CStr::from_ptr(numlib_error_message(code)) }
            .to_str()
            .unwrap()
    }

    #[test]
    fn test_add_and_multiply() {
        assert_eq!(numlib_add(2, 3), 5);
        assert_eq!(numlib_add(-1, 1), 0);
        assert_eq!(numlib_multiply(-2, 3), -6);
        assert_eq!(numlib_multiply(c_int::MAX, 2), -2);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(numlib_exponent(2, 3), 8);
        assert_eq!(numlib_exponent(3, 4), 81);
        assert_eq!(numlib_exponent(0, 0), 1);
    }

    #[test]
    fn test_negative_exponent_returns() {
        // unspecified result, but the call must come back to the caller
        for exp in [-1, c_int::MIN] {
            let _ = numlib_exponent(2, exp);
            let _ = numlib_exponent(0, exp);
        }
    }

    #[test]
    fn test_divide_writes_quotient() {
        let mut quotient = 0;
        let status = unsafe { numlib_divide(-10, 2, &mut quotient) };
        assert_eq!(status, Status::Ok.code());
        assert_eq!(quotient, -5);
    }

    #[test]
    fn test_divide_by_zero_leaves_out_param() {
        let mut quotient = 1234;
        let status = unsafe { numlib_divide(10, 0, &mut quotient) };
        assert_eq!(status, Status::DivisionByZero.code());
        assert_eq!(quotient, 1234);
        assert_eq!(message(status), "Division by zero");
    }

    #[test]
    fn test_divide_rejects_null() {
        let status = unsafe { numlib_divide(10, 2, std::ptr::null_mut()) };
        assert_eq!(status, Status::InvalidArgument.code());
        assert_eq!(message(status), "Invalid argument");
    }

    #[test]
    fn test_error_message_is_total() {
        assert_eq!(message(0), "");
        assert_eq!(message(7), "Unknown error");
        assert_eq!(message(-1), "Unknown error");
        assert!(!numlib_error_message(c_int::MIN).is_null());
    }

    #[test]
    fn test_versions() {
        assert_eq!(numlib_abi_version(), 1);
        let version = unsafe { CStr::from_ptr(numlib_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
