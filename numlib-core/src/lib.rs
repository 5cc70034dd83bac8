//! Fixed-width integer arithmetic behind the numlib C ABI
//!
//! This crate holds everything that is independent of any host language:
//! the four arithmetic operations, the stable status codes reported across
//! the foreign-function boundary, and the static messages those codes map to.
//!
//! # Architecture
//!
//! - **Arithmetic**: pure `i32` operations with wrapping overflow
//! - **Status channel**: `Status` codes and their NUL-terminated messages
//! - **ABI description**: exported symbol names and the contract revision
//!
//! Nothing here panics, allocates, or keeps state between calls, so every
//! function is safe to call from any thread and from behind `extern "C"`.
//!
//! # Example
//!
//! ```rust
//! use numlib_core::{divide, exponent, CoreError, Status};
//!
//! assert_eq!(exponent(3, 4), 81);
//! assert_eq!(divide(-10, 2), Ok(-5));
//!
//! let err = divide(1, 0).unwrap_err();
//! assert_eq!(err, CoreError::DivisionByZero);
//! assert_eq!(err.status(), Status::DivisionByZero);
//! assert_eq!(Status::DivisionByZero.message().to_bytes(), b"Division by zero");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod abi;
pub mod arith;
pub mod error;
pub mod status;

pub use abi::{Operation, ABI_VERSION};
pub use arith::{add, divide, exponent, multiply};
pub use error::{CoreError, Result};
pub use status::{message_for, Status};
