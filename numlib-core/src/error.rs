//! Core error types (deterministic only)

use crate::status::Status;
use core::fmt;

/// Arithmetic errors (no I/O, no external failures)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// The divisor was zero
    DivisionByZero,
}

impl CoreError {
    /// Status code reported for this error at the C boundary
    pub const fn status(&self) -> Status {
        match self {
            CoreError::DivisionByZero => Status::DivisionByZero,
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status().description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
