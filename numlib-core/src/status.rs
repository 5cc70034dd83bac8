//! Status codes and the error reporting channel
//!
//! Codes are a versioned integer contract shared with every host. A host and
//! the native library may ship independently, so existing values are never
//! renumbered and new ones are only ever appended.
//!
//! Messages are NUL-terminated statics. They live for the whole process and
//! are never freed, so a host can hold on to the pointer it receives without
//! any ownership handshake.

use core::ffi::CStr;
use core::fmt;

/// Message for codes this build does not recognise
pub const UNKNOWN_MESSAGE: &CStr = c"Unknown error";

/// Outcome of a fallible operation at the C boundary
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Success
    Ok = 0,
    /// The divisor was zero
    DivisionByZero = 1,
    /// An argument was rejected, e.g. a null out-parameter
    InvalidArgument = 2,
}

impl Status {
    /// Every status this build knows about, in code order
    pub const ALL: [Status; 3] = [Status::Ok, Status::DivisionByZero, Status::InvalidArgument];

    /// Numeric code as carried across the boundary
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a status by its numeric code
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::DivisionByZero),
            2 => Some(Status::InvalidArgument),
            _ => None,
        }
    }

    /// Whether this status signals success
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Human-readable message; empty for `Ok`
    pub const fn message(self) -> &'static CStr {
        match self {
            Status::Ok => c"",
            Status::DivisionByZero => c"Division by zero",
            Status::InvalidArgument => c"Invalid argument",
        }
    }

    /// The message as a Rust string slice
    pub fn description(self) -> &'static str {
        self.message().to_str().unwrap_or_default()
    }

    /// Stable upper-case name, as used in C headers
    pub const fn name(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::DivisionByZero => "DIVISION_BY_ZERO",
            Status::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

impl TryFrom<i32> for Status {
    /// The unrecognised code
    type Error = i32;

    fn try_from(code: i32) -> core::result::Result<Self, Self::Error> {
        Status::from_code(code).ok_or(code)
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

/// Message for any integer code
///
/// Total over `i32`: codes outside the known set get [`UNKNOWN_MESSAGE`]
/// instead of an error, so a host talking to a newer library degrades
/// gracefully.
pub const fn message_for(code: i32) -> &'static CStr {
    match Status::from_code(code) {
        Some(status) => status.message(),
        None => UNKNOWN_MESSAGE,
    }
}
