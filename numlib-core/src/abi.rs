//! Names and revision of the exported C ABI
//!
//! Hosts resolve functions by these symbol names, so they are as stable as
//! the status codes themselves.

/// Revision of the symbol set and status codes
///
/// Bumped only for incompatible changes; appending a status code or a
/// symbol keeps the revision.
pub const ABI_VERSION: u32 = 1;

/// Symbol of the error reporting channel
pub const ERROR_MESSAGE_SYMBOL: &str = "numlib_error_message";

/// Symbol reporting [`ABI_VERSION`]
pub const ABI_VERSION_SYMBOL: &str = "numlib_abi_version";

/// Symbol reporting the library's crate version
pub const VERSION_SYMBOL: &str = "numlib_version";

/// An arithmetic operation exported by the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `int (int a, int b)`
    Add,
    /// `int (int a, int b)`
    Multiply,
    /// `int (int base, int exp)`
    Exponent,
    /// `int (int dividend, int divisor, int *out_quotient)`, returns a status
    Divide,
}

impl Operation {
    /// All exported operations
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Multiply,
        Operation::Exponent,
        Operation::Divide,
    ];

    /// Exported symbol name
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "numlib_add",
            Operation::Multiply => "numlib_multiply",
            Operation::Exponent => "numlib_exponent",
            Operation::Divide => "numlib_divide",
        }
    }

    /// Whether the operation reports a status code
    pub const fn is_fallible(self) -> bool {
        matches!(self, Operation::Divide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_prefixed_and_distinct() {
        let mut symbols = [""; 4];
        for (slot, op) in symbols.iter_mut().zip(Operation::ALL) {
            *slot = op.symbol();
            assert!(op.symbol().starts_with("numlib_"));
        }
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_only_divide_is_fallible() {
        assert!(Operation::Divide.is_fallible());
        assert!(!Operation::Add.is_fallible());
        assert!(!Operation::Multiply.is_fallible());
        assert!(!Operation::Exponent.is_fallible());
    }
}
