//! Error types for the host binding

use numlib_core::Status;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failed native operation, surfaced as a Rust error
///
/// Displays exactly the message reported by the library's error channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct NativeError {
    code: i32,
    message: String,
}

impl NativeError {
    pub(crate) fn new(code: i32, message: String) -> Self {
        Self { code, message }
    }

    /// Raw status code returned by the library
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Known status, or `None` for a code newer than this binding
    pub fn status(&self) -> Option<Status> {
        Status::from_code(self.code)
    }

    /// Message reported by the library
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the divisor was zero
    pub fn is_division_by_zero(&self) -> bool {
        self.status() == Some(Status::DivisionByZero)
    }
}

/// Errors raised while locating, loading or using the library
#[derive(Error, Debug)]
pub enum HostError {
    /// No candidate location holds the library
    #[error(
        "could not find {file_name} in any expected location (searched: {})",
        display_paths(.searched)
    )]
    LibraryNotFound {
        /// Platform file name that was looked for
        file_name: String,
        /// Every candidate path, in search order
        searched: Vec<PathBuf>,
    },

    /// The file exists but could not be loaded
    #[error("failed to load native library '{}': {source}", .path.display())]
    Load {
        /// Path that was loaded
        path: PathBuf,
        /// Loader failure
        #[source]
        source: libloading::Error,
    },

    /// An exported symbol is missing
    #[error("symbol '{symbol}' not found in '{}': {source}", .path.display())]
    MissingSymbol {
        /// Name of the missing symbol
        symbol: &'static str,
        /// Library that was searched
        path: PathBuf,
        /// Loader failure
        #[source]
        source: libloading::Error,
    },

    /// The library implements a different ABI revision
    #[error("incompatible ABI version: expected {expected}, library reports {found}")]
    AbiMismatch {
        /// Revision this binding was built against
        expected: u32,
        /// Revision reported by the library
        found: u32,
    },

    /// Invalid loader configuration
    #[error("configuration error in {}: {source}", .path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// Read or parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A native operation reported a failure status
    #[error(transparent)]
    Native(#[from] NativeError),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl HostError {
    pub(crate) fn config(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        HostError::Config {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;
