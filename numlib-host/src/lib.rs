//! Rust host binding for the numlib shared library
//!
//! Locates the platform's `numlib` shared object, binds its exports once per
//! process, and turns the C status protocol into ordinary `Result`s.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> Result<(), numlib_host::HostError> {
//!     let lib = numlib_host::global()?;
//!
//!     assert_eq!(lib.add(2, 3), 5);
//!     assert_eq!(lib.exponent(2, 8), 256);
//!
//!     match lib.divide(10, 0) {
//!         Ok(q) => println!("quotient: {q}"),
//!         Err(err) => eprintln!("error: {err}"), // "Division by zero"
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod library;

use once_cell::sync::OnceCell;
use tracing::warn;

// Re-export key types
pub use config::{LoaderConfig, LIBRARY_NAME, LIBRARY_PATH_ENV};
pub use error::{HostError, NativeError, Result};
pub use library::{NumericLibrary, Symbols};
pub use numlib_core::Status;

static GLOBAL: OnceCell<NumericLibrary> = OnceCell::new();

/// Process-wide library handle, loaded on first use
///
/// Uses [`LoaderConfig::from_env`]. Once loaded the handle never changes. A
/// failed load is returned to the caller and attempted again on the next
/// call.
pub fn global() -> Result<&'static NumericLibrary> {
    match GLOBAL.get() {
        Some(library) => Ok(library),
        None => init(&LoaderConfig::from_env()),
    }
}

/// Load the process-wide handle with an explicit configuration
///
/// Has no effect on an already loaded handle, which is returned as is.
pub fn init(config: &LoaderConfig) -> Result<&'static NumericLibrary> {
    GLOBAL.get_or_try_init(|| {
        NumericLibrary::load(config).inspect_err(|err| {
            warn!(error = %err, "failed to initialise native library");
        })
    })
}
