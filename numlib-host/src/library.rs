//! A loaded numlib library and its bound symbols

use crate::config::LoaderConfig;
use crate::error::{HostError, NativeError, Result};
use libloading::Library;
use numlib_core::abi::{ABI_VERSION_SYMBOL, ERROR_MESSAGE_SYMBOL};
use numlib_core::{Operation, Status, ABI_VERSION};
use std::ffi::{c_char, c_int, c_uint, CStr};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `int (int, int)`
pub type BinaryFn = unsafe extern "C" fn(c_int, c_int) -> c_int;
/// `int (int dividend, int divisor, int *out_quotient)`
pub type DivideFn = unsafe extern "C" fn(c_int, c_int, *mut c_int) -> c_int;
/// `const char *(int code)`
pub type ErrorMessageFn = unsafe extern "C" fn(c_int) -> *const c_char;
/// `unsigned int (void)`
pub type AbiVersionFn = unsafe extern "C" fn() -> c_uint;

/// Function pointers for every export the binding uses
#[derive(Clone, Copy)]
pub struct Symbols {
    /// `numlib_add`
    pub add: BinaryFn,
    /// `numlib_multiply`
    pub multiply: BinaryFn,
    /// `numlib_exponent`
    pub exponent: BinaryFn,
    /// `numlib_divide`
    pub divide: DivideFn,
    /// `numlib_error_message`
    pub error_message: ErrorMessageFn,
    /// `numlib_abi_version`
    pub abi_version: AbiVersionFn,
}

impl Symbols {
    /// Bind every symbol, failing on the first one that is missing
    ///
    /// # Safety
    ///
    /// `library` must be a numlib build whose exports have the signatures
    /// declared in `numlib.h`.
    unsafe fn bind(library: &Library, path: &Path) -> Result<Self> {
        Ok(Self {
            add: bind(library, path, Operation::Add.symbol())?,
            multiply: bind(library, path, Operation::Multiply.symbol())?,
            exponent: bind(library, path, Operation::Exponent.symbol())?,
            divide: bind(library, path, Operation::Divide.symbol())?,
            error_message: bind(library, path, ERROR_MESSAGE_SYMBOL)?,
            abi_version: bind(library, path, ABI_VERSION_SYMBOL)?,
        })
    }
}

unsafe fn bind<T: Copy>(library: &Library, path: &Path, symbol: &'static str) -> Result<T> {
    let bound = library
        .get::<T>(symbol.as_bytes())
        .map_err(|source| HostError::MissingSymbol {
            symbol,
            path: path.to_path_buf(),
            source,
        })?;
    Ok(*bound)
}

/// Handle to a fully bound numlib library
///
/// Construction either binds every symbol and checks the ABI revision, or
/// fails; there is no partially initialised handle. The handle is immutable
/// afterwards and can be shared freely between threads.
pub struct NumericLibrary {
    symbols: Symbols,
    path: Option<PathBuf>,
    // Keeps the code behind `symbols` mapped; dropped last.
    _library: Option<Library>,
}

impl NumericLibrary {
    /// Resolve the library from `config` and load it
    pub fn load(config: &LoaderConfig) -> Result<Self> {
        let path = config.resolve()?;
        Self::open(path)
    }

    /// Load the library at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!(path = %path.display(), "loading native library");

        // SAFETY: loading runs the library's initialisers; the path was
        // chosen by the caller's configuration and is trusted.
        let library = unsafe { Library::new(&path) }.map_err(|source| HostError::Load {
            path: path.clone(),
            source,
        })?;
        // SAFETY: the symbol types mirror numlib.h.
        let symbols = unsafe { Symbols::bind(&library, &path)? };

        info!(path = %path.display(), "native library bound");
        let loaded = Self {
            symbols,
            path: Some(path),
            _library: Some(library),
        };
        loaded.check_abi()?;
        Ok(loaded)
    }

    /// Build a handle over functions already present in the process
    ///
    /// # Safety
    ///
    /// Each pointer must implement the corresponding `numlib.h` contract and
    /// stay valid for the life of the handle.
    pub unsafe fn from_symbols(symbols: Symbols) -> Result<Self> {
        let handle = Self {
            symbols,
            path: None,
            _library: None,
        };
        handle.check_abi()?;
        Ok(handle)
    }

    fn check_abi(&self) -> Result<()> {
        let found = self.abi_version();
        if found != ABI_VERSION {
            return Err(HostError::AbiMismatch {
                expected: ABI_VERSION,
                found,
            });
        }
        Ok(())
    }

    /// File the library was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// ABI revision reported by the library
    pub fn abi_version(&self) -> u32 {
        // SAFETY: bound from a library honouring numlib.h.
        unsafe { (self.symbols.abi_version)() }
    }

    /// `a + b`, wrapping on overflow
    pub fn add(&self, a: i32, b: i32) -> i32 {
        unsafe { (self.symbols.add)(a, b) }
    }

    /// `a * b`, wrapping on overflow
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        unsafe { (self.symbols.multiply)(a, b) }
    }

    /// `base` raised to `exp`; only `exp >= 0` is meaningful
    pub fn exponent(&self, base: i32, exp: i32) -> i32 {
        unsafe { (self.symbols.exponent)(base, exp) }
    }

    /// `dividend / divisor`, truncated toward zero
    ///
    /// A non-OK status becomes a [`NativeError`] carrying the library's own
    /// message, e.g. `"Division by zero"`.
    pub fn divide(&self, dividend: i32, divisor: i32) -> std::result::Result<i32, NativeError> {
        let mut quotient: c_int = 0;
        // SAFETY: `quotient` is a live, writable int.
        let code = unsafe { (self.symbols.divide)(dividend, divisor, &mut quotient) };

        if code == Status::Ok.code() {
            Ok(quotient)
        } else {
            Err(NativeError::new(code, self.error_message(code)))
        }
    }

    /// Message the library reports for `code`
    pub fn error_message(&self, code: i32) -> String {
        // SAFETY: the library returns static NUL-terminated strings.
        let ptr = unsafe { (self.symbols.error_message)(code) };
        if ptr.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(ptr) }
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Debug for NumericLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericLibrary")
            .field("path", &self.path)
            .field("abi_version", &self.abi_version())
            .finish()
    }
}
