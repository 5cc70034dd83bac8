//! Loader configuration and library resolution
//!
//! The library is looked for in an ordered list of candidates and the first
//! existing file wins:
//!
//! 1. an explicit path (`NUMLIB_LIBRARY_PATH` or `library_path` in a config file)
//! 2. configured search directories, in order
//! 3. the directory of the running executable, then its parent
//! 4. `target/release` and `target/debug` under the working directory

use crate::error::{HostError, Result};
use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Environment variable naming the library file explicitly
pub const LIBRARY_PATH_ENV: &str = "NUMLIB_LIBRARY_PATH";

/// Base name of the library; the platform decides prefix and extension
pub const LIBRARY_NAME: &str = "numlib";

/// Where to look for the shared library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Explicit library file, tried before any search directory
    pub library_path: Option<PathBuf>,
    /// Directories searched in order
    pub search_paths: Vec<PathBuf>,
    /// File name looked for in each directory
    pub file_name: OsString,
}

/// On-disk form of [`LoaderConfig`]
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    library_path: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    library_name: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            search_paths: default_search_paths(),
            file_name: libloading::library_filename(LIBRARY_NAME),
        }
    }
}

impl LoaderConfig {
    /// Defaults, overridden by `NUMLIB_LIBRARY_PATH` when set
    pub fn from_env() -> Self {
        Self::default().with_env_override()
    }

    /// Parse a TOML configuration
    ///
    /// Configured `search_paths` come before the default locations.
    /// `library_name` is a base name such as `numlib`, not a file name.
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(source)?;
        let mut config = Self::default();

        config.library_path = file.library_path;
        if let Some(name) = file.library_name {
            config.file_name = libloading::library_filename(name);
        }
        let defaults = std::mem::take(&mut config.search_paths);
        config.search_paths = file.search_paths;
        config.search_paths.extend(defaults);

        Ok(config)
    }

    /// Load a TOML configuration file
    ///
    /// `NUMLIB_LIBRARY_PATH`, when set, still takes precedence over the
    /// file's `library_path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| HostError::config(path, e))?;
        let config = Self::from_toml_str(&source).map_err(|e| HostError::config(path, e))?;
        Ok(config.with_env_override())
    }

    /// Apply `NUMLIB_LIBRARY_PATH` if it is set and non-empty
    pub fn with_env_override(mut self) -> Self {
        if let Some(path) = env::var_os(LIBRARY_PATH_ENV).filter(|p| !p.is_empty()) {
            self.library_path = Some(PathBuf::from(path));
        }
        self
    }

    /// Set the explicit library file
    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Search `dir` before every directory already configured
    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.insert(0, dir.into());
        self
    }

    /// Every candidate file, in search order
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.library_path
            .iter()
            .cloned()
            .chain(self.search_paths.iter().map(|dir| dir.join(&self.file_name)))
            .collect()
    }

    /// First candidate that exists on disk
    pub fn resolve(&self) -> Result<PathBuf> {
        let candidates = self.candidates();

        for candidate in &candidates {
            trace!(path = %candidate.display(), "checking library candidate");
            if candidate.is_file() {
                debug!(path = %candidate.display(), "found native library");
                return Ok(candidate.clone());
            }
        }

        Err(HostError::LibraryNotFound {
            file_name: self.file_name.to_string_lossy().into_owned(),
            searched: candidates,
        })
    }
}

/// Executable directory and its parent, then the cargo target directories
fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(dir.to_path_buf());
            // target/<profile>/deps -> target/<profile>
            if let Some(parent) = dir.parent() {
                paths.push(parent.to_path_buf());
            }
        }
    }

    paths.push(Path::new("target").join("release"));
    paths.push(Path::new("target").join("debug"));
    paths
}
