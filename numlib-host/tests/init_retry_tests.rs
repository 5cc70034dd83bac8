//! Initialisation of the process-wide handle after a failed attempt
//!
//! Runs in its own test binary so nothing else touches the global handle.

use numlib_host::{HostError, LoaderConfig};
use tempfile::TempDir;

#[test]
fn test_failed_init_is_retried() {
    let empty = TempDir::new().unwrap();
    let unresolvable = LoaderConfig {
        library_path: None,
        search_paths: vec![empty.path().to_path_buf()],
        file_name: LoaderConfig::default().file_name,
    };

    let err = numlib_host::init(&unresolvable).unwrap_err();
    assert!(matches!(err, HostError::LibraryNotFound { .. }), "{err}");

    // nothing was cached by the failure
    let err = numlib_host::init(&unresolvable).unwrap_err();
    assert!(matches!(err, HostError::LibraryNotFound { .. }), "{err}");

    let resolvable = LoaderConfig::from_env();
    if let Err(err) = resolvable.resolve() {
        eprintln!("skipping success half: shared library not built ({err})");
        return;
    }

    let loaded = numlib_host::init(&resolvable).unwrap();
    let global = numlib_host::global().unwrap();
    assert!(std::ptr::eq(loaded, global));
    assert_eq!(global.divide(10, 0).unwrap_err().to_string(), "Division by zero");

    // a loaded handle is never replaced
    let again = numlib_host::init(&unresolvable).unwrap();
    assert!(std::ptr::eq(again, loaded));
}
