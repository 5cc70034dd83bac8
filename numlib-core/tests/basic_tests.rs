//! Basic tests for numlib-core

use numlib_core::*;

#[test]
fn test_documented_examples() {
    assert_eq!(exponent(2, 3), 8);
    assert_eq!(exponent(5, 2), 25);
    assert_eq!(exponent(3, 4), 81);
    assert_eq!(exponent(10, 0), 1);

    assert_eq!(divide(10, 5), Ok(2));
    assert_eq!(divide(-10, 2), Ok(-5));
    assert_eq!(divide(6, 2), Ok(3));
}

#[test]
fn test_division_by_zero_surfaces_message() {
    let err = divide(42, 0).unwrap_err();
    assert_eq!(err.status(), Status::DivisionByZero);
    assert_eq!(err.to_string(), "Division by zero");
    assert_eq!(message_for(err.status().code()).to_bytes(), b"Division by zero");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&CoreError::DivisionByZero);
}

#[test]
fn test_ok_message_is_empty() {
    assert!(message_for(Status::Ok.code()).is_empty());
}

#[test]
fn test_every_code_has_nonempty_message_except_ok() {
    for status in Status::ALL {
        let message = message_for(status.code());
        assert_eq!(message.is_empty(), status.is_ok(), "{status}");
    }
}

#[test]
fn test_operation_table() {
    assert_eq!(Operation::ALL.len(), 4);
    assert_eq!(Operation::Divide.symbol(), "numlib_divide");
    assert_eq!(ABI_VERSION, 1);
}
