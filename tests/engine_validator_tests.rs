#![cfg(feature = "dev")]
//! Tests for input validation.

use spiral_factor::internals::engine::validator::Validator;
use spiral_factor::internals::primitives::errors::NumericError;

/// Test accepted side lengths.
#[test]
fn test_side_length_valid() {
    for n in [1u64, 3, 5, 101, u64::MAX] {
        assert!(Validator::validate_side_length(n).is_ok());
    }
}

/// Test rejected side lengths.
#[test]
fn test_side_length_invalid() {
    assert_eq!(
        Validator::validate_side_length(0u32),
        Err(NumericError::NonPositiveSideLength(0))
    );
    assert_eq!(
        Validator::validate_side_length(i64::MIN),
        Err(NumericError::NonPositiveSideLength(i64::MIN as i128))
    );
    assert_eq!(
        Validator::validate_side_length(10u32),
        Err(NumericError::EvenSideLength(10))
    );
}

/// Test factoring target bounds.
#[test]
fn test_factor_target() {
    assert!(Validator::validate_factor_target(2u8).is_ok());
    assert!(Validator::validate_factor_target(u128::MAX).is_ok());
    assert_eq!(
        Validator::validate_factor_target(1i16),
        Err(NumericError::NoPrimeFactors(1))
    );
    assert_eq!(
        Validator::validate_factor_target(-5i16),
        Err(NumericError::NoPrimeFactors(-5))
    );
}

/// Test ring index bounds.
#[test]
fn test_ring_index() {
    assert!(Validator::validate_ring_index(0i32).is_ok());
    assert!(Validator::validate_ring_index(7u8).is_ok());
    assert_eq!(
        Validator::validate_ring_index(-4i32),
        Err(NumericError::NegativeRingIndex(-4))
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("method")),
        Err(NumericError::DuplicateParameter { parameter: "method" })
    );
}
