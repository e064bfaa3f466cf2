//! Input validation for spiral and factorization inputs.
//!
//! ## Purpose
//!
//! This module provides the validation functions that reject inputs outside
//! an operation's domain before any arithmetic runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `PrimInt` types.
//!
//! ## Key concepts
//!
//! * **Side length**: A spiral only has a center cell when its side is odd.
//! * **Factoring target**: 1 has no prime factors; zero and negatives are
//!   outside the domain.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not provide automatic correction of invalid inputs
//!   (e.g. rounding an even side length up).

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::NumericError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for spiral and factorization inputs.
///
/// All methods return `Result<(), NumericError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate a spiral side length: must be `>= 1` and odd.
    pub fn validate_side_length<T: PrimInt>(n: T) -> Result<(), NumericError> {
        // Check 1: Positive
        if n < T::one() {
            return Err(NumericError::NonPositiveSideLength(Self::report(n)));
        }

        // Check 2: Odd
        let two = T::one() + T::one();
        if (n % two).is_zero() {
            return Err(NumericError::EvenSideLength(Self::report(n)));
        }

        Ok(())
    }

    /// Validate a ring index: must be `>= 0`.
    pub fn validate_ring_index<T: PrimInt>(k: T) -> Result<(), NumericError> {
        if k < T::zero() {
            return Err(NumericError::NegativeRingIndex(Self::report(k)));
        }
        Ok(())
    }

    /// Validate a factoring target: must be `>= 2`.
    pub fn validate_factor_target<T: PrimInt>(value: T) -> Result<(), NumericError> {
        let two = T::one() + T::one();
        if value < two {
            return Err(NumericError::NoPrimeFactors(Self::report(value)));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), NumericError> {
        if let Some(param) = duplicate_param {
            return Err(NumericError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Widen a value for error reporting; unsigned values past `i128::MAX`
    /// saturate.
    #[inline]
    fn report<T: PrimInt>(value: T) -> i128 {
        value.to_i128().unwrap_or(i128::MAX)
    }
}
