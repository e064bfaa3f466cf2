//! Error type for spiral and factorization operations.
//!
//! ## Purpose
//!
//! This module defines [`NumericError`], the single error type returned by
//! every fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **Domain errors**: Inputs outside an operation's domain are rejected
//!   before any arithmetic runs.
//! * **Overflow**: Checked arithmetic failures are reported, never wrapped.
//! * **Portability**: Values are carried as `i128` so the error type stays
//!   non-generic across integer widths.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see the engine layer).

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by diagonal-sum and factorization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Spiral side length is zero or negative.
    NonPositiveSideLength(i128),

    /// Spiral side length is even; only odd spirals have a center cell.
    EvenSideLength(i128),

    /// Ring index is negative; rings are numbered outward from 0.
    NegativeRingIndex(i128),

    /// Factoring target is below 2 and has no prime factors.
    NoPrimeFactors(i128),

    /// An intermediate or final value does not fit the integer type.
    Overflow {
        /// Operation that overflowed.
        operation: &'static str,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSideLength(n) => {
                write!(f, "Invalid side length: {} (must be >= 1)", n)
            }
            Self::EvenSideLength(n) => write!(f, "Invalid side length: {} (must be odd)", n),
            Self::NegativeRingIndex(k) => {
                write!(f, "Invalid ring index: {} (must be >= 0)", k)
            }
            Self::NoPrimeFactors(v) => {
                write!(f, "Invalid factoring target: {} (must be >= 2)", v)
            }
            Self::Overflow { operation } => write!(f, "Arithmetic overflow in {}", operation),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NumericError {}
