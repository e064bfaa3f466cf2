//! Diagonal sums of odd-sided number spirals.
//!
//! ## Purpose
//!
//! This module sums the values lying on both diagonals of an `n x n` number
//! spiral, where 1 sits at the center and consecutive integers wind outward
//! in concentric square rings.
//!
//! ## Design notes
//!
//! * **Iterative**: Accumulates ring corner sums, O(n) in the side length.
//! * **Closed form**: Evaluates `(4n^3 + 3n^2 + 8n - 9) / 6` in O(1).
//! * **Checked**: Overflow is reported as an error, never wrapped.
//! * **Generics**: Generic over `PrimInt` types.
//!
//! ## Key concepts
//!
//! * **Layers**: A spiral of side `n` has `(n - 1) / 2` rings around the center.
//! * **Center**: Lies on both diagonals and is counted once.
//!
//! ## Invariants
//!
//! * Both methods agree wherever neither overflows.
//! * `n` is validated (odd, `>= 1`) before any arithmetic.
//!
//! ## Non-goals
//!
//! * This module does not build the grid (see the evaluation layer).

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::ring::{constant, ring_corner_sum};
use crate::primitives::errors::NumericError;

const OP: &str = "diagonal_sum";

// ============================================================================
// Diagonal Method
// ============================================================================

/// Strategy for computing a spiral diagonal sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagonalMethod {
    /// Sum ring corners one ring at a time (default).
    #[default]
    Iterative,

    /// Evaluate the summed series directly.
    ///
    /// Its `4n^3` term overflows before the final sum does, so it reports
    /// `Overflow` for some `n` the iterative method still handles.
    ClosedForm,
}

impl DiagonalMethod {
    /// Sum both diagonals of the spiral of side `n`.
    pub fn compute<T: PrimInt>(self, n: T) -> Result<T, NumericError> {
        Validator::validate_side_length(n)?;

        match self {
            Self::Iterative => iterative_sum(n),
            Self::ClosedForm => closed_form_sum(n),
        }
    }
}

// ============================================================================
// Implementations
// ============================================================================

fn iterative_sum<T: PrimInt>(n: T) -> Result<T, NumericError> {
    let one = T::one();
    if n == one {
        return Ok(one);
    }

    let two = one + one;
    let layers = (n - one) / two;

    let mut sum = one;
    let mut k = one;
    while k <= layers {
        sum = sum
            .checked_add(&ring_corner_sum(k)?)
            .ok_or(NumericError::Overflow { operation: OP })?;
        k = k + one;
    }

    Ok(sum)
}

fn closed_form_sum<T: PrimInt>(n: T) -> Result<T, NumericError> {
    let overflow = NumericError::Overflow { operation: OP };
    let c = |v: u8| constant::<T>(v, OP);

    let n2 = n.checked_mul(&n).ok_or(overflow)?;
    let n3 = n2.checked_mul(&n).ok_or(overflow)?;

    let cubic = n3.checked_mul(&c(4)?).ok_or(overflow)?;
    let quadratic = n2.checked_mul(&c(3)?).ok_or(overflow)?;
    let linear = n.checked_mul(&c(8)?).ok_or(overflow)?;

    // n >= 1 keeps the numerator at least 15 before subtracting 9
    let numerator = cubic
        .checked_add(&quadratic)
        .and_then(|v| v.checked_add(&linear))
        .ok_or(overflow)?
        - c(9)?;

    Ok(numerator / c(6)?)
}
