//! Closed-form geometry of number-spiral rings.
//!
//! ## Purpose
//!
//! This module computes the corner values of the concentric square rings
//! that make up a number spiral, without materializing the grid.
//!
//! ## Design notes
//!
//! * **Closed form**: The largest corner of ring `k` is `(2k+1)^2`; the other
//!   three corners step down by `2k` each.
//! * **Checked**: Every multiplication and addition is overflow-checked.
//! * **Generics**: Generic over `PrimInt` types.
//!
//! ## Key concepts
//!
//! * **Ring 0**: The single center cell holding 1.
//! * **Ring k**: The square shell of outer side `2k+1`.
//! * **Corner sum**: `16k^2 + 4k + 4` for `k >= 1`.
//!
//! ## Invariants
//!
//! * Corners are returned in descending order.
//! * `ring_corner_sum(k)` equals the sum of `ring_corners(k)` for `k >= 1`.
//! * Negative ring indices are rejected.
//!
//! ## Non-goals
//!
//! * This module does not validate ring indices against a side length.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::NumericError;

// ============================================================================
// Helpers
// ============================================================================

/// Lift a small constant into `T`, reporting overflow for narrow types.
#[inline]
pub(crate) fn constant<T: PrimInt>(value: u8, operation: &'static str) -> Result<T, NumericError> {
    T::from(value).ok_or(NumericError::Overflow { operation })
}

// ============================================================================
// Ring Geometry
// ============================================================================

/// Outer side length of ring `k` (`k >= 0`), i.e. `2k + 1`.
pub fn ring_side<T: PrimInt>(k: T) -> Result<T, NumericError> {
    const OP: &str = "ring_side";
    Validator::validate_ring_index(k)?;

    let two: T = constant(2, OP)?;
    two.checked_mul(&k)
        .and_then(|v| v.checked_add(&T::one()))
        .ok_or(NumericError::Overflow { operation: OP })
}

/// The four corner values of ring `k` (`k >= 0`), largest first.
///
/// For ring 0 all four entries are the center value 1.
pub fn ring_corners<T: PrimInt>(k: T) -> Result<[T; 4], NumericError> {
    const OP: &str = "ring_corners";
    let overflow = NumericError::Overflow { operation: OP };

    // rejects k < 0
    let side = ring_side(k)?;
    let top = side.checked_mul(&side).ok_or(overflow)?;
    let step = k.checked_add(&k).ok_or(overflow)?;

    // top >= 6k + 1 for k >= 0, so none of these underflow
    let second = top - step;
    let third = second - step;
    let fourth = third - step;

    Ok([top, second, third, fourth])
}

/// Sum of the four corners of ring `k` (`k >= 0`): `16k^2 + 4k + 4`.
///
/// Ring 0 is the center cell, counted once, so its sum is 1.
pub fn ring_corner_sum<T: PrimInt>(k: T) -> Result<T, NumericError> {
    const OP: &str = "ring_corner_sum";
    let overflow = NumericError::Overflow { operation: OP };

    Validator::validate_ring_index(k)?;

    if k.is_zero() {
        return Ok(T::one());
    }

    let four: T = constant(4, OP)?;
    let sixteen: T = constant(16, OP)?;

    let quadratic = k
        .checked_mul(&k)
        .and_then(|k2| k2.checked_mul(&sixteen))
        .ok_or(overflow)?;
    let linear = k.checked_mul(&four).ok_or(overflow)?;

    quadratic
        .checked_add(&linear)
        .and_then(|v| v.checked_add(&four))
        .ok_or(overflow)
}
