//! Trial-division stepping and primality testing.
//!
//! ## Purpose
//!
//! This module defines how trial division walks its candidate divisors and
//! provides the bound check and primality test built on that walk.
//!
//! ## Design notes
//!
//! * **Bound**: `f * f <= m` is evaluated as `f <= m / f`, so no squared
//!   intermediate is formed and the walk cannot overflow.
//! * **Strategies**: Sequential (every integer from 2) and odd-only.
//! * **Generics**: Generic over `PrimInt` types.
//!
//! ## Invariants
//!
//! * The first candidate is always 2.
//! * Candidates are strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not implement sieves or probabilistic tests.

// External dependencies
use num_traits::PrimInt;

// ============================================================================
// Trial Division Strategy
// ============================================================================

/// How trial division advances from one candidate divisor to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrialDivision {
    /// Try every integer 2, 3, 4, 5, ... (default).
    #[default]
    Sequential,

    /// Try 2, then only odd candidates 3, 5, 7, ...
    OddOnly,
}

impl TrialDivision {
    /// The first candidate divisor.
    #[inline]
    pub fn first_candidate<T: PrimInt>(self) -> T {
        T::one() + T::one()
    }

    /// The candidate following `candidate`.
    #[inline]
    pub fn advance<T: PrimInt>(self, candidate: T) -> T {
        let two = T::one() + T::one();
        match self {
            Self::Sequential => candidate + T::one(),
            Self::OddOnly if candidate == two => candidate + T::one(),
            Self::OddOnly => candidate + two,
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Whether `candidate * candidate <= target`, computed without squaring.
///
/// `candidate` must be positive.
#[inline]
pub fn within_bound<T: PrimInt>(candidate: T, target: T) -> bool {
    candidate <= target / candidate
}

/// Trial-division primality test. Values below 2 are not prime.
pub fn is_prime<T: PrimInt>(value: T, strategy: TrialDivision) -> bool {
    let mut candidate: T = strategy.first_candidate();
    if value < candidate {
        return false;
    }

    while within_bound(candidate, value) {
        if (value % candidate).is_zero() {
            return false;
        }
        candidate = strategy.advance(candidate);
    }

    true
}
