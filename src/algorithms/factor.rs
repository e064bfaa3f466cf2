//! Largest prime factor and prime factorization by trial division.
//!
//! ## Purpose
//!
//! This module factors integers by dividing out the smallest remaining
//! candidate repeatedly before advancing, which strips prime factors in
//! non-decreasing order.
//!
//! ## Design notes
//!
//! * **Progressive reduction**: The working value shrinks as factors are
//!   divided out, so the loop bound tightens as it runs.
//! * **Overflow-free**: The `f^2 <= m` bound never forms the square.
//! * **Generics**: Generic over `PrimInt` types.
//!
//! ## Key concepts
//!
//! * **Remainder is prime**: Once `f^2 > m`, any composite `m` would have had
//!   a divisor `<= sqrt(m)` already divided out, so `m` is prime.
//! * **Largest last**: All smaller prime factors are removed first, so the
//!   remainder is the largest prime factor.
//!
//! ## Invariants
//!
//! * The factoring target is validated (`>= 2`) before any arithmetic.
//! * [`PrimeFactors`] yields primes in non-decreasing order whose product is
//!   the original value.
//!
//! ## Non-goals
//!
//! * This module does not implement Pollard rho, ECM, or other sub-sqrt methods.

// External dependencies
use core::iter::FusedIterator;
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::trial::{within_bound, TrialDivision};
use crate::primitives::errors::NumericError;

// ============================================================================
// Largest Prime Factor
// ============================================================================

/// Largest prime factor of `value` (`value >= 2`).
///
/// A prime `value` is returned unchanged.
pub fn largest_prime_factor<T: PrimInt>(
    value: T,
    strategy: TrialDivision,
) -> Result<T, NumericError> {
    Validator::validate_factor_target(value)?;

    let mut factor: T = strategy.first_candidate();
    let mut remaining = value;

    while within_bound(factor, remaining) {
        if (remaining % factor).is_zero() {
            // same factor may divide again
            remaining = remaining / factor;
        } else {
            factor = strategy.advance(factor);
        }
    }

    Ok(remaining)
}

// ============================================================================
// Prime Factors Iterator
// ============================================================================

/// Iterator over the prime factors of a value, smallest first, with
/// multiplicity.
///
/// `12` yields `2, 2, 3`; a prime `p` yields just `p`.
#[derive(Debug, Clone)]
pub struct PrimeFactors<T: PrimInt> {
    remaining: T,
    candidate: T,
    strategy: TrialDivision,
}

impl<T: PrimInt> PrimeFactors<T> {
    /// Start factoring `value` (`value >= 2`).
    pub fn new(value: T, strategy: TrialDivision) -> Result<Self, NumericError> {
        Validator::validate_factor_target(value)?;

        Ok(Self {
            remaining: value,
            candidate: strategy.first_candidate(),
            strategy,
        })
    }

    /// The cofactor not yet yielded.
    pub fn remaining(&self) -> T {
        self.remaining
    }
}

impl<T: PrimInt> Iterator for PrimeFactors<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining <= T::one() {
            return None;
        }

        while within_bound(self.candidate, self.remaining) {
            if (self.remaining % self.candidate).is_zero() {
                self.remaining = self.remaining / self.candidate;
                return Some(self.candidate);
            }
            self.candidate = self.strategy.advance(self.candidate);
        }

        let last = self.remaining;
        self.remaining = T::one();
        Some(last)
    }
}

impl<T: PrimInt> FusedIterator for PrimeFactors<T> {}
