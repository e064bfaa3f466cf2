//! High-level API for spiral diagonal sums and prime factorization.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: free functions with
//! default settings, and fluent builders for choosing a computation method.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Free functions cover the common case.
//! * **Validated**: Builders reject parameters configured more than once.
//! * **Type-Safe**: Generic over `PrimInt` types for flexible width.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SpiralBuilder`] or [`FactorizerBuilder`] via `::new()`.
//! 2. Chain configuration methods (`.method()`, `.strategy()`).
//! 3. Call `.build()` to obtain a reusable [`Spiral`] or [`Factorizer`].

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::factor;
use crate::engine::validator::Validator;
use crate::math::trial;

// Publicly re-exported types
pub use crate::algorithms::diagonal::DiagonalMethod;
pub use crate::algorithms::factor::PrimeFactors;
pub use crate::evaluation::grid::SpiralGrid;
pub use crate::math::trial::TrialDivision;
pub use crate::primitives::errors::NumericError;

// ============================================================================
// Free Functions
// ============================================================================

/// Sum both diagonals of the number spiral of side `n` (odd, `>= 1`).
///
/// ```
/// use spiral_factor::prelude::*;
///
/// assert_eq!(diagonal_sum(5u64)?, 101);
/// # Result::<(), NumericError>::Ok(())
/// ```
pub fn diagonal_sum<T: PrimInt>(n: T) -> Result<T, NumericError> {
    DiagonalMethod::default().compute(n)
}

/// Largest prime factor of `value` (`value >= 2`).
///
/// ```
/// use spiral_factor::prelude::*;
///
/// assert_eq!(largest_prime_factor(600_851_475_143u64)?, 6857);
/// # Result::<(), NumericError>::Ok(())
/// ```
pub fn largest_prime_factor<T: PrimInt>(value: T) -> Result<T, NumericError> {
    factor::largest_prime_factor(value, TrialDivision::default())
}

/// Prime factors of `value` (`value >= 2`), smallest first, with multiplicity.
pub fn prime_factors<T: PrimInt>(value: T) -> Result<PrimeFactors<T>, NumericError> {
    PrimeFactors::new(value, TrialDivision::default())
}

/// Whether `value` is prime.
pub fn is_prime<T: PrimInt>(value: T) -> bool {
    trial::is_prime(value, TrialDivision::default())
}

// ============================================================================
// Spiral
// ============================================================================

/// Fluent builder for [`Spiral`].
#[derive(Debug, Clone, Default)]
pub struct SpiralBuilder {
    /// Diagonal sum method (default: Iterative).
    pub method: Option<DiagonalMethod>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SpiralBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagonal sum method.
    pub fn method(mut self, method: DiagonalMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Validate the configuration and build a [`Spiral`].
    pub fn build(self) -> Result<Spiral, NumericError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Spiral {
            method: self.method.unwrap_or_default(),
        })
    }
}

/// Configured spiral diagonal summer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spiral {
    method: DiagonalMethod,
}

impl Spiral {
    /// The configured method.
    pub fn method(&self) -> DiagonalMethod {
        self.method
    }

    /// Sum both diagonals of the spiral of side `n`.
    pub fn diagonal_sum<T: PrimInt>(&self, n: T) -> Result<T, NumericError> {
        self.method.compute(n)
    }
}

// ============================================================================
// Factorizer
// ============================================================================

/// Fluent builder for [`Factorizer`].
#[derive(Debug, Clone, Default)]
pub struct FactorizerBuilder {
    /// Trial division strategy (default: Sequential).
    pub strategy: Option<TrialDivision>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl FactorizerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trial division strategy.
    pub fn strategy(mut self, strategy: TrialDivision) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Validate the configuration and build a [`Factorizer`].
    pub fn build(self) -> Result<Factorizer, NumericError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Factorizer {
            strategy: self.strategy.unwrap_or_default(),
        })
    }
}

/// Configured trial-division factorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Factorizer {
    strategy: TrialDivision,
}

impl Factorizer {
    /// The configured strategy.
    pub fn strategy(&self) -> TrialDivision {
        self.strategy
    }

    /// Largest prime factor of `value` (`value >= 2`).
    pub fn largest_prime_factor<T: PrimInt>(&self, value: T) -> Result<T, NumericError> {
        factor::largest_prime_factor(value, self.strategy)
    }

    /// Prime factors of `value`, smallest first, with multiplicity.
    pub fn prime_factors<T: PrimInt>(&self, value: T) -> Result<PrimeFactors<T>, NumericError> {
        PrimeFactors::new(value, self.strategy)
    }

    /// Whether `value` is prime.
    pub fn is_prime<T: PrimInt>(&self, value: T) -> bool {
        trial::is_prime(value, self.strategy)
    }
}
