//! # spiral-factor — Number-spiral diagonals and trial-division factoring
//!
//! Two small, exact integer computations, generic over every primitive
//! integer type and usable without `std`.
//!
//! ## Number spiral diagonals
//!
//! Writing 1 in the center of a grid and winding consecutive integers
//! outward clockwise gives a number spiral. For side 5:
//!
//! ```text
//! 21 22 23 24 25
//! 20  7  8  9 10
//! 19  6  1  2 11
//! 18  5  4  3 12
//! 17 16 15 14 13
//! ```
//!
//! The values on both diagonals sum to 101. Each square ring `k` around the
//! center has corners `(2k+1)^2`, `(2k+1)^2 - 2k`, `(2k+1)^2 - 4k` and
//! `(2k+1)^2 - 6k`, so the sum is accumulated ring by ring without building
//! the grid.
//!
//! ## Largest prime factor
//!
//! Trial division from 2 upward, dividing out each factor as often as it
//! divides before advancing. Whatever remains once the candidate exceeds the
//! square root of the working value is the largest prime factor.
//!
//! ## Quick Start
//!
//! ```rust
//! use spiral_factor::prelude::*;
//!
//! assert_eq!(diagonal_sum(1001u64)?, 669_171_001);
//! assert_eq!(largest_prime_factor(13_195u64)?, 29);
//!
//! let factors: Vec<u64> = prime_factors(360u64)?.collect();
//! assert_eq!(factors, vec![2, 2, 2, 3, 3, 5]);
//! # Result::<(), NumericError>::Ok(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use spiral_factor::prelude::*;
//!
//! let spiral = Spiral::new().method(ClosedForm).build()?;
//! assert_eq!(spiral.diagonal_sum(101u64)?, 692_101);
//!
//! let factorizer = Factorizer::new().strategy(OddOnly).build()?;
//! assert_eq!(factorizer.largest_prime_factor(21u32)?, 7);
//! # Result::<(), NumericError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Inputs outside the domain are rejected rather than producing a
//! meaningless value, and overflow is reported instead of wrapping:
//!
//! ```rust
//! use spiral_factor::prelude::*;
//!
//! assert_eq!(diagonal_sum(4u64), Err(NumericError::EvenSideLength(4)));
//! assert_eq!(largest_prime_factor(1u64), Err(NumericError::NoPrimeFactors(1)));
//! assert!(matches!(diagonal_sum(255u8), Err(NumericError::Overflow { .. })));
//! ```
//!
//! ## Features
//!
//! * `std` (default): implements `std::error::Error` for [`prelude::NumericError`].
//! * `dev`: exposes internal modules under `internals` for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - shared types.
//
// Contains the crate-wide error type.
mod primitives;

// Layer 2: Math - pure integer building blocks.
//
// Contains closed-form ring geometry and trial-division stepping.
mod math;

// Layer 3: Algorithms - core computations.
//
// Contains the diagonal sum methods and trial-division factorization.
mod algorithms;

// Layer 4: Evaluation - reference constructions.
//
// Contains the literal spiral grid used to check the ring-based sums.
mod evaluation;

// Layer 5: Engine - validation.
//
// Contains domain checks for side lengths, factoring targets and builders.
mod engine;

// High-level API.
//
// Provides free functions and the `Spiral`/`Factorizer` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use spiral_factor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        diagonal_sum, is_prime, largest_prime_factor, prime_factors,
        DiagonalMethod::{ClosedForm, Iterative},
        Factorizer as FactorizerConfig, FactorizerBuilder as Factorizer, NumericError,
        PrimeFactors, Spiral as SpiralConfig, SpiralBuilder as Spiral, SpiralGrid,
        TrialDivision::{OddOnly, Sequential},
    };
    pub use crate::api::{DiagonalMethod, TrialDivision};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation helpers.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
