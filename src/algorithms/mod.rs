//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the two core computations:
//! - Diagonal sums of odd-sided number spirals
//! - Largest prime factor and full factorization by trial division
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Spiral diagonal sums.
pub mod diagonal;

/// Trial-division factorization.
pub mod factor;
