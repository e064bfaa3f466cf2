//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure integer building blocks used by the algorithms:
//! - Closed-form ring geometry of the number spiral
//! - Trial-division stepping and primality testing
//!
//! These are reusable mathematical building blocks with no validation logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ring side lengths, corner values, and corner sums.
pub mod ring;

/// Trial-division candidate stepping and primality.
pub mod trial;
