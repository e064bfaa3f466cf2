//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides slow, literal reference constructions used to check
//! the closed-form algorithms:
//! - A fully materialized number-spiral grid
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Materialized number-spiral grid.
pub mod grid;
