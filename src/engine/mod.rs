//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer guards the algorithms with domain validation:
//! - Spiral side lengths must be odd and at least 1
//! - Factoring targets must be at least 2
//! - Builder parameters may only be configured once
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;
