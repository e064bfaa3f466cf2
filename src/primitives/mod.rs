//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental types shared by every other layer:
//! - The crate-wide error type
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for domain and overflow failures.
pub mod errors;
