//! Tests for the builder API.
//!
//! ## Test Organization
//!
//! 1. **Spiral** - Method selection and defaults
//! 2. **Factorizer** - Strategy selection and defaults
//! 3. **Duplicates** - Parameters configured twice

use spiral_factor::prelude::*;

// ============================================================================
// Spiral
// ============================================================================

/// Test the default spiral configuration.
#[test]
fn test_spiral_default() {
    let spiral = Spiral::new().build().unwrap();
    assert_eq!(spiral.method(), Iterative);
    assert_eq!(spiral.diagonal_sum(9u32).unwrap(), 537);
}

/// Test selecting the closed form.
#[test]
fn test_spiral_closed_form() {
    let spiral = Spiral::new().method(ClosedForm).build().unwrap();
    assert_eq!(spiral.method(), ClosedForm);
    assert_eq!(spiral.diagonal_sum(101u64).unwrap(), 692_101);
    assert_eq!(
        spiral.diagonal_sum(8u64),
        Err(NumericError::EvenSideLength(8))
    );
}

/// Test that a built spiral is shareable across threads.
#[test]
fn test_spiral_threads() {
    let spiral: SpiralConfig = Spiral::new().build().unwrap();
    let handles: Vec<_> = (0..4u64)
        .map(|i| std::thread::spawn(move || spiral.diagonal_sum(2 * i + 3).unwrap()))
        .collect();
    let sums: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sums, vec![25, 101, 261, 537]);
}

// ============================================================================
// Factorizer
// ============================================================================

/// Test the default factorizer configuration.
#[test]
fn test_factorizer_default() {
    let factorizer: FactorizerConfig = Factorizer::new().build().unwrap();
    assert_eq!(factorizer.strategy(), Sequential);
    assert_eq!(factorizer.largest_prime_factor(14u16).unwrap(), 7);
    assert!(factorizer.is_prime(13u16));
    assert!(!factorizer.is_prime(1u16));
}

/// Test the odd-only strategy.
#[test]
fn test_factorizer_odd_only() {
    let factorizer = Factorizer::new().strategy(OddOnly).build().unwrap();
    assert_eq!(factorizer.largest_prime_factor(18u64).unwrap(), 3);
    assert_eq!(factorizer.largest_prime_factor(49u64).unwrap(), 7);
    let factors: Vec<u64> = factorizer.prime_factors(84u64).unwrap().collect();
    assert_eq!(factors, vec![2, 2, 3, 7]);
    assert!(factorizer.is_prime(7919u64));
    assert!(!factorizer.is_prime(7917u64));
}

// ============================================================================
// Duplicates
// ============================================================================

/// Test rejection of a method set twice.
#[test]
fn test_spiral_duplicate_method() {
    let result = Spiral::new().method(Iterative).method(ClosedForm).build();
    assert_eq!(
        result,
        Err(NumericError::DuplicateParameter { parameter: "method" })
    );
}

/// Test rejection of a strategy set twice.
#[test]
fn test_factorizer_duplicate_strategy() {
    let result = Factorizer::new().strategy(OddOnly).strategy(OddOnly).build();
    assert_eq!(
        result,
        Err(NumericError::DuplicateParameter {
            parameter: "strategy"
        })
    );
}
