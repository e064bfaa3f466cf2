use spiral_factor::prelude::*;

#[test]
fn test_numeric_error_display() {
    // NonPositiveSideLength
    let err = NumericError::NonPositiveSideLength(-3);
    assert_eq!(format!("{}", err), "Invalid side length: -3 (must be >= 1)");

    // EvenSideLength
    let err = NumericError::EvenSideLength(4);
    assert_eq!(format!("{}", err), "Invalid side length: 4 (must be odd)");

    // NegativeRingIndex
    let err = NumericError::NegativeRingIndex(-2);
    assert_eq!(format!("{}", err), "Invalid ring index: -2 (must be >= 0)");

    // NoPrimeFactors
    let err = NumericError::NoPrimeFactors(1);
    assert_eq!(
        format!("{}", err),
        "Invalid factoring target: 1 (must be >= 2)"
    );

    // Overflow
    let err = NumericError::Overflow {
        operation: "diagonal_sum",
    };
    assert_eq!(format!("{}", err), "Arithmetic overflow in diagonal_sum");

    // DuplicateParameter
    let err = NumericError::DuplicateParameter { parameter: "method" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'method' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_numeric_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&NumericError::NoPrimeFactors(0));
}

#[test]
fn test_large_unsigned_saturates() {
    assert_eq!(
        diagonal_sum(u128::MAX - 1),
        Err(NumericError::EvenSideLength(i128::MAX))
    );
}
