//! Numeric helpers

use crate::error::{GreetkitError, Result};

/// Arithmetic mean of `numbers`: plain sum divided by length.
pub fn average(numbers: &[f64]) -> Result<f64> {
    if numbers.is_empty() {
        return Err(GreetkitError::invalid_argument(
            "Cannot calculate average of empty list.",
        ));
    }

    let sum: f64 = numbers.iter().sum();
    Ok(sum / numbers.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_sequence() {
        assert_eq!(average(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_average_single_value() {
        assert_eq!(average(&[42.5]).unwrap(), 42.5);
    }

    #[test]
    fn test_average_with_negatives_and_duplicates() {
        assert_eq!(average(&[-2.0, 2.0, 2.0, -2.0]).unwrap(), 0.0);
        assert_eq!(average(&[-1.0, -2.0, -3.0]).unwrap(), -2.0);
    }

    #[test]
    fn test_average_empty_rejected() {
        let err = average(&[]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Cannot calculate average of empty list.");
    }

    #[test]
    fn test_average_uses_plain_float_division() {
        let numbers = [0.1, 0.2, 0.3];
        assert_eq!(average(&numbers).unwrap(), (0.1 + 0.2 + 0.3) / 3.0);
    }

    #[test]
    fn test_average_propagates_nan() {
        assert!(average(&[1.0, f64::NAN]).unwrap().is_nan());
    }

    #[test]
    fn test_is_idempotent() {
        let numbers = [3.5, 7.25, -1.0];
        assert_eq!(average(&numbers), average(&numbers));
    }
}
