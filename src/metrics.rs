//! Derived comparison metrics over aligned measurement sequences.

use crate::error::DataError;

/// Element-wise `b - a`.
pub fn element_wise_difference(a: &[f64], b: &[f64]) -> Result<Vec<f64>, DataError> {
    check_aligned(a, b)?;
    Ok(a.iter().zip(b).map(|(a, b)| b - a).collect())
}

/// Element-wise `b / a`.
pub fn element_wise_ratio(a: &[f64], b: &[f64]) -> Result<Vec<f64>, DataError> {
    check_aligned(a, b)?;
    Ok(a.iter().zip(b).map(|(a, b)| b / a).collect())
}

fn check_aligned(a: &[f64], b: &[f64]) -> Result<(), DataError> {
    if a.len() != b.len() {
        return Err(DataError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_is_element_wise() {
        let leanimt = [1.0, 2.0, 3.0];
        let smt = [2.0, 4.0, 9.0];
        assert_eq!(
            element_wise_difference(&leanimt, &smt).unwrap(),
            vec![1.0, 2.0, 6.0]
        );
    }

    #[test]
    fn ratio_is_element_wise() {
        let leanimt = [1.0, 2.0, 3.0];
        let smt = [2.0, 4.0, 9.0];
        assert_eq!(
            element_wise_ratio(&leanimt, &smt).unwrap(),
            vec![2.0, 2.0, 3.0]
        );
    }

    #[test]
    fn misaligned_sequences_are_rejected() {
        let err = element_wise_ratio(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            DataError::LengthMismatch { left: 2, right: 1 }
        ));
    }
}
