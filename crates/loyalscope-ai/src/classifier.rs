//! The classifier boundary.

use loyalscope_core::FeatureVector;

use crate::ClassifierError;

/// A pre-trained multi-label loyalty classifier.
///
/// Implementations are loaded once and shared read-only, so they must be
/// safe to call from several threads at once.
pub trait LoyaltyClassifier: Send + Sync {
    /// Predict one class index (0 = Low, 1 = Neutral, 2 = High) per loyalty
    /// dimension, in Rational, Emotional, Behavioral order.
    fn predict(&self, features: &FeatureVector) -> Result<[i64; 3], ClassifierError>;

    /// Version string from the model manifest.
    fn model_version(&self) -> &str;
}

/// Validate a raw label output of shape `[3]` or `[1, 3]`.
pub fn classes_from_output(shape: &[i64], data: &[i64]) -> Result<[i64; 3], ClassifierError> {
    let shape_ok = matches!(shape, [3] | [1, 3]);
    if !shape_ok || data.len() != 3 {
        return Err(ClassifierError::InvalidOutput(format!(
            "expected 3 labels in shape [1, 3], got shape {shape:?} with {} values",
            data.len()
        )));
    }

    if let Some(bad) = data.iter().find(|c| !(0..=2).contains(*c)) {
        return Err(ClassifierError::InvalidOutput(format!(
            "class index {bad} outside 0..=2"
        )));
    }

    Ok([data[0], data[1], data[2]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_row_and_flat_shapes() {
        assert_eq!(classes_from_output(&[1, 3], &[0, 1, 2]).unwrap(), [0, 1, 2]);
        assert_eq!(classes_from_output(&[3], &[2, 2, 2]).unwrap(), [2, 2, 2]);
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(classes_from_output(&[2, 3], &[0, 1, 2, 0, 1, 2]).is_err());
        assert!(classes_from_output(&[1, 2], &[0, 1]).is_err());
        assert!(classes_from_output(&[1, 3], &[0, 1]).is_err());
    }

    #[test]
    fn rejects_out_of_range_class() {
        let err = classes_from_output(&[1, 3], &[0, 3, 1]).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidOutput(_)));
        assert!(err.to_string().contains('3'), "{err}");
        assert!(classes_from_output(&[3], &[-1, 0, 0]).is_err());
    }
}
