use thiserror::Error;

/// Errors raised when the inputs handed to the split finder or the
/// preprocessing helpers do not have a usable shape.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("dataset rows have no features")]
    NoFeatures,

    #[error("row {row} has {found} features, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("label vector has {labels} entries but dataset has {rows} rows")]
    LabelLengthMismatch { rows: usize, labels: usize },

    #[error("non-finite value at row {row}, feature {feature}")]
    NonFiniteValue { row: usize, feature: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl SplitError {
    /// `true` for the variants describing malformed dataset shape or content.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SplitError::InvalidParameter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_mention_positions() {
        let e = SplitError::RaggedRow {
            row: 3,
            expected: 2,
            found: 1,
        };
        assert_eq!(e.to_string(), "row 3 has 1 features, expected 2");

        let e = SplitError::LabelLengthMismatch { rows: 4, labels: 5 };
        assert!(e.to_string().contains("5 entries"));
    }

    #[test]
    fn invalid_parameter_is_not_invalid_input() {
        assert!(SplitError::EmptyDataset.is_invalid_input());
        assert!(SplitError::NonFiniteValue { row: 0, feature: 0 }.is_invalid_input());
        assert!(!SplitError::InvalidParameter("x".into()).is_invalid_input());
    }
}
