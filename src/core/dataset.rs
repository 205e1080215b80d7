use crate::error::SplitError;

/// Read-only, validated view over a row-major numeric dataset.
///
/// Construction checks the shape once (non-empty, at least one feature,
/// equal row lengths, finite values) so the rest of the crate can index
/// rows without further bounds bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    rows: &'a [Vec<f64>],
    number_of_features: usize,
}

impl<'a> Dataset<'a> {
    pub fn new(rows: &'a [Vec<f64>]) -> Result<Self, SplitError> {
        let first = rows.first().ok_or(SplitError::EmptyDataset)?;
        let number_of_features = first.len();
        if number_of_features == 0 {
            return Err(SplitError::NoFeatures);
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != number_of_features {
                return Err(SplitError::RaggedRow {
                    row: row_index,
                    expected: number_of_features,
                    found: row.len(),
                });
            }
            if let Some(feature) = row.iter().position(|v| !v.is_finite()) {
                return Err(SplitError::NonFiniteValue {
                    row: row_index,
                    feature,
                });
            }
        }

        Ok(Self {
            rows,
            number_of_features,
        })
    }

    /// Validates `labels` against this dataset's row count.
    pub fn with_labels<L>(rows: &'a [Vec<f64>], labels: &[L]) -> Result<Self, SplitError> {
        let dataset = Self::new(rows)?;
        if labels.len() != dataset.number_of_rows() {
            return Err(SplitError::LabelLengthMismatch {
                rows: dataset.number_of_rows(),
                labels: labels.len(),
            });
        }
        Ok(dataset)
    }

    #[inline]
    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn number_of_features(&self) -> usize {
        self.number_of_features
    }

    #[inline]
    pub fn rows(&self) -> &'a [Vec<f64>] {
        self.rows
    }

    /// Distinct values observed for `feature`, ascending.
    ///
    /// `-0.0` and `0.0` compare equal and collapse into one entry.
    pub fn distinct_sorted_values(&self, feature: usize) -> Vec<f64> {
        let mut values: Vec<f64> = self
            .rows
            .iter()
            .filter_map(|row| row.get(feature).copied())
            .collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_featureless() {
        let empty: Vec<Vec<f64>> = vec![];
        assert_eq!(Dataset::new(&empty).unwrap_err(), SplitError::EmptyDataset);

        let no_features = vec![vec![], vec![]];
        assert_eq!(
            Dataset::new(&no_features).unwrap_err(),
            SplitError::NoFeatures
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]];
        assert_eq!(
            Dataset::new(&rows).unwrap_err(),
            SplitError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_nan_and_infinity() {
        let rows = vec![vec![1.0, 2.0], vec![f64::NAN, 4.0]];
        assert_eq!(
            Dataset::new(&rows).unwrap_err(),
            SplitError::NonFiniteValue { row: 1, feature: 0 }
        );

        let rows = vec![vec![1.0, f64::INFINITY]];
        assert_eq!(
            Dataset::new(&rows).unwrap_err(),
            SplitError::NonFiniteValue { row: 0, feature: 1 }
        );
    }

    #[test]
    fn label_length_must_match() {
        let rows = vec![vec![1.0], vec![2.0]];
        let err = Dataset::with_labels(&rows, &[0, 1, 2]).unwrap_err();
        assert_eq!(err, SplitError::LabelLengthMismatch { rows: 2, labels: 3 });
        assert!(Dataset::with_labels(&rows, &["a", "b"]).is_ok());
    }

    #[test]
    fn distinct_values_are_sorted_and_deduplicated() {
        let rows = vec![
            vec![3.0, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 1.0],
            vec![3.0, 1.0],
            vec![-0.0, 1.0],
            vec![0.0, 1.0],
        ];
        let ds = Dataset::new(&rows).unwrap();
        assert_eq!(ds.number_of_rows(), 6);
        assert_eq!(ds.number_of_features(), 2);
        assert_eq!(ds.distinct_sorted_values(0), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(ds.distinct_sorted_values(1), vec![1.0]);
        assert!(ds.distinct_sorted_values(7).is_empty());
    }
}
