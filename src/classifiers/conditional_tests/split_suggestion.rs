use crate::classifiers::conditional_tests::ConditionalTest;
use crate::classifiers::conditional_tests::NumericThresholdTest;
use serde::Serialize;
use std::cmp::Ordering;

/// The best split found for a dataset: the threshold test, its merit and the
/// class distributions it produces (`[left, right]`).
///
/// Each distribution is indexed by encoded class, where classes are numbered
/// in the order their labels first appear in `y`. Refit a
/// [`LabelEncoder`](crate::core::LabelEncoder) on the same labels to map an
/// index back to its label.
#[derive(Debug, Clone, Serialize)]
pub struct SplitSuggestion {
    split_test: NumericThresholdTest,
    resulting_class_distribution: Vec<Vec<f64>>,
    merit: f64,
}

impl SplitSuggestion {
    pub fn new(
        split_test: NumericThresholdTest,
        resulting_class_distribution: Vec<Vec<f64>>,
        merit: f64,
    ) -> Self {
        Self {
            split_test,
            resulting_class_distribution,
            merit,
        }
    }

    pub fn split_test(&self) -> &NumericThresholdTest {
        &self.split_test
    }

    pub fn feature_index(&self) -> usize {
        self.split_test.feature_index()
    }

    pub fn threshold(&self) -> f64 {
        self.split_test.threshold()
    }

    pub fn merit(&self) -> f64 {
        self.merit
    }

    /// Per-branch class counts, in first-seen label order.
    pub fn resulting_class_distribution(&self) -> &[Vec<f64>] {
        &self.resulting_class_distribution
    }

    pub fn number_of_splits(&self) -> usize {
        self.resulting_class_distribution.len()
    }

    pub fn resulting_class_distribution_from_split(&self, split_index: usize) -> Option<&[f64]> {
        self.resulting_class_distribution
            .get(split_index)
            .map(Vec::as_slice)
    }

    /// `(feature_index, threshold)`.
    pub fn as_pair(&self) -> (usize, f64) {
        (self.feature_index(), self.threshold())
    }

    /// Row indices routed to the left and right branch. Rows whose outcome is
    /// unknown are left out of both.
    pub fn partition(&self, rows: &[Vec<f64>]) -> (Vec<usize>, Vec<usize>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            match self.split_test.branch_for_row(row) {
                Some(0) => left.push(i),
                Some(_) => right.push(i),
                None => {}
            }
        }
        (left, right)
    }
}

impl PartialEq for SplitSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.merit == other.merit
    }
}

impl PartialOrd for SplitSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.merit.partial_cmp(&other.merit)
    }
}
