use crate::classifiers::split_criteria::split_criterion::SplitCriterion;

#[derive(Debug, Clone, Copy, Default)]
pub struct GiniSplitCriterion {}

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    /// `1 - Σ (w_k / total)²`.
    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        let sum_of_squares: f64 = distribution
            .iter()
            .map(|w| (w / distribution_sum_of_weights).powi(2))
            .sum();
        1.0 - sum_of_squares
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn name(&self) -> &'static str {
        "gini-split"
    }

    fn impurity(&self, distribution: &[f64]) -> Option<f64> {
        let total: f64 = distribution.iter().sum();
        if total <= 0.0 {
            return None;
        }
        Some(self.compute_gini(distribution, total))
    }
}
