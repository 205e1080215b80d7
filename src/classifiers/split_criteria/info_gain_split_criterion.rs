use crate::classifiers::split_criteria::split_criterion::SplitCriterion;

/// Entropy-based criterion (information gain, in bits).
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoGainSplitCriterion {}

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    pub fn compute_entropy(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        let mut entropy = 0.0;
        for &w in distribution {
            if w > 0.0 {
                let p = w / distribution_sum_of_weights;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn name(&self) -> &'static str {
        "info-gain-split"
    }

    fn impurity(&self, distribution: &[f64]) -> Option<f64> {
        let total: f64 = distribution.iter().sum();
        if total <= 0.0 {
            return None;
        }
        Some(self.compute_entropy(distribution, total))
    }
}
