/// Impurity measure used to score candidate splits.
///
/// Distributions are per-class weights indexed by encoded class
/// (see [`crate::core::LabelEncoder`]).
pub trait SplitCriterion {
    /// Short kebab-case name used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Impurity of a single class distribution, or `None` when the
    /// distribution carries no weight at all.
    fn impurity(&self, distribution: &[f64]) -> Option<f64>;

    /// Impurity reduction obtained by partitioning `pre_split_distribution`
    /// into `post_split_dists`.
    ///
    /// Each branch is weighted by its share of the post-split total. A branch
    /// with no weight contributes nothing. Returns `None` when the pre-split
    /// distribution is empty.
    fn merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> Option<f64> {
        let parent = self.impurity(pre_split_distribution)?;
        let total: f64 = post_split_dists
            .iter()
            .map(|d| d.iter().sum::<f64>())
            .sum();
        if total <= 0.0 {
            return None;
        }

        let mut weighted = 0.0;
        for dist in post_split_dists {
            let weight: f64 = dist.iter().sum();
            if let Some(impurity) = self.impurity(dist) {
                weighted += (weight / total) * impurity;
            }
        }
        Some(parent - weighted)
    }
}
