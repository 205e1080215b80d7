use std::hash::Hash;

use tracing::{debug, trace};

use crate::classifiers::conditional_tests::{NumericThresholdTest, SplitSuggestion};
use crate::classifiers::split_criteria::{GiniSplitCriterion, SplitCriterion};
use crate::core::{Dataset, LabelEncoder, class_distribution};
use crate::error::SplitError;

/// A candidate must beat the current best merit by more than this to replace
/// it, so the first split found wins on near-ties.
pub const TIE_EPSILON: f64 = 1e-9;

const INITIAL_BEST_MERIT: f64 = -1.0;

/// Exhaustive search for the best binary `feature <= threshold` split.
///
/// Features are scanned in ascending index order. Within a feature, the
/// candidate thresholds are the midpoints between consecutive distinct
/// observed values, visited in ascending order. A candidate replaces the
/// current best only when its merit exceeds it by more than the tie epsilon.
pub struct SplitFinder {
    criterion: Box<dyn SplitCriterion>,
    tie_epsilon: f64,
}

impl SplitFinder {
    pub fn new(criterion: Box<dyn SplitCriterion>, tie_epsilon: f64) -> Self {
        Self {
            criterion,
            tie_epsilon,
        }
    }

    pub fn criterion(&self) -> &dyn SplitCriterion {
        self.criterion.as_ref()
    }

    pub fn tie_epsilon(&self) -> f64 {
        self.tie_epsilon
    }

    /// Best split for `x`/`y`, or `Ok(None)` when the labels are already
    /// pure or every feature is constant.
    pub fn best_split<L>(
        &self,
        x: &[Vec<f64>],
        y: &[L],
    ) -> Result<Option<SplitSuggestion>, SplitError>
    where
        L: Eq + Hash + Clone,
    {
        let dataset = Dataset::with_labels(x, y)?;
        let (encoder, classes) = LabelEncoder::fit(y);
        let number_of_classes = encoder.number_of_classes();

        if number_of_classes < 2 {
            debug!(rows = dataset.number_of_rows(), "labels are pure, nothing to split");
            return Ok(None);
        }

        let pre_split = class_distribution(classes.iter().copied(), number_of_classes);

        let mut best: Option<SplitSuggestion> = None;
        let mut best_merit = INITIAL_BEST_MERIT;

        for feature in 0..dataset.number_of_features() {
            let values = dataset.distinct_sorted_values(feature);
            if values.len() < 2 {
                debug!(feature, "constant feature skipped");
                continue;
            }

            for pair in values.windows(2) {
                let threshold = f64::midpoint(pair[0], pair[1]);
                let post_split = partition_distributions(
                    &dataset,
                    &classes,
                    number_of_classes,
                    feature,
                    threshold,
                );

                let Some(merit) = self.criterion.merit_of_split(&pre_split, &post_split) else {
                    continue;
                };
                trace!(feature, threshold, merit, "candidate split");

                if merit > best_merit + self.tie_epsilon {
                    best_merit = merit;
                    best = Some(SplitSuggestion::new(
                        NumericThresholdTest::new(feature, threshold),
                        post_split,
                        merit,
                    ));
                }
            }

            debug!(
                feature,
                candidates = values.len() - 1,
                best_merit,
                "feature scanned"
            );
        }

        match &best {
            Some(s) => debug!(
                criterion = self.criterion.name(),
                feature = s.feature_index(),
                threshold = s.threshold(),
                merit = s.merit(),
                "best split found"
            ),
            None => debug!("every feature is constant, no split found"),
        }

        Ok(best)
    }
}

impl Default for SplitFinder {
    fn default() -> Self {
        Self::new(Box::new(GiniSplitCriterion::new()), TIE_EPSILON)
    }
}

/// Class distributions of the rows at or below (`[0]`) and above (`[1]`)
/// `threshold` on `feature`.
fn partition_distributions(
    dataset: &Dataset<'_>,
    classes: &[usize],
    number_of_classes: usize,
    feature: usize,
    threshold: f64,
) -> Vec<Vec<f64>> {
    let mut left = vec![0.0; number_of_classes];
    let mut right = vec![0.0; number_of_classes];
    for (row, &class) in dataset.rows().iter().zip(classes) {
        if row[feature] <= threshold {
            left[class] += 1.0;
        } else {
            right[class] += 1.0;
        }
    }
    vec![left, right]
}

/// Best Gini split of `x` by `y` as `(feature_index, threshold)`.
///
/// Returns `Ok(None)` when no split exists (pure labels or constant
/// features). Malformed input is reported as a [`SplitError`].
pub fn find_best_split<L>(x: &[Vec<f64>], y: &[L]) -> Result<Option<(usize, f64)>, SplitError>
where
    L: Eq + Hash + Clone,
{
    Ok(SplitFinder::default()
        .best_split(x, y)?
        .map(|s| s.as_pair()))
}
