use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::core::Dataset;
use crate::error::SplitError;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit<L> {
    pub x_train: Vec<Vec<f64>>,
    pub x_test: Vec<Vec<f64>>,
    pub y_train: Vec<L>,
    pub y_test: Vec<L>,
}

/// Splits `x`/`y` into train and test sets while keeping each class's share
/// of the test set close to `test_size`.
///
/// Per class (in sorted label order) the row indices are shuffled with `rng`
/// and the first `round(len * test_size)` go to test, rounding half to even.
/// A class with more than one member always keeps at least one row in train,
/// and gets at least one test row when `test_size > 0`. Both outputs keep the
/// original row order.
pub fn stratified_split<L, R>(
    x: &[Vec<f64>],
    y: &[L],
    test_size: f64,
    rng: &mut R,
) -> Result<TrainTestSplit<L>, SplitError>
where
    L: Ord + Clone,
    R: Rng + ?Sized,
{
    if !(0.0..=1.0).contains(&test_size) {
        return Err(SplitError::InvalidParameter(format!(
            "test_size must be in [0, 1], got {test_size}"
        )));
    }
    Dataset::with_labels(x, y)?;

    let mut by_class: BTreeMap<&L, Vec<usize>> = BTreeMap::new();
    for (i, label) in y.iter().enumerate() {
        by_class.entry(label).or_default().push(i);
    }

    let mut train_indices = Vec::with_capacity(y.len());
    let mut test_indices = Vec::new();

    for indices in by_class.values_mut() {
        indices.shuffle(rng);

        let len = indices.len();
        let mut n_test = (len as f64 * test_size).round_ties_even() as usize;
        if n_test == len && len > 1 {
            n_test -= 1;
        }
        if n_test == 0 && len > 1 && test_size > 0.0 {
            n_test = 1;
        }

        test_indices.extend_from_slice(&indices[..n_test]);
        train_indices.extend_from_slice(&indices[n_test..]);
    }

    train_indices.sort_unstable();
    test_indices.sort_unstable();

    debug!(
        classes = by_class.len(),
        train = train_indices.len(),
        test = test_indices.len(),
        "stratified split"
    );

    Ok(TrainTestSplit {
        x_train: train_indices.iter().map(|&i| x[i].clone()).collect(),
        x_test: test_indices.iter().map(|&i| x[i].clone()).collect(),
        y_train: train_indices.iter().map(|&i| y[i].clone()).collect(),
        y_test: test_indices.iter().map(|&i| y[i].clone()).collect(),
    })
}

/// [`stratified_split`] with a `StdRng` seeded from `seed`.
pub fn stratified_split_seeded<L>(
    x: &[Vec<f64>],
    y: &[L],
    test_size: f64,
    seed: u64,
) -> Result<TrainTestSplit<L>, SplitError>
where
    L: Ord + Clone,
{
    let mut rng = StdRng::seed_from_u64(seed);
    stratified_split(x, y, test_size, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::imbalanced_three_class;

    fn count(labels: &[&str], which: &str) -> usize {
        labels.iter().filter(|&&l| l == which).count()
    }

    #[test]
    fn keeps_class_proportions() {
        let (x, y) = imbalanced_three_class();
        let split = stratified_split_seeded(&x, &y, 0.25, DEFAULT_SEED).unwrap();

        // 10 * .25 = 2.5 -> 2, 6 * .25 = 1.5 -> 2, 4 * .25 = 1
        assert_eq!(count(&split.y_test, "a"), 2);
        assert_eq!(count(&split.y_test, "b"), 2);
        assert_eq!(count(&split.y_test, "c"), 1);
        assert_eq!(split.y_train.len(), 15);
        assert_eq!(split.x_train.len(), split.y_train.len());
        assert_eq!(split.x_test.len(), split.y_test.len());
    }

    #[test]
    fn rows_stay_aligned_and_ordered() {
        let (x, y) = imbalanced_three_class();
        let split = stratified_split_seeded(&x, &y, 0.3, 7).unwrap();

        for (row, label) in split.x_train.iter().zip(&split.y_train) {
            assert_eq!(y[row[0] as usize], *label);
        }
        assert!(split.x_train.windows(2).all(|w| w[0][0] < w[1][0]));
        assert!(split.x_test.windows(2).all(|w| w[0][0] < w[1][0]));
    }

    #[test]
    fn same_seed_same_split() {
        let (x, y) = imbalanced_three_class();
        let a = stratified_split_seeded(&x, &y, 0.2, 99).unwrap();
        let b = stratified_split_seeded(&x, &y, 0.2, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn small_classes_follow_edge_rules() {
        let x = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]];
        let y = [0, 1, 1, 2, 2, 2];

        // test_size 1.0: singleton goes to test, larger classes keep one train row
        let split = stratified_split_seeded(&x, &y, 1.0, 1).unwrap();
        assert_eq!(split.y_test, vec![0, 1, 2, 2]);
        assert_eq!(split.y_train, vec![1, 2]);

        // tiny test_size still draws one row from each class of size > 1
        let split = stratified_split_seeded(&x, &y, 0.01, 1).unwrap();
        assert_eq!(split.y_test, vec![1, 2]);
        assert_eq!(split.y_train.len(), 4);

        let split = stratified_split_seeded(&x, &y, 0.0, 1).unwrap();
        assert!(split.y_test.is_empty());
        assert_eq!(split.x_train, x);
    }

    #[test]
    fn rejects_invalid_arguments() {
        let x = vec![vec![0.0], vec![1.0]];
        assert!(matches!(
            stratified_split_seeded(&x, &[0, 1], 1.5, 0).unwrap_err(),
            SplitError::InvalidParameter(_)
        ));
        assert!(matches!(
            stratified_split_seeded(&x, &[0, 1], f64::NAN, 0).unwrap_err(),
            SplitError::InvalidParameter(_)
        ));
        assert_eq!(
            stratified_split_seeded(&x, &[0], 0.5, 0).unwrap_err(),
            SplitError::LabelLengthMismatch { rows: 2, labels: 1 }
        );
    }
}
