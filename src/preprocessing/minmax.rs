use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::error::SplitError;

/// Floor applied to `max - min` so constant slices scale to zero instead of
/// dividing by zero.
pub const DEFAULT_EPS: f64 = 1e-12;

/// Direction along which min and max are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// One min/max per feature column.
    #[default]
    Columns,
    /// One min/max per row.
    Rows,
}

/// Rescales `x` into `[0, 1]` with `(v - min) / max(max - min, eps)`.
pub fn minmax_scale(x: &[Vec<f64>], axis: Axis, eps: f64) -> Result<Vec<Vec<f64>>, SplitError> {
    check_eps(eps)?;
    let dataset = Dataset::new(x)?;

    match axis {
        Axis::Rows => Ok(dataset
            .rows()
            .iter()
            .map(|row| scale_slice(row, eps))
            .collect()),
        Axis::Columns => {
            let ranges: Vec<(f64, f64)> = (0..dataset.number_of_features())
                .map(|f| min_max(dataset.rows().iter().map(|row| row[f])))
                .collect();

            Ok(dataset
                .rows()
                .iter()
                .map(|row| {
                    row.iter()
                        .zip(&ranges)
                        .map(|(&v, &(min, max))| (v - min) / (max - min).max(eps))
                        .collect()
                })
                .collect())
        }
    }
}

/// One-dimensional [`minmax_scale`].
pub fn minmax_scale_vec(values: &[f64], eps: f64) -> Result<Vec<f64>, SplitError> {
    check_eps(eps)?;
    if values.is_empty() {
        return Err(SplitError::EmptyDataset);
    }
    if let Some(feature) = values.iter().position(|v| !v.is_finite()) {
        return Err(SplitError::NonFiniteValue { row: 0, feature });
    }
    Ok(scale_slice(values, eps))
}

fn check_eps(eps: f64) -> Result<(), SplitError> {
    if eps.is_finite() && eps > 0.0 {
        Ok(())
    } else {
        Err(SplitError::InvalidParameter(format!(
            "eps must be a positive finite number, got {eps}"
        )))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn scale_slice(values: &[f64], eps: f64) -> Vec<f64> {
    let (min, max) = min_max(values.iter().copied());
    let denom = (max - min).max(eps);
    values.iter().map(|&v| (v - min) / denom).collect()
}
