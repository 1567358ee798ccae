//! Per-column min-max normalization.

use crate::config::Tolerance;

/// Rescale each column to [0, 1] using its empirical min/max over the batch.
///
/// Absolute tolerances follow the same affine map as their column, keeping
/// them comparable in normalized space. A degenerate column (every sample
/// ties, min == max) is shifted by its min instead of divided, leaving a
/// constant-zero column; relative and percentile tolerances are unitless and
/// pass through untouched.
pub fn rescale(columns: &mut [Vec<f64>], tolerances: &mut [Tolerance]) {
    for (column, tolerance) in columns.iter_mut().zip(tolerances.iter_mut()) {
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min < max {
            let span = max - min;
            for v in column.iter_mut() {
                *v = (*v - min) / span;
            }
            if let Tolerance::Absolute(t) = tolerance {
                *t = (*t - min) / span;
            }
        } else {
            for v in column.iter_mut() {
                *v -= min;
            }
            if let Tolerance::Absolute(t) = tolerance {
                *t -= min;
            }
        }
    }
}
