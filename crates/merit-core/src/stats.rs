//! Order statistics over index subsets.
//!
//! The region-shift stage repeatedly needs min/max/percentile of one
//! objective column restricted to the live domain of interest. These helpers
//! take the domain as an explicit index slice so every subset computation is
//! auditable per tier.

/// Minimum and maximum of `values` restricted to `domain`.
///
/// `domain` must be non-empty and all indices in bounds; the pipeline
/// guarantees both (the domain starts as the full index set and narrowing
/// never empties it).
pub fn min_max_over(values: &[f64], domain: &[usize]) -> (f64, f64) {
    debug_assert!(!domain.is_empty());
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &idx in domain {
        let v = values[idx];
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}

/// Maximum of `values` restricted to `domain`.
pub fn max_over(values: &[f64], domain: &[usize]) -> f64 {
    min_max_over(values, domain).1
}

/// The `q`-quantile (`q` in [0, 1]) of `values` restricted to `domain`,
/// using linear interpolation between order statistics.
///
/// Matches the standard linear-interpolation definition: the rank is
/// `q * (n - 1)` over the ascending sort of the subset, interpolating
/// between the two adjacent order statistics. The threshold comparisons
/// downstream are sensitive to this definition, so no approximate ranking
/// is used.
///
/// # Example
///
/// ```
/// use merit_core::stats::percentile_over;
///
/// let values = [10.0, 20.0, 30.0, 40.0];
/// let domain = [0, 1, 2, 3];
/// assert_eq!(percentile_over(&values, &domain, 0.5), 25.0);
/// assert_eq!(percentile_over(&values, &domain, 0.0), 10.0);
/// assert_eq!(percentile_over(&values, &domain, 1.0), 40.0);
/// ```
pub fn percentile_over(values: &[f64], domain: &[usize], q: f64) -> f64 {
    debug_assert!(!domain.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    let mut subset: Vec<f64> = domain.iter().map(|&idx| values[idx]).collect();
    subset.sort_by(f64::total_cmp);

    let n = subset.len();
    if n == 1 {
        return subset[0];
    }

    let rank = q * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return subset[lower];
    }
    let frac = rank - lower as f64;
    subset[lower] + frac * (subset[upper] - subset[lower])
}
