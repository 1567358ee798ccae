//! Region shift: the hierarchy-encoding core.
//!
//! Walks the tiers from most to least important, maintaining the domain of
//! interest (the samples still tied at the current tier) and a running shift
//! accumulator that pushes each tier's numeric range strictly below the
//! ranges of all higher-priority tiers already placed. After this stage,
//! comparing a shifted value against a single shifted threshold is
//! equivalent to a lexicographic hierarchy comparison.

use tracing::trace;

use crate::config::Tolerance;
use crate::stats::{max_over, min_max_over, percentile_over};

/// Output of the region-shift stage.
///
/// `layers` holds M+1 shifted objective columns: one per tier plus the wrap
/// layer, a re-shifted copy of tier 0 that seeds the combination fold.
/// `thresholds` holds one shifted threshold per tier (none for the wrap
/// layer). `domains` records the domain of interest as it stood when each
/// tier's threshold was evaluated, for introspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftedTiers {
    /// Shifted objective columns, tiers 0..M then the wrap layer.
    pub layers: Vec<Vec<f64>>,
    /// Shifted per-tier thresholds, hierarchy order.
    pub thresholds: Vec<f64>,
    /// Domain of interest at each tier's threshold evaluation.
    pub domains: Vec<Vec<usize>>,
}

/// Effective threshold of one tier, evaluated over the domain of interest.
fn effective_threshold(column: &[f64], domain: &[usize], tolerance: Tolerance) -> f64 {
    match tolerance {
        Tolerance::Absolute(t) => t,
        Tolerance::Relative(t) => {
            let (min, max) = min_max_over(column, domain);
            min + t * (max - min)
        }
        Tolerance::Percentile(t) => percentile_over(column, domain, t),
    }
}

/// Shift the normalized columns tier by tier so the hierarchy becomes a
/// single numeric ordering.
///
/// Per tier: evaluate the effective threshold over the live domain, record
/// it shifted by the running accumulator, narrow the domain to samples
/// strictly below the (unshifted) threshold, then advance the accumulator so
/// the next tier's domain maximum lands exactly on the lowest threshold
/// recorded so far. Narrowing is skipped when the filter comes up empty; an
/// empty domain would leave the subsequent subset statistics undefined.
///
/// The hierarchy wraps: the final accumulator re-shifts tier 0 into the
/// extra layer that seeds the combination fold.
pub fn region_shift(columns: &[Vec<f64>], tolerances: &[Tolerance]) -> ShiftedTiers {
    let tier_count = columns.len();
    let sample_count = columns[0].len();

    let mut domain: Vec<usize> = (0..sample_count).collect();
    let mut layers: Vec<Vec<f64>> = Vec::with_capacity(tier_count + 1);
    let mut thresholds: Vec<f64> = Vec::with_capacity(tier_count);
    let mut domains: Vec<Vec<usize>> = Vec::with_capacity(tier_count);
    let mut shift = 0.0;

    for (idx, column) in columns.iter().enumerate() {
        domains.push(domain.clone());
        layers.push(column.iter().map(|v| v - shift).collect());

        let threshold = effective_threshold(column, &domain, tolerances[idx]);
        thresholds.push(threshold - shift);

        // Narrow on unshifted values against the unshifted threshold; an
        // empty filter means every sample ties at this tier, so the domain
        // stays as-is.
        let narrowed: Vec<usize> = domain
            .iter()
            .copied()
            .filter(|&row| column[row] < threshold)
            .collect();
        if narrowed.is_empty() {
            trace!(tier = idx, "empty interest region, domain unchanged");
        } else {
            domain = narrowed;
        }
        trace!(
            tier = idx,
            threshold,
            domain_size = domain.len(),
            "tier placed"
        );

        // Advance the accumulator: the next tier's domain maximum must land
        // on the lowest threshold placed so far. The hierarchy wraps back to
        // tier 0 after the last tier.
        let next = if idx + 1 < tier_count {
            &columns[idx + 1]
        } else {
            &columns[0]
        };
        let floor = thresholds.iter().copied().fold(f64::INFINITY, f64::min);
        shift = max_over(next, &domain) - floor;
    }

    layers.push(columns[0].iter().map(|v| v - shift).collect());

    ShiftedTiers {
        layers,
        thresholds,
        domains,
    }
}
