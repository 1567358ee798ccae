//! Top-level scalarizer orchestration.

use tracing::debug;

use crate::config::ScalarizerConfig;
use crate::error::{MeritError, MeritResult};
use crate::matrix::ObjectivesMatrix;
use crate::pipeline::{adjust, combine, normalize, shift, ShiftedTiers, StepFunction};

/// Intermediate arrays of one `scalarize` call, for introspection.
///
/// Returned per call rather than stored on the [`Scalarizer`], so a shared
/// instance stays safe to use from several threads without locking.
#[derive(Debug, Clone)]
pub struct ScalarizeTrace {
    /// Columns after goal adjustment (minimize convention).
    pub adjusted: Vec<Vec<f64>>,
    /// Columns after min-max normalization.
    pub normalized: Vec<Vec<f64>>,
    /// Shifted layers, thresholds and domain snapshots from region shift.
    pub shifted: ShiftedTiers,
    /// Merit vector before the final batch renormalization.
    pub raw_merits: Vec<f64>,
}

/// Hierarchy-based scalarizer.
///
/// Configured once, invoked repeatedly and statelessly per batch of
/// candidate evaluations. Lower merit is better; outputs lie in [0, 1]
/// whenever the raw maximum merit is positive.
///
/// # Example
///
/// ```
/// use merit_core::{ObjectivesMatrix, Scalarizer, ScalarizerConfig};
///
/// let scalarizer = Scalarizer::new(ScalarizerConfig::relative(&[0.5, 0.5])).unwrap();
/// let matrix = ObjectivesMatrix::from_rows(&[
///     vec![0.0, 5.0],
///     vec![0.0, 1.0],
///     vec![10.0, 1.0],
/// ]).unwrap();
///
/// let merits = scalarizer.scalarize(&matrix).unwrap();
/// assert_eq!(merits.len(), 3);
/// // Tied on tier 0, sample 1 wins on tier 1; sample 2 loses on tier 0
/// assert!(merits[1] < merits[0]);
/// assert!(merits[0] < merits[2]);
/// ```
#[derive(Debug, Clone)]
pub struct Scalarizer {
    config: ScalarizerConfig,
    step: StepFunction,
}

impl Scalarizer {
    /// Create a scalarizer, validating the configuration once.
    pub fn new(config: ScalarizerConfig) -> MeritResult<Self> {
        config.validate()?;
        let step = StepFunction::new(config.softness());
        Ok(Self { config, step })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ScalarizerConfig {
        &self.config
    }

    /// Reduce an objectives matrix to one merit value per sample.
    ///
    /// The returned vector is row-aligned with the input. Normalization and
    /// region shift are batch-relative, so callers should pass a whole
    /// generation of candidates at once, not one sample at a time.
    ///
    /// # Errors
    ///
    /// [`MeritError::ColumnCountMismatch`] when the matrix width differs
    /// from the configured tier count. Degenerate data (constant columns,
    /// empty narrowed domains) is handled internally and never errors.
    pub fn scalarize(&self, matrix: &ObjectivesMatrix) -> MeritResult<Vec<f64>> {
        self.scalarize_with_trace(matrix).map(|(merits, _)| merits)
    }

    /// Row-major convenience wrapper around [`Scalarizer::scalarize`].
    pub fn scalarize_rows(&self, rows: &[Vec<f64>]) -> MeritResult<Vec<f64>> {
        let matrix = ObjectivesMatrix::from_rows(rows)?;
        self.scalarize(&matrix)
    }

    /// Like [`Scalarizer::scalarize`], additionally returning the
    /// intermediate arrays of every pipeline stage.
    pub fn scalarize_with_trace(
        &self,
        matrix: &ObjectivesMatrix,
    ) -> MeritResult<(Vec<f64>, ScalarizeTrace)> {
        let tier_count = self.config.tier_count();
        if matrix.objective_count() != tier_count {
            return Err(MeritError::ColumnCountMismatch {
                expected: tier_count,
                actual: matrix.objective_count(),
            });
        }

        let (adjusted, mut tolerances) = adjust::apply_goals(matrix, self.config.objectives());

        let mut normalized = adjusted.clone();
        normalize::rescale(&mut normalized, &mut tolerances);

        let shifted = shift::region_shift(&normalized, &tolerances);

        let raw_merits = combine::fold(&shifted, self.step);
        let merits = renormalize(&raw_merits);

        debug!(
            samples = matrix.sample_count(),
            tiers = tier_count,
            "scalarized batch"
        );

        let trace = ScalarizeTrace {
            adjusted,
            normalized,
            shifted,
            raw_merits,
        };
        Ok((merits, trace))
    }
}

/// Min-max rescale the merit vector to [0, 1], but only when the raw
/// maximum is positive; an all-non-positive batch is left unscaled.
fn renormalize(merits: &[f64]) -> Vec<f64> {
    let max = merits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return merits.to_vec();
    }
    let min = merits.iter().copied().fold(f64::INFINITY, f64::min);
    let span = max - min;
    if span == 0.0 {
        // Constant positive merits: every sample ties
        return vec![0.0; merits.len()];
    }
    merits.iter().map(|&m| (m - min) / span).collect()
}
