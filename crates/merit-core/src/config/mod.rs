//! Scalarizer configuration.
//!
//! A [`ScalarizerConfig`] declares the objective hierarchy once; the
//! resulting [`Scalarizer`](crate::Scalarizer) is then invoked repeatedly
//! against batches of candidate evaluations. Validity is checked once, at
//! construction.
//!
//! Two construction surfaces are offered: the typed one
//! ([`ScalarizerConfig::new`] with [`ObjectiveSpec`] values, where the
//! tolerance kinds are mutually exclusive by construction) and the
//! parallel-array one ([`ScalarizerConfig::from_parts`]) matching the flat
//! tolerances/absolutes/percentiles/goals keyword interface.

mod objective;

#[cfg(test)]
mod tests;

pub use self::objective::{Goal, ObjectiveSpec, Tolerance};

use serde::{Deserialize, Serialize};

use crate::error::{MeritError, MeritResult};

/// Default smoothing parameter for the soft step function.
pub const DEFAULT_SOFTNESS: f64 = 1e-3;

/// Immutable scalarizer configuration: one [`ObjectiveSpec`] per hierarchy
/// tier (index 0 = most important) plus the global step softness.
///
/// # Example
///
/// ```
/// use merit_core::{Goal, ObjectiveSpec, ScalarizerConfig, Tolerance};
///
/// let config = ScalarizerConfig::new(
///     vec![
///         ObjectiveSpec::minimize(Tolerance::Relative(0.2)),
///         ObjectiveSpec::maximize(Tolerance::Absolute(5.0)),
///     ],
///     1e-3,
/// );
/// assert!(config.validate().is_ok());
/// assert_eq!(config.objectives()[1].goal, Goal::Maximize);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarizerConfig {
    /// Hierarchy tiers, most important first.
    objectives: Vec<ObjectiveSpec>,
    /// Smoothing parameter for the step function; values below the hard-step
    /// cutoff degrade to an exact threshold.
    #[serde(default = "default_softness")]
    softness: f64,
}

fn default_softness() -> f64 {
    DEFAULT_SOFTNESS
}

impl ScalarizerConfig {
    /// Create a configuration from typed objective specs.
    pub fn new(objectives: Vec<ObjectiveSpec>, softness: f64) -> Self {
        Self {
            objectives,
            softness,
        }
    }

    /// Create an all-minimize, all-relative configuration with the default
    /// softness.
    pub fn relative(tolerances: &[f64]) -> Self {
        Self::new(
            tolerances
                .iter()
                .map(|&t| ObjectiveSpec::minimize(Tolerance::Relative(t)))
                .collect(),
            DEFAULT_SOFTNESS,
        )
    }

    /// Create a configuration from parallel per-tier lists.
    ///
    /// Mirrors the flat keyword surface: `tolerances` is required;
    /// `absolutes`, `percentiles` and `goals` default to all-relative,
    /// all-non-percentile and all-minimize respectively.
    ///
    /// # Errors
    ///
    /// - [`MeritError::LengthMismatch`] when an optional list's length
    ///   differs from `tolerances`
    /// - [`MeritError::ConflictingToleranceKind`] when a tier is flagged
    ///   both absolute and percentile
    /// - [`MeritError::ToleranceOutOfRange`] when a relative or percentile
    ///   tolerance lies outside [0, 1]
    /// - [`MeritError::InvalidSoftness`] / [`MeritError::EmptyObjectives`]
    pub fn from_parts(
        tolerances: &[f64],
        absolutes: Option<&[bool]>,
        percentiles: Option<&[bool]>,
        goals: Option<&[Goal]>,
        softness: f64,
    ) -> MeritResult<Self> {
        let n = tolerances.len();
        if let Some(abs) = absolutes {
            if abs.len() != n {
                return Err(MeritError::length_mismatch("absolutes", n, abs.len()));
            }
        }
        if let Some(pct) = percentiles {
            if pct.len() != n {
                return Err(MeritError::length_mismatch("percentiles", n, pct.len()));
            }
        }
        if let Some(goals) = goals {
            if goals.len() != n {
                return Err(MeritError::length_mismatch("goals", n, goals.len()));
            }
        }

        let mut objectives = Vec::with_capacity(n);
        for (tier, &tolerance) in tolerances.iter().enumerate() {
            let is_absolute = absolutes.map_or(false, |abs| abs[tier]);
            let is_percentile = percentiles.map_or(false, |pct| pct[tier]);
            let tolerance = match (is_absolute, is_percentile) {
                (true, true) => return Err(MeritError::ConflictingToleranceKind { tier }),
                (true, false) => Tolerance::Absolute(tolerance),
                (false, true) => Tolerance::Percentile(tolerance),
                (false, false) => Tolerance::Relative(tolerance),
            };
            let goal = goals.map_or(Goal::Minimize, |goals| goals[tier]);
            objectives.push(ObjectiveSpec::new(tolerance, goal));
        }

        let config = Self::new(objectives, softness);
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> MeritResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a JSON string.
    pub fn to_json_string(&self) -> MeritResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Hierarchy tiers, most important first.
    pub fn objectives(&self) -> &[ObjectiveSpec] {
        &self.objectives
    }

    /// Number of hierarchy tiers.
    pub fn tier_count(&self) -> usize {
        self.objectives.len()
    }

    /// Step smoothing parameter.
    pub fn softness(&self) -> f64 {
        self.softness
    }

    /// Validate the configuration, returning the first violation found.
    pub fn validate(&self) -> MeritResult<()> {
        if self.objectives.is_empty() {
            return Err(MeritError::EmptyObjectives);
        }
        if !self.softness.is_finite() || self.softness < 0.0 {
            return Err(MeritError::InvalidSoftness {
                value: self.softness,
            });
        }
        for (tier, spec) in self.objectives.iter().enumerate() {
            spec.validate(tier)?;
        }
        Ok(())
    }
}
