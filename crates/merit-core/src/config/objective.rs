//! Per-tier objective settings: optimization goal and tolerance kind.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeritError, MeritResult};

/// Optimization direction for a single objective.
///
/// Internally the pipeline works in minimize convention; maximized columns
/// are negated during goal adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Lower values are better (default).
    #[default]
    Minimize,
    /// Higher values are better.
    Maximize,
}

impl FromStr for Goal {
    type Err = MeritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" | "minimize" => Ok(Goal::Minimize),
            "max" | "maximize" => Ok(Goal::Maximize),
            other => Err(MeritError::InvalidGoal(other.to_string())),
        }
    }
}

/// How a tier's tolerance value is interpreted when deriving its effective
/// threshold over the live domain of interest.
///
/// The three kinds are mutually exclusive by construction; the parallel
/// boolean-array constructor has to enforce the same rule with validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Tolerance {
    /// Fraction of the domain's value span: `min + t * (max - min)`.
    /// Must lie in [0, 1].
    Relative(f64),
    /// The `t * 100`-th percentile (linear interpolation) of the domain's
    /// values. Must lie in [0, 1].
    Percentile(f64),
    /// A threshold in the objective's own units; rescaled alongside the
    /// column during normalization and negated for maximized objectives.
    Absolute(f64),
}

impl Tolerance {
    /// The raw tolerance value, whatever its kind.
    pub fn value(&self) -> f64 {
        match *self {
            Tolerance::Relative(v) | Tolerance::Percentile(v) | Tolerance::Absolute(v) => v,
        }
    }

    /// Whether this tolerance is interpreted in the objective's own units.
    pub fn is_absolute(&self) -> bool {
        matches!(self, Tolerance::Absolute(_))
    }

    /// Validate the tolerance for the given tier.
    ///
    /// Relative and percentile tolerances must lie in [0, 1]; absolute
    /// tolerances are unconstrained. All kinds must be finite.
    pub fn validate(&self, tier: usize) -> MeritResult<()> {
        let value = self.value();
        if !value.is_finite() {
            return Err(MeritError::tolerance_out_of_range(tier, value));
        }
        match self {
            Tolerance::Relative(v) | Tolerance::Percentile(v) => {
                if !(0.0..=1.0).contains(v) {
                    return Err(MeritError::tolerance_out_of_range(tier, *v));
                }
            }
            Tolerance::Absolute(_) => {}
        }
        Ok(())
    }
}

/// One tier of the objective hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveSpec {
    /// Threshold semantics for this tier.
    pub tolerance: Tolerance,
    /// Optimization direction for this tier.
    #[serde(default)]
    pub goal: Goal,
}

impl ObjectiveSpec {
    /// Create a spec with an explicit goal.
    pub fn new(tolerance: Tolerance, goal: Goal) -> Self {
        Self { tolerance, goal }
    }

    /// Create a minimizing spec.
    pub fn minimize(tolerance: Tolerance) -> Self {
        Self::new(tolerance, Goal::Minimize)
    }

    /// Create a maximizing spec.
    pub fn maximize(tolerance: Tolerance) -> Self {
        Self::new(tolerance, Goal::Maximize)
    }

    /// Validate this tier's settings.
    pub fn validate(&self, tier: usize) -> MeritResult<()> {
        self.tolerance.validate(tier)
    }
}
