//! Hard and soft step functions.

/// Softness below which the step function degrades to an exact threshold.
pub const HARD_STEP_CUTOFF: f64 = 1e-5;

/// A (possibly relaxed) unit step.
///
/// With `softness` below [`HARD_STEP_CUTOFF`] this is the exact step
/// `v >= 0 -> 1, else 0`; above the cutoff it is the logistic relaxation
/// `sigmoid(v / softness)`, whose steepness is inversely proportional to
/// `softness`. The relaxation keeps the scalarized merit differentiable for
/// gradient-based callers.
#[derive(Debug, Clone, Copy)]
pub struct StepFunction {
    softness: f64,
}

impl StepFunction {
    /// Create a step function with the given softness.
    pub fn new(softness: f64) -> Self {
        Self { softness }
    }

    /// Whether this instance evaluates the exact (non-differentiable) step.
    pub fn is_hard(&self) -> bool {
        self.softness < HARD_STEP_CUTOFF
    }

    /// Evaluate the step at `value`.
    pub fn eval(&self, value: f64) -> f64 {
        if self.is_hard() {
            if value >= 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            stable_sigmoid(value / self.softness)
        }
    }
}

/// Logistic sigmoid computed without overflowing `exp` for large |x|.
fn stable_sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
