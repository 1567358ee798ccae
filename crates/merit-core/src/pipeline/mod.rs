//! The four-stage scalarizing pipeline.
//!
//! Stages run in order per invocation:
//!
//! 1. [`adjust`] — fold maximized objectives into minimize convention
//! 2. [`normalize`] — per-column min-max rescale to [0, 1]
//! 3. [`shift`] — region shift encoding the strict hierarchy
//! 4. [`combine`] — step-weighted fold into the raw merit vector
//!
//! Each stage is a pure function over the previous stage's output; the
//! [`Scalarizer`](crate::Scalarizer) orchestrates them and applies the final
//! batch renormalization.

pub mod adjust;
pub mod combine;
pub mod normalize;
pub mod shift;
pub mod step;

pub use self::shift::ShiftedTiers;
pub use self::step::{StepFunction, HARD_STEP_CUTOFF};
