//! Hierarchy-based scalarizer for multi-objective optimization.
//!
//! Reduces a batch of candidate solutions evaluated on several,
//! hierarchically ordered objectives to a single "merit" value per sample,
//! so an outer single-objective optimizer can use it as a fitness signal.
//!
//! Each invocation runs a four-stage pipeline:
//!
//! 1. **Goal adjustment** — maximized objectives are negated into minimize
//!    convention
//! 2. **Normalization** — every column is min-max rescaled to [0, 1] over
//!    the current batch
//! 3. **Region shift** — tiers are walked most-important-first, shrinking
//!    the domain of still-tied samples and shifting each tier's range
//!    strictly below all higher tiers, which is what encodes the hierarchy
//!    in a single numeric axis
//! 4. **Step-weighted combination** — a (soft or hard) step function folds
//!    the shifted tiers back into one value per sample, which is then
//!    min-max rescaled to [0, 1]
//!
//! # Modules
//!
//! - [`config`]: objective hierarchy, tolerance kinds, goals, softness
//! - [`error`]: error types and the [`MeritResult`] alias
//! - [`matrix`]: validated column-major objectives matrix
//! - [`pipeline`]: the four pipeline stages
//! - [`scalarizer`]: the [`Scalarizer`] orchestrator and per-call trace
//! - [`stats`]: subset min/max and linear-interpolation percentiles
//!
//! # Example
//!
//! ```
//! use merit_core::{ObjectivesMatrix, Scalarizer, ScalarizerConfig};
//!
//! // Two-tier hierarchy, both minimized, 50% relative tolerance each
//! let scalarizer = Scalarizer::new(ScalarizerConfig::relative(&[0.5, 0.5])).unwrap();
//!
//! let batch = ObjectivesMatrix::from_rows(&[
//!     vec![0.0, 5.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 1.0],
//! ]).unwrap();
//!
//! let merits = scalarizer.scalarize(&batch).unwrap();
//! // Lower merit is better: the tier-0 tie is broken by tier 1
//! assert!(merits[1] < merits[0]);
//! assert!(merits[0] < merits[2]);
//! ```

pub mod config;
pub mod error;
pub mod matrix;
pub mod pipeline;
pub mod scalarizer;
pub mod stats;

pub use config::{Goal, ObjectiveSpec, ScalarizerConfig, Tolerance, DEFAULT_SOFTNESS};
pub use error::{MeritError, MeritResult};
pub use matrix::ObjectivesMatrix;
pub use scalarizer::{ScalarizeTrace, Scalarizer};
