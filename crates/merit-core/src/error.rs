//! Error types for scalarizer construction and invocation.
//!
//! Configuration errors are raised once, at construction, and prevent a
//! usable [`Scalarizer`](crate::Scalarizer) from being created. Degenerate
//! data (constant objective columns, empty narrowed domains) is handled
//! locally by the pipeline and never surfaces here.

use thiserror::Error;

/// Errors that can occur while configuring or invoking the scalarizer.
#[derive(Debug, Error)]
pub enum MeritError {
    /// A parallel configuration list does not match the number of tolerances.
    #[error("length mismatch for '{field}': expected {expected}, got {actual}")]
    LengthMismatch {
        /// Name of the offending list
        field: &'static str,
        /// Expected length (number of tolerances)
        expected: usize,
        /// Actual length supplied
        actual: usize,
    },

    /// A tier was flagged both absolute and percentile.
    #[error("tier {tier} is flagged both absolute and percentile")]
    ConflictingToleranceKind {
        /// Hierarchy tier index (0 = most important)
        tier: usize,
    },

    /// A relative or percentile tolerance lies outside [0, 1].
    #[error("tier {tier} tolerance {value} out of range: relative and percentile tolerances must be in [0, 1]")]
    ToleranceOutOfRange {
        /// Hierarchy tier index
        tier: usize,
        /// Offending tolerance value
        value: f64,
    },

    /// An optimization goal string could not be parsed.
    #[error("invalid goal '{0}': expected one of 'min', 'minimize', 'max', 'maximize'")]
    InvalidGoal(String),

    /// Softness is negative or non-finite.
    #[error("invalid softness {value}: must be finite and >= 0")]
    InvalidSoftness {
        /// Offending softness value
        value: f64,
    },

    /// No objectives were configured.
    #[error("at least one objective is required")]
    EmptyObjectives,

    /// The objectives matrix has no rows or no columns.
    #[error("objectives matrix must have at least one row and one column")]
    EmptyMatrix,

    /// A row of the objectives matrix has the wrong width.
    #[error("ragged objectives matrix: row {row} has {actual} columns, expected {expected}")]
    RaggedMatrix {
        /// Row index of the offending row
        row: usize,
        /// Expected column count (from row 0)
        expected: usize,
        /// Actual column count
        actual: usize,
    },

    /// The matrix column count does not match the configured tier count.
    #[error("objectives matrix has {actual} columns but {expected} tiers are configured")]
    ColumnCountMismatch {
        /// Configured tier count
        expected: usize,
        /// Matrix column count
        actual: usize,
    },

    /// A matrix entry is NaN or infinite.
    #[error("non-finite objective value {value} at row {row}, column {col}")]
    NonFiniteValue {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
        /// Offending value
        value: f64,
    },

    /// Configuration (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for scalarizer operations.
pub type MeritResult<T> = Result<T, MeritError>;

impl From<serde_json::Error> for MeritError {
    fn from(err: serde_json::Error) -> Self {
        MeritError::Serialization(err.to_string())
    }
}

impl MeritError {
    /// Create a LengthMismatch error for a parallel configuration list.
    pub fn length_mismatch(field: &'static str, expected: usize, actual: usize) -> Self {
        MeritError::LengthMismatch {
            field,
            expected,
            actual,
        }
    }

    /// Create a ToleranceOutOfRange error.
    pub fn tolerance_out_of_range(tier: usize, value: f64) -> Self {
        MeritError::ToleranceOutOfRange { tier, value }
    }

    /// Check whether this error was raised at configuration time.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MeritError::LengthMismatch { .. }
                | MeritError::ConflictingToleranceKind { .. }
                | MeritError::ToleranceOutOfRange { .. }
                | MeritError::InvalidGoal(_)
                | MeritError::InvalidSoftness { .. }
                | MeritError::EmptyObjectives
                | MeritError::Serialization(_)
        )
    }

    /// Check whether this error describes a malformed objectives matrix.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MeritError::EmptyMatrix
                | MeritError::RaggedMatrix { .. }
                | MeritError::ColumnCountMismatch { .. }
                | MeritError::NonFiniteValue { .. }
        )
    }
}
