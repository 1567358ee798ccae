//! Column-major objectives matrix.
//!
//! Callers supply candidate evaluations row-major (one row per sample); the
//! pipeline works objective-major, so the matrix is stored as columns. All
//! validation happens here, once, before any stage runs.

use crate::error::{MeritError, MeritResult};

/// A validated N-samples x M-objectives matrix, stored column-major.
///
/// Column order is hierarchy order: column 0 is the most important tier.
///
/// # Example
///
/// ```
/// use merit_core::ObjectivesMatrix;
///
/// let matrix = ObjectivesMatrix::from_rows(&[
///     vec![0.0, 5.0],
///     vec![0.0, 1.0],
///     vec![10.0, 1.0],
/// ]).unwrap();
/// assert_eq!(matrix.sample_count(), 3);
/// assert_eq!(matrix.objective_count(), 2);
/// assert_eq!(matrix.column(1), &[5.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectivesMatrix {
    columns: Vec<Vec<f64>>,
    sample_count: usize,
}

impl ObjectivesMatrix {
    /// Build a matrix from row-major sample data.
    ///
    /// # Errors
    ///
    /// - [`MeritError::EmptyMatrix`] for zero rows or zero columns
    /// - [`MeritError::RaggedMatrix`] when rows differ in width
    /// - [`MeritError::NonFiniteValue`] for NaN or infinite entries
    pub fn from_rows(rows: &[Vec<f64>]) -> MeritResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MeritError::EmptyMatrix);
        }
        let width = rows[0].len();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MeritError::RaggedMatrix {
                    row: row_idx,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (col_idx, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MeritError::NonFiniteValue {
                        row: row_idx,
                        col: col_idx,
                        value,
                    });
                }
            }
        }

        let mut columns: Vec<Vec<f64>> = (0..width)
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();
        for row in rows {
            for (col, &value) in columns.iter_mut().zip(row.iter()) {
                col.push(value);
            }
        }
        Ok(Self {
            columns,
            sample_count: rows.len(),
        })
    }

    /// Number of samples (rows).
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Number of objectives (columns).
    pub fn objective_count(&self) -> usize {
        self.columns.len()
    }

    /// One objective's values across all samples.
    pub fn column(&self, idx: usize) -> &[f64] {
        &self.columns[idx]
    }

    /// All columns, hierarchy order.
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }
}
