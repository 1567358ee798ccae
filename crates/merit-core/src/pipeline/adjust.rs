//! Goal adjustment: fold every objective into minimize convention.

use crate::config::{Goal, ObjectiveSpec, Tolerance};
use crate::matrix::ObjectivesMatrix;

/// Negate the columns of maximized objectives so the rest of the pipeline
/// only ever minimizes.
///
/// Absolute tolerances of maximized tiers are negated with their column;
/// relative and percentile tolerances are direction-free fractions and pass
/// through unchanged. Pure transform, no error conditions.
pub fn apply_goals(
    matrix: &ObjectivesMatrix,
    specs: &[ObjectiveSpec],
) -> (Vec<Vec<f64>>, Vec<Tolerance>) {
    let mut columns = Vec::with_capacity(specs.len());
    let mut tolerances = Vec::with_capacity(specs.len());

    for (idx, spec) in specs.iter().enumerate() {
        let column = matrix.column(idx);
        match spec.goal {
            Goal::Minimize => {
                columns.push(column.to_vec());
                tolerances.push(spec.tolerance);
            }
            Goal::Maximize => {
                columns.push(column.iter().map(|v| -v).collect());
                tolerances.push(match spec.tolerance {
                    Tolerance::Absolute(t) => Tolerance::Absolute(-t),
                    other => other,
                });
            }
        }
    }
    (columns, tolerances)
}
