//! Gaussian elimination with partial pivoting.
//!
//! The augmented matrix is first reduced to row echelon form with a `1.0` on
//! each diagonal entry, then the unknowns are recovered bottom-up:
//!
//! ```text
//! x[i] = b[i] - sum(a[i][j] * x[j] for j > i)
//! ```

use crate::{
    config::{self, Config},
    solve::{Method, Solver},
    AugmentedMatrix, Vector,
};
use nalgebra::DMatrix;

/// Solves a system by row reduction.
///
/// Unlike [`crate::MatrixInversion`], this works for any number of
/// equations.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaussianElimination {
    zero_tolerance: f64,
}

impl GaussianElimination {
    pub fn new() -> Self {
        GaussianElimination::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        GaussianElimination {
            zero_tolerance: config.zero_tolerance,
        }
    }
}

impl Default for GaussianElimination {
    fn default() -> Self { GaussianElimination::new() }
}

impl Solver for GaussianElimination {
    fn method(&self) -> Method { Method::Gaussian }

    fn solve(&self, system: &AugmentedMatrix) -> Option<Vector> {
        // work on a copy so the caller's system is never touched
        let mut working = system.as_matrix().clone();

        forward_eliminate(&mut working, self.zero_tolerance)?;

        Some(back_substitute(&working))
    }
}

/// Solve a system using Gaussian elimination, treating only an exact-zero
/// pivot as singular.
pub fn gaussian_elimination(system: &AugmentedMatrix) -> Option<Vector> {
    GaussianElimination::new().solve(system)
}

/// Reduce an augmented matrix to row echelon form in place, normalizing each
/// pivot to `1.0`.
///
/// Returns `None` as soon as a pivot is zero (the system is singular), leaving
/// the matrix partially reduced.
fn forward_eliminate(
    matrix: &mut DMatrix<f64>,
    zero_tolerance: f64,
) -> Option<()> {
    let rows = matrix.nrows();
    let columns = matrix.ncols();

    for pivot_row in 0..rows {
        let best = select_pivot(matrix, pivot_row);
        if best != pivot_row {
            matrix.swap_rows(best, pivot_row);
        }

        let pivot = matrix[(pivot_row, pivot_row)];
        if config::is_zero(pivot, zero_tolerance) {
            log::debug!(
                "Column {} has no usable pivot, the system is singular",
                pivot_row
            );
            return None;
        }

        for column in pivot_row..columns {
            matrix[(pivot_row, column)] /= pivot;
        }

        for row in pivot_row + 1..rows {
            let factor = matrix[(row, pivot_row)];

            for column in pivot_row..columns {
                let delta = factor * matrix[(pivot_row, column)];
                matrix[(row, column)] -= delta;
            }
        }
    }

    Some(())
}

/// Find the row at or below `column` with the largest magnitude in that
/// column. Ties go to the earliest row.
fn select_pivot(matrix: &DMatrix<f64>, column: usize) -> usize {
    let mut best = column;

    for row in column + 1..matrix.nrows() {
        if matrix[(row, column)].abs() > matrix[(best, column)].abs() {
            best = row;
        }
    }

    best
}

/// Read the solution off a matrix in row echelon form with a unit diagonal.
fn back_substitute(matrix: &DMatrix<f64>) -> Vector {
    let n = matrix.nrows();
    let mut solution = Vector::zeros(n);

    for i in (0..n).rev() {
        let mut value = matrix[(i, n)];

        for j in i + 1..n {
            value -= matrix[(i, j)] * solution[j];
        }

        solution[i] = value;
    }

    solution
}
