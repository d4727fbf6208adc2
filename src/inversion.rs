//! Solving a system by inverting its coefficient matrix.
//!
//! Only 2x2 and 3x3 matrices are supported, using the closed-form cofactor
//! formulas for the determinant and the adjugate:
//!
//! ```text
//! x = inverse(A) * b
//!   = adjugate(A) * b / det(A)
//! ```

use crate::{
    config::{self, Config},
    solve::{Method, Solver},
    AugmentedMatrix, SquareMatrix, Vector,
};

/// Solves a system via `inverse(A) * b`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MatrixInversion {
    zero_tolerance: f64,
}

impl MatrixInversion {
    pub fn new() -> Self { MatrixInversion::with_config(&Config::default()) }

    pub fn with_config(config: &Config) -> Self {
        MatrixInversion {
            zero_tolerance: config.zero_tolerance,
        }
    }
}

impl Default for MatrixInversion {
    fn default() -> Self { MatrixInversion::new() }
}

impl Solver for MatrixInversion {
    fn method(&self) -> Method { Method::Inversion }

    fn solve(&self, system: &AugmentedMatrix) -> Option<Vector> {
        let inverse = invert_with_tolerance(
            &system.coefficients(),
            self.zero_tolerance,
        )?;
        multiply(&inverse, &system.constants())
    }
}

/// Solve a system using matrix inversion, treating only an exact-zero
/// determinant as singular.
///
/// Systems with anything other than 2 or 3 equations have no solution as far
/// as this method is concerned.
pub fn solve_by_inversion(system: &AugmentedMatrix) -> Option<Vector> {
    MatrixInversion::new().solve(system)
}

/// The determinant of a 2x2 or 3x3 matrix, expanded along the first row.
pub fn determinant(matrix: &SquareMatrix) -> Option<f64> {
    match matrix.shape() {
        (2, 2) => {
            let (a, b) = (matrix[(0, 0)], matrix[(0, 1)]);
            let (c, d) = (matrix[(1, 0)], matrix[(1, 1)]);

            Some(a * d - b * c)
        },
        (3, 3) => {
            let [a, b, c, d, e, f, g, h, i] = entries_3x3(matrix);

            Some(
                a * (e * i - f * h) - b * (d * i - f * g)
                    + c * (d * h - e * g),
            )
        },
        _ => None,
    }
}

/// Invert a 2x2 or 3x3 matrix.
///
/// Returns `None` when the matrix is singular (its determinant is exactly
/// `0.0`) or isn't one of the supported sizes.
pub fn invert(matrix: &SquareMatrix) -> Option<SquareMatrix> {
    invert_with_tolerance(matrix, Config::default().zero_tolerance)
}

fn invert_with_tolerance(
    matrix: &SquareMatrix,
    zero_tolerance: f64,
) -> Option<SquareMatrix> {
    let det = determinant(matrix)?;

    if config::is_zero(det, zero_tolerance) {
        log::debug!("The determinant is {}, the matrix is singular", det);
        return None;
    }

    let inverse_det = 1.0 / det;

    let adjugate = match matrix.nrows() {
        2 => {
            let (a, b) = (matrix[(0, 0)], matrix[(0, 1)]);
            let (c, d) = (matrix[(1, 0)], matrix[(1, 1)]);

            vec![d, -b, -c, a]
        },
        _ => {
            let [a, b, c, d, e, f, g, h, i] = entries_3x3(matrix);

            vec![
                e * i - f * h,
                -(b * i - c * h),
                b * f - c * e,
                -(d * i - f * g),
                a * i - c * g,
                -(a * f - c * d),
                d * h - e * g,
                -(a * h - b * g),
                a * e - b * d,
            ]
        },
    };

    let n = matrix.nrows();
    let cells = adjugate.into_iter().map(|cofactor| cofactor * inverse_det);

    Some(SquareMatrix::from_row_iterator(n, n, cells))
}

/// Multiply a matrix by a column vector.
///
/// Returns `None` if their dimensions don't line up.
pub fn multiply(matrix: &SquareMatrix, vector: &Vector) -> Option<Vector> {
    if matrix.nrows() != vector.len() || matrix.ncols() != vector.len() {
        log::trace!(
            "Can't multiply a {}x{} matrix by a vector of length {}",
            matrix.nrows(),
            matrix.ncols(),
            vector.len()
        );
        return None;
    }

    Some(matrix * vector)
}

fn entries_3x3(matrix: &SquareMatrix) -> [f64; 9] {
    [
        matrix[(0, 0)],
        matrix[(0, 1)],
        matrix[(0, 2)],
        matrix[(1, 0)],
        matrix[(1, 1)],
        matrix[(1, 2)],
        matrix[(2, 0)],
        matrix[(2, 1)],
        matrix[(2, 2)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn determinant_of_known_matrices() {
        let two = SquareMatrix::from_row_slice(2, 2, &[2.0, 3.0, 5.0, 1.0]);
        let three = SquareMatrix::from_row_slice(
            3,
            3,
            &[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0],
        );

        assert_eq!(determinant(&two), Some(-13.0));
        assert_eq!(determinant(&three), Some(1.0));
        assert_eq!(determinant(&SquareMatrix::identity(4, 4)), None);
    }

    #[test]
    fn invert_a_2x2_matrix() {
        let matrix = SquareMatrix::from_row_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]);
        let should_be =
            SquareMatrix::from_row_slice(2, 2, &[0.6, -0.7, -0.2, 0.4]);

        let got = invert(&matrix).unwrap();

        assert_relative_eq!(got, should_be, epsilon = 1e-12);
    }

    #[test]
    fn invert_a_3x3_matrix() {
        let matrix = SquareMatrix::from_row_slice(
            3,
            3,
            &[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0],
        );
        let should_be = SquareMatrix::from_row_slice(
            3,
            3,
            &[-24.0, 18.0, 5.0, 20.0, -15.0, -4.0, -5.0, 4.0, 1.0],
        );

        let got = invert(&matrix).unwrap();

        assert_eq!(got, should_be);
    }

    #[test]
    fn the_inverse_undoes_the_original() {
        let matrix = SquareMatrix::from_row_slice(
            3,
            3,
            &[3.0, -1.0, 2.0, 0.5, 4.0, -2.0, 1.0, 1.0, 5.0],
        );

        let inverse = invert(&matrix).unwrap();

        assert_relative_eq!(
            inverse * matrix,
            SquareMatrix::identity(3, 3),
            epsilon = 1e-12
        );
    }

    #[test]
    fn singular_matrices_have_no_inverse() {
        let rank_deficient =
            SquareMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let zero_row = SquareMatrix::from_row_slice(
            3,
            3,
            &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0],
        );

        assert_eq!(invert(&rank_deficient), None);
        assert_eq!(invert(&zero_row), None);
    }

    #[test]
    fn unsupported_sizes_have_no_inverse() {
        assert_eq!(invert(&SquareMatrix::identity(1, 1)), None);
        assert_eq!(invert(&SquareMatrix::identity(4, 4)), None);
        assert_eq!(invert(&SquareMatrix::zeros(2, 3)), None);
    }

    #[test]
    fn multiply_matrix_by_vector() {
        let matrix = SquareMatrix::from_row_slice(
            3,
            3,
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        );
        let vector = Vector::from_vec(vec![9.0, 10.0, 11.0]);

        let got = multiply(&matrix, &vector).unwrap();

        assert_eq!(got, Vector::from_vec(vec![32.0, 122.0, 212.0]));
    }

    #[test]
    fn mismatched_dimensions_cant_be_multiplied() {
        let matrix = SquareMatrix::identity(3, 3);
        let vector = Vector::from_vec(vec![1.0, 2.0]);

        assert_eq!(multiply(&matrix, &vector), None);
    }

    #[test]
    fn solve_a_known_2x2_system() {
        // 2x + 3y = 8
        // 5x +  y = 7
        let system =
            AugmentedMatrix::from_rows(&[[2.0, 3.0, 8.0], [5.0, 1.0, 7.0]])
                .unwrap();

        let got = solve_by_inversion(&system).unwrap();

        assert_relative_eq!(
            got,
            Vector::from_vec(vec![1.0, 2.0]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn identity_system_is_solved_exactly() {
        let system = AugmentedMatrix::from_rows(&[
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, 3.0],
        ])
        .unwrap();

        let got = solve_by_inversion(&system).unwrap();

        assert_eq!(got, Vector::from_vec(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn zero_row_means_no_solution() {
        let system =
            AugmentedMatrix::from_rows(&[[0.0, 0.0, 5.0], [1.0, 1.0, 3.0]])
                .unwrap();

        assert_eq!(solve_by_inversion(&system), None);
    }

    #[test]
    fn only_two_or_three_equations_are_supported() {
        let single = AugmentedMatrix::from_rows(&[[2.0, 4.0]]).unwrap();
        let four = AugmentedMatrix::from_rows(&[
            [1.0, 0.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 0.0, 1.0, 1.0],
        ])
        .unwrap();

        assert_eq!(solve_by_inversion(&single), None);
        assert_eq!(solve_by_inversion(&four), None);
    }

    #[test]
    fn a_tolerance_rejects_nearly_singular_systems() {
        let system = AugmentedMatrix::from_rows(&[
            [1.0, 1.0, 2.0],
            [1.0, 1.0 + 1e-14, 2.0],
        ])
        .unwrap();
        let strict = MatrixInversion::with_config(&Config {
            zero_tolerance: 1e-9,
            ..Config::default()
        });

        assert!(solve_by_inversion(&system).is_some());
        assert_eq!(strict.solve(&system), None);
    }
}
