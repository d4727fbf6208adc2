//! The input side of a solve: an augmented matrix and the number of equations
//! it was built for.

use crate::{SquareMatrix, Vector};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// The number of equations a user can pick.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum EquationCount {
    #[default]
    Two,
    Three,
}

impl EquationCount {
    pub fn get(self) -> usize {
        match self {
            EquationCount::Two => 2,
            EquationCount::Three => 3,
        }
    }
}

impl TryFrom<usize> for EquationCount {
    type Error = UnsupportedEquationCount;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(EquationCount::Two),
            3 => Ok(EquationCount::Three),
            other => Err(UnsupportedEquationCount(other)),
        }
    }
}

impl From<EquationCount> for usize {
    fn from(count: EquationCount) -> usize { count.get() }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Only 2 or 3 equations are supported, found {0}")]
pub struct UnsupportedEquationCount(pub usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("The system has no equations")]
    Empty,
    #[error("Row {row} has {found} cells but {expected} were expected")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("There is no cell at row {row}, column {column}")]
    OutOfBounds { row: usize, column: usize },
}

/// `N` equations in `N` unknowns, stored as an `N x (N+1)` matrix whose last
/// column holds the constants.
///
/// The shape is checked on construction, so every [`AugmentedMatrix`] has at
/// least one row and exactly one more column than it has rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct AugmentedMatrix {
    cells: DMatrix<f64>,
}

impl AugmentedMatrix {
    /// An all-zero system with `equations` rows.
    pub fn zeroed(equations: EquationCount) -> Self {
        let n = equations.get();

        AugmentedMatrix {
            cells: DMatrix::zeros(n, n + 1),
        }
    }

    /// Build a system from its rows, where each row is the coefficients
    /// followed by the constant.
    ///
    /// ```rust
    /// # use linear_equations::AugmentedMatrix;
    /// // 2x + 3y = 8
    /// // 5x +  y = 7
    /// let system =
    ///     AugmentedMatrix::from_rows(&[[2.0, 3.0, 8.0], [5.0, 1.0, 7.0]])
    ///         .unwrap();
    /// assert_eq!(system.equations(), 2);
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let n = rows.len();

        if n == 0 {
            return Err(ShapeError::Empty);
        }

        for (i, row) in rows.iter().enumerate() {
            let found = row.as_ref().len();
            if found != n + 1 {
                return Err(ShapeError::RaggedRow {
                    row: i,
                    expected: n + 1,
                    found,
                });
            }
        }

        let cells = DMatrix::from_fn(n, n + 1, |row, column| {
            rows[row].as_ref()[column]
        });

        Ok(AugmentedMatrix { cells })
    }

    /// The number of equations (and unknowns).
    pub fn equations(&self) -> usize { self.cells.nrows() }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.cells.get((row, column)).copied()
    }

    pub fn set(
        &mut self,
        row: usize,
        column: usize,
        value: f64,
    ) -> Result<(), ShapeError> {
        match self.cells.get_mut((row, column)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            },
            None => Err(ShapeError::OutOfBounds { row, column }),
        }
    }

    /// The square coefficient block, without the constants column.
    pub fn coefficients(&self) -> SquareMatrix {
        let n = self.equations();
        self.cells.columns(0, n).into_owned()
    }

    /// The constants column.
    pub fn constants(&self) -> Vector {
        self.cells.column(self.equations()).into_owned()
    }

    /// A single equation's coefficients followed by its constant.
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.equations() {
            return None;
        }

        Some(self.cells.row(row).iter().copied().collect())
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    pub(crate) fn as_matrix(&self) -> &DMatrix<f64> { &self.cells }
}

impl TryFrom<Vec<Vec<f64>>> for AugmentedMatrix {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        AugmentedMatrix::from_rows(rows)
    }
}

impl From<AugmentedMatrix> for Vec<Vec<f64>> {
    fn from(system: AugmentedMatrix) -> Vec<Vec<f64>> { system.to_rows() }
}
