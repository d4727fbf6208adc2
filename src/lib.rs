//! Solve small systems of linear equations two different ways, Gaussian
//! elimination and matrix inversion, so the results (and timings) can be
//! compared side by side.
//!
//! ```rust
//! use linear_equations::{AugmentedMatrix, Config};
//!
//! // 2x + 3y = 8
//! // 5x +  y = 7
//! let system =
//!     AugmentedMatrix::from_rows(&[[2.0, 3.0, 8.0], [5.0, 1.0, 7.0]])?;
//!
//! let report = linear_equations::recompute(&system, &Config::default());
//!
//! assert_eq!(report.gaussian.text(), "x0 = 1.00 x1 = 2.00 ");
//! assert_eq!(report.inversion.text(), "x0 = 1.00 x1 = 2.00 ");
//! # Ok::<(), linear_equations::ShapeError>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod config;
pub mod document;
mod format;
mod gaussian;
mod inversion;
pub mod plot;
mod solve;
mod system;
mod workspace;

pub use config::Config;
pub use document::{CodecError, CoefficientsDocument};
pub use format::{format_solution, DisplaySolution, NO_SOLUTION};
pub use gaussian::{gaussian_elimination, GaussianElimination};
pub use inversion::{
    determinant, invert, multiply, solve_by_inversion, MatrixInversion,
};
pub use plot::{project, PlotPoint, ProjectionError, Projector};
pub use solve::{Method, Solver};
pub use system::{
    AugmentedMatrix, EquationCount, ShapeError, UnsupportedEquationCount,
};
pub use workspace::{recompute, MethodReport, Report, Workspace};

/// An `N x N` matrix of coefficients.
pub type SquareMatrix = nalgebra::DMatrix<f64>;
/// A column of constants, or the solution to a system.
pub type Vector = nalgebra::DVector<f64>;
