use crate::{AugmentedMatrix, Vector};
use std::fmt::{self, Display, Formatter};

/// Something which can solve a system of linear equations.
///
/// A solver never mutates the system it is given, so calling it twice with
/// the same input gives the same answer.
pub trait Solver {
    fn method(&self) -> Method;

    /// Find the unique solution to `system`, if there is one.
    ///
    /// `None` covers singular systems and systems this solver can't handle
    /// (e.g. the wrong number of equations).
    fn solve(&self, system: &AugmentedMatrix) -> Option<Vector>;
}

/// The techniques available for solving a system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Gaussian,
    Inversion,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Method::Gaussian => write!(f, "Gaussian"),
            Method::Inversion => write!(f, "Matrix"),
        }
    }
}
