//! Human-readable solutions.

use crate::Vector;
use std::fmt::{self, Display, Formatter};

/// What gets shown when a solver couldn't find a unique solution.
pub const NO_SOLUTION: &str = "Input is invalid or there are no solutions";

/// Render a solution as `"x0 = 1.00 x1 = 2.00 "`, with every value rounded to
/// two decimal places and followed by a space.
///
/// Non-finite values are written the way C's `printf("%.2f")` writes them
/// (`nan`, `inf`, `-inf`).
pub fn format_solution(solution: Option<&Vector>) -> String {
    DisplaySolution(solution).to_string()
}

/// A [`Display`] adapter for an optional solution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplaySolution<'a>(pub Option<&'a Vector>);

impl<'a> Display for DisplaySolution<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(solution) => {
                for (i, &value) in solution.iter().enumerate() {
                    if value.is_nan() {
                        write!(f, "x{} = nan ", i)?;
                    } else {
                        write!(f, "x{} = {:.2} ", i, value)?;
                    }
                }

                Ok(())
            },
            None => f.write_str(NO_SOLUTION),
        }
    }
}
