//! Turning a two-variable system into line segments for plotting.

use crate::{config::Config, AugmentedMatrix};
use arrayvec::ArrayVec;
use smol_str::SmolStr;

// We don't care which coordinate space the chart uses
pub type Point = euclid::Point2D<f64, euclid::UnknownUnit>;

/// One end of the line segment drawn for an equation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub position: Point,
    /// Which equation this point belongs to.
    pub equation: SmolStr,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64, equation: impl Into<SmolStr>) -> Self {
        PlotPoint {
            position: Point::new(x, y),
            equation: equation.into(),
        }
    }

    pub fn x(&self) -> f64 { self.position.x }

    pub fn y(&self) -> f64 { self.position.y }
}

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    /// The equation doesn't depend on `y` (e.g. `2x = 4`), so it can't be
    /// written as `y = f(x)`.
    #[error("A vertical line can't be projected as y = f(x)")]
    VerticalLine,
    #[error("Expected 3 coefficients (a*x + b*y = c) but found {found}")]
    CoefficientCount { found: usize },
    #[error("The reference solution is empty")]
    EmptySolution,
}

/// Projects `a*x + b*y = c` onto two points either side of a reference
/// solution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projector {
    half_width: f64,
}

impl Projector {
    pub fn new(half_width: f64) -> Self { Projector { half_width } }

    pub fn with_config(config: &Config) -> Self {
        Projector::new(config.plot_half_width)
    }

    pub fn half_width(&self) -> f64 { self.half_width }

    /// Find the points on the line `a*x + b*y = c` at
    /// `x = solution[0] ± half_width`.
    ///
    /// `coefficients` is `[a, b, c]`.
    pub fn project(
        &self,
        coefficients: &[f64],
        solution: &[f64],
        label: impl Into<SmolStr>,
    ) -> Result<[PlotPoint; 2], ProjectionError> {
        let (a, b, c) = match *coefficients {
            [a, b, c] => (a, b, c),
            _ => {
                return Err(ProjectionError::CoefficientCount {
                    found: coefficients.len(),
                })
            },
        };
        let x = *solution.first().ok_or(ProjectionError::EmptySolution)?;

        if b == 0.0 {
            return Err(ProjectionError::VerticalLine);
        }

        let label = label.into();
        let x_left = x - self.half_width;
        let x_right = x + self.half_width;
        let y = |x: f64| (c - a * x) / b;

        Ok([
            PlotPoint::new(x_left, y(x_left), label.clone()),
            PlotPoint::new(x_right, y(x_right), label),
        ])
    }
}

impl Default for Projector {
    fn default() -> Self { Projector::new(Config::DEFAULT_PLOT_HALF_WIDTH) }
}

/// [`Projector::project()`] using the default width of 10 either side.
pub fn project(
    coefficients: &[f64],
    solution: &[f64],
    label: impl Into<SmolStr>,
) -> Result<[PlotPoint; 2], ProjectionError> {
    Projector::default().project(coefficients, solution, label)
}

/// Project every equation in a two-equation system, labelling them
/// `"Equation 1"` and `"Equation 2"`.
///
/// Nothing is plotted for other sizes. Equations which can't be projected
/// (vertical lines) are skipped.
pub fn project_system(
    system: &AugmentedMatrix,
    solution: &[f64],
    projector: &Projector,
) -> ArrayVec<PlotPoint, 4> {
    let mut points = ArrayVec::new();

    if system.equations() != 2 {
        return points;
    }

    for (i, row) in system.to_rows().iter().enumerate() {
        let label = format!("Equation {}", i + 1);

        match projector.project(row, solution, label.as_str()) {
            Ok(pair) => points.extend(pair),
            Err(e) => log::warn!("Unable to plot {}: {}", label, e),
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_a_simple_line() {
        // x + y = 3, passing through (1, 2)
        let got = project(&[1.0, 1.0, 3.0], &[1.0, 2.0], "Eq").unwrap();

        assert_eq!(
            got,
            [PlotPoint::new(-9.0, 12.0, "Eq"), PlotPoint::new(11.0, -8.0, "Eq")]
        );
    }

    #[test]
    fn both_points_lie_on_the_line() {
        let (a, b, c) = (2.0, 3.0, 8.0);

        let got = project(&[a, b, c], &[1.0, 2.0], "2x + 3y = 8").unwrap();

        for point in &got {
            approx::assert_relative_eq!(
                a * point.x() + b * point.y(),
                c,
                epsilon = 1e-12
            );
            assert_eq!(point.equation, "2x + 3y = 8");
        }
        assert_eq!(got[0].x(), -9.0);
        assert_eq!(got[1].x(), 11.0);
    }

    #[test]
    fn the_width_is_configurable() {
        let projector = Projector::with_config(&Config {
            plot_half_width: 1.0,
            ..Config::default()
        });

        let got = projector.project(&[0.0, 2.0, 4.0], &[5.0], "y = 2").unwrap();

        assert_eq!(
            got,
            [PlotPoint::new(4.0, 2.0, "y = 2"), PlotPoint::new(6.0, 2.0, "y = 2")]
        );
    }

    #[test]
    fn vertical_lines_are_rejected() {
        let got = project(&[2.0, 0.0, 4.0], &[2.0, 1.0], "x = 2");

        assert_eq!(got, Err(ProjectionError::VerticalLine));
    }

    #[test]
    fn only_two_variable_equations_can_be_projected() {
        let got = project(&[1.0, 1.0, 1.0, 3.0], &[1.0, 1.0, 1.0], "3d");

        assert_eq!(got, Err(ProjectionError::CoefficientCount { found: 4 }));
    }

    #[test]
    fn a_reference_solution_is_required() {
        let got = project(&[1.0, 1.0, 3.0], &[], "Eq");

        assert_eq!(got, Err(ProjectionError::EmptySolution));
    }

    #[test]
    fn project_both_equations_of_a_system() {
        let system =
            AugmentedMatrix::from_rows(&[[1.0, 1.0, 3.0], [1.0, -1.0, -1.0]])
                .unwrap();

        let got = project_system(&system, &[1.0, 2.0], &Projector::default());

        let should_be = vec![
            PlotPoint::new(-9.0, 12.0, "Equation 1"),
            PlotPoint::new(11.0, -8.0, "Equation 1"),
            PlotPoint::new(-9.0, -8.0, "Equation 2"),
            PlotPoint::new(11.0, 12.0, "Equation 2"),
        ];
        assert_eq!(got.to_vec(), should_be);
    }

    #[test]
    fn vertical_equations_are_left_out_of_the_plot() {
        let system =
            AugmentedMatrix::from_rows(&[[1.0, 0.0, 1.0], [1.0, 1.0, 3.0]])
                .unwrap();

        let got = project_system(&system, &[1.0, 2.0], &Projector::default());

        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|point| point.equation == "Equation 2"));
    }

    #[test]
    fn three_equation_systems_are_not_plotted() {
        let system = AugmentedMatrix::from_rows(&[
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, 3.0],
        ])
        .unwrap();

        let got =
            project_system(&system, &[1.0, 2.0, 3.0], &Projector::default());

        assert!(got.is_empty());
    }
}
