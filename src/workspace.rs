//! Running both solvers over a system and keeping track of what the user has
//! entered.

use crate::{
    config::Config,
    document::{self, CoefficientsDocument, CodecError},
    format::DisplaySolution,
    gaussian::GaussianElimination,
    inversion::MatrixInversion,
    plot::{self, PlotPoint, Projector},
    solve::{Method, Solver},
    system::{AugmentedMatrix, EquationCount, ShapeError},
    Vector,
};
use arrayvec::ArrayVec;
use std::{
    fmt::{self, Display, Formatter},
    time::{Duration, Instant},
};

/// Solve `system` with every method and prepare the results for display.
///
/// This is a pure function of its inputs (apart from the timings), so a UI can
/// call it whenever anything changes.
pub fn recompute(system: &AugmentedMatrix, config: &Config) -> Report {
    let gaussian = run(&GaussianElimination::with_config(config), system);
    let inversion = run(&MatrixInversion::with_config(config), system);

    let reference = gaussian
        .solution
        .as_ref()
        .or_else(|| inversion.solution.as_ref());
    let plot_points = match reference {
        Some(solution) => plot::project_system(
            system,
            solution.as_slice(),
            &Projector::with_config(config),
        ),
        None => ArrayVec::new(),
    };

    Report {
        gaussian,
        inversion,
        plot_points,
    }
}

fn run<S: Solver>(solver: &S, system: &AugmentedMatrix) -> MethodReport {
    let start = Instant::now();
    let solution = solver.solve(system);
    let elapsed = start.elapsed();

    log::debug!(
        "{} method finished in {:?} (solved: {})",
        solver.method(),
        elapsed,
        solution.is_some()
    );

    MethodReport {
        method: solver.method(),
        solution,
        elapsed,
    }
}

/// The outcome of a single solver.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodReport {
    pub method: Method,
    pub solution: Option<Vector>,
    /// Wall-clock time spent inside the solver.
    pub elapsed: Duration,
}

impl MethodReport {
    pub fn text(&self) -> String {
        DisplaySolution(self.solution.as_ref()).to_string()
    }

    pub fn elapsed_ms(&self) -> f64 { self.elapsed.as_secs_f64() * 1000.0 }
}

/// Everything a UI needs to show after solving a system.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub gaussian: MethodReport,
    pub inversion: MethodReport,
    /// Line segments for each equation, only populated for two-equation
    /// systems with a solution.
    pub plot_points: ArrayVec<PlotPoint, 4>,
}

impl Report {
    pub fn methods(&self) -> [&MethodReport; 2] {
        [&self.gaussian, &self.inversion]
    }

    /// Did both methods find (approximately) the same solution?
    ///
    /// Two missing solutions also count as agreement.
    pub fn solutions_agree(&self, epsilon: f64) -> bool {
        match (&self.gaussian.solution, &self.inversion.solution) {
            (Some(left), Some(right)) => {
                left.len() == right.len()
                    && approx::relative_eq!(*left, *right, epsilon = epsilon)
            },
            (None, None) => true,
            _ => false,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solutions")?;
        for method in &self.methods() {
            writeln!(
                f,
                "{}: {}",
                method.method,
                DisplaySolution(method.solution.as_ref())
            )?;
        }

        writeln!(f, "Time spent")?;
        for method in &self.methods() {
            writeln!(f, "{}: {}ms", method.method, method.elapsed_ms())?;
        }

        Ok(())
    }
}

/// The system currently being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    document: CoefficientsDocument,
    config: Config,
}

impl Workspace {
    /// An empty two-equation system.
    pub fn new(config: Config) -> Self {
        Workspace::from_document(
            CoefficientsDocument::blank(EquationCount::default()),
            config,
        )
    }

    pub fn from_document(
        document: CoefficientsDocument,
        config: Config,
    ) -> Self {
        Workspace { document, config }
    }

    pub fn equation_count(&self) -> EquationCount {
        self.document.equations()
    }

    pub fn coefficients(&self) -> &AugmentedMatrix {
        self.document.coefficients()
    }

    pub fn config(&self) -> &Config { &self.config }

    /// Switch to a different number of equations, clearing every coefficient
    /// if the count actually changed.
    pub fn set_equation_count(&mut self, equations: EquationCount) {
        if equations != self.equation_count() {
            self.document = CoefficientsDocument::blank(equations);
        }
    }

    pub fn set_coefficient(
        &mut self,
        row: usize,
        column: usize,
        value: f64,
    ) -> Result<(), ShapeError> {
        self.document.set_coefficient(row, column, value)
    }

    pub fn recompute(&self) -> Report {
        recompute(self.coefficients(), &self.config)
    }

    pub fn document(&self) -> &CoefficientsDocument { &self.document }

    pub fn export(&self) -> Result<Vec<u8>, CodecError> {
        document::encode(&self.document)
    }

    /// Replace the current system with one loaded from `bytes`.
    ///
    /// If the document can't be decoded the workspace is left exactly as it
    /// was.
    pub fn import(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        match document::decode(bytes) {
            Ok(document) => {
                self.document = document;
                Ok(())
            },
            Err(e) => {
                log::warn!("Ignoring an invalid coefficients file: {}", e);
                Err(e)
            },
        }
    }
}

impl Default for Workspace {
    fn default() -> Self { Workspace::new(Config::default()) }
}
