//! Importing and exporting a system as JSON.
//!
//! The file format is a single object:
//!
//! ```json
//! {
//!   "coeficients": [[2.0, 3.0, 8.0], [5.0, 1.0, 7.0]],
//!   "selectedNumberOfEquations": 2
//! }
//! ```

use crate::system::{AugmentedMatrix, EquationCount, ShapeError};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    CountMismatch(#[from] CountMismatch),

    /// JSON has no way to write `NaN` or an infinity.
    #[error("The coefficient at ({row}, {column}) isn't a finite number")]
    NonFinite { row: usize, column: usize },
}

/// The document says it has one number of equations, but the matrix has
/// another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected {declared} equations but the matrix has {rows} rows")]
pub struct CountMismatch {
    pub declared: usize,
    pub rows: usize,
}

/// Everything needed to restore a system, always saved and loaded as a
/// whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct CoefficientsDocument {
    #[serde(rename = "coeficients")]
    coefficients: AugmentedMatrix,
    #[serde(rename = "selectedNumberOfEquations")]
    equations: EquationCount,
}

impl CoefficientsDocument {
    pub fn new(
        equations: EquationCount,
        coefficients: AugmentedMatrix,
    ) -> std::result::Result<Self, CountMismatch> {
        if coefficients.equations() != equations.get() {
            return Err(CountMismatch {
                declared: equations.get(),
                rows: coefficients.equations(),
            });
        }

        Ok(CoefficientsDocument {
            coefficients,
            equations,
        })
    }

    /// A system where every coefficient is zero.
    pub fn blank(equations: EquationCount) -> Self {
        CoefficientsDocument {
            coefficients: AugmentedMatrix::zeroed(equations),
            equations,
        }
    }

    pub fn equations(&self) -> EquationCount { self.equations }

    pub fn coefficients(&self) -> &AugmentedMatrix { &self.coefficients }

    /// Overwrite a single cell, leaving the shape of the system alone.
    pub fn set_coefficient(
        &mut self,
        row: usize,
        column: usize,
        value: f64,
    ) -> std::result::Result<(), ShapeError> {
        self.coefficients.set(row, column, value)
    }

    pub fn into_parts(self) -> (EquationCount, AugmentedMatrix) {
        (self.equations, self.coefficients)
    }
}

/// The document as it appears on disk, before we've checked that the pieces
/// agree with each other.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "coeficients")]
    coefficients: AugmentedMatrix,
    #[serde(rename = "selectedNumberOfEquations")]
    equations: EquationCount,
}

impl TryFrom<RawDocument> for CoefficientsDocument {
    type Error = CountMismatch;

    fn try_from(raw: RawDocument) -> std::result::Result<Self, Self::Error> {
        CoefficientsDocument::new(raw.equations, raw.coefficients)
    }
}

/// Serialize a document as pretty-printed JSON.
///
/// Documents containing `NaN` or an infinity are rejected, otherwise they
/// would be written as `null` and couldn't be read back in.
pub fn encode(doc: &CoefficientsDocument) -> Result<Vec<u8>> {
    check_finite(doc.coefficients())?;
    Ok(serde_json::to_vec_pretty(doc)?)
}

fn check_finite(coefficients: &AugmentedMatrix) -> Result<()> {
    for (row, cells) in coefficients.to_rows().iter().enumerate() {
        if let Some(column) = cells.iter().position(|cell| !cell.is_finite()) {
            return Err(CodecError::NonFinite { row, column });
        }
    }

    Ok(())
}

/// Parse a document, checking that the matrix is well-formed and matches the
/// declared number of equations.
pub fn decode(bytes: &[u8]) -> Result<CoefficientsDocument> {
    let raw: RawDocument = serde_json::from_slice(bytes)?;
    let doc = CoefficientsDocument::new(raw.equations, raw.coefficients)?;

    Ok(doc)
}

pub fn save(path: impl AsRef<Path>, doc: &CoefficientsDocument) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let bytes = encode(doc)?;
    fs::write(path, bytes)?;
    log::debug!("Saved the coefficients to \"{}\"", path.display());

    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<CoefficientsDocument> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}
