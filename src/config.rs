use serde::{Deserialize, Serialize};

/// Knobs for the solvers and the plot projection.
///
/// By default only an exact zero is singular and each plotted line extends 10
/// units either side of the solution. Missing fields are filled in from
/// [`Config::default()`] when deserializing.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A pivot (or determinant) whose magnitude is at or below this value is
    /// treated as zero.
    ///
    /// At `0.0` only an exact zero makes a system singular, so near-singular
    /// systems still produce a (possibly wildly inaccurate) solution. Raising
    /// it is a deliberate deviation from that behaviour.
    pub zero_tolerance: f64,
    /// How far either side of the solution's `x` coordinate each plotted line
    /// extends.
    pub plot_half_width: f64,
}

impl Config {
    pub const DEFAULT_PLOT_HALF_WIDTH: f64 = 10.0;
}

impl Default for Config {
    fn default() -> Self {
        Config {
            zero_tolerance: 0.0,
            plot_half_width: Config::DEFAULT_PLOT_HALF_WIDTH,
        }
    }
}

/// Is `value` zero, as far as `tolerance` is concerned?
///
/// `NaN` is never zero.
pub(crate) fn is_zero(value: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance
}
