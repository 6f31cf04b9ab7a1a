use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::VolumeRate;

use super::super::GasifierError;

/// Errors that can occur while searching for a design ambient temperature.
#[derive(Debug, Error)]
pub enum DesignAmbientError {
    /// The gasifier rejected an input or a result was undefined.
    #[error("gasifier evaluation failed")]
    Gasifier(#[from] GasifierError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The target flow exceeds the output at the warmest searched ambient.
    #[error("target flow unreachable: available={available:?}, target={target:?}")]
    Unreachable {
        target: VolumeRate,
        /// Output at the upper temperature bound.
        available: VolumeRate,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best flow residual achieved.
        residual: VolumeRate,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
