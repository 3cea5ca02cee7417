//! Single-unknown treadmill drivetrain solving.
//!
//! A treadmill drivetrain links six core quantities: motor power, motor
//! speed, the two main pulley diameters, roller diameter and belt speed.
//! Given all but one, the solver resolves the missing one where the
//! drivetrain relations allow it. An optional secondary reduction stage adds
//! two more pulleys, one of which can be resolved independently.

mod input;
mod results;
mod secondary;
mod solve;

#[cfg(test)]
mod test_support;

pub use input::{CoreField, InputError, Parameter, ParameterSet, SecondaryPulleys};
pub use results::{ComputationResult, Evaluation, ResultDisplay, SecondaryResolution};
pub use solve::SolveError;

pub(crate) use secondary::resolve_secondary;
pub(crate) use solve::solve;

/// Runs the secondary-stage resolution and the main solve side by side.
pub(crate) fn evaluate(params: &ParameterSet) -> Evaluation {
    Evaluation {
        secondary: resolve_secondary(params),
        solution: solve(params),
    }
}
