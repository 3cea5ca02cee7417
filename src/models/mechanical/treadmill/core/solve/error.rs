use thiserror::Error;

use crate::models::mechanical::treadmill::core::{CoreField, InputError};

/// Errors that can occur while solving for the missing drivetrain parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Every core field has a value.
    ///
    /// This is informational rather than a failure: there is nothing to compute.
    #[error("no field is empty, no computation needed")]
    NothingToSolve,

    /// More than one core field is empty.
    #[error("exactly one field must be left empty ({} are empty)", missing.len())]
    Underdetermined {
        /// The empty core fields, in form order.
        missing: Vec<CoreField>,
    },

    /// A prerequisite of the derivation is absent or unusable.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The empty field is outside what the drivetrain relations can determine.
    #[error("{field} cannot be solved: {reason}")]
    NotSolvable {
        /// The empty core field.
        field: CoreField,

        /// Why this field is excluded.
        reason: &'static str,
    },

    /// A derivation produced a non-finite value.
    #[error("computation failed: {context}")]
    ComputationFailed {
        /// The quantity that could not be computed.
        context: String,
    },
}

impl SolveError {
    /// Builds the [`SolveError::NotSolvable`] diagnostic for `field`.
    pub(super) fn not_solvable(field: CoreField) -> Self {
        let reason = match field {
            CoreField::MotorPower => "power requires load/torque data unavailable here",
            _ => "pulley sizing is a mechanical design choice, not computable from speed ratios alone",
        };
        Self::NotSolvable { field, reason }
    }

    /// Checks that a derived value is finite.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::ComputationFailed`] naming `context` otherwise.
    pub(super) fn check_finite(value: f64, context: &str) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::ComputationFailed {
                context: format!("{context} is not finite ({value})"),
            })
        }
    }
}
