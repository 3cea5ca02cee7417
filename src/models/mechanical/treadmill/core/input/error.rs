use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Parameter;

/// A prerequisite of the chosen derivation is absent or unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// A value the derivation depends on was left empty.
    #[error("{0} required")]
    Missing(Parameter),

    /// A supplied value is outside its physical range.
    #[error("{parameter} is out of range")]
    OutOfRange {
        /// The offending parameter.
        parameter: Parameter,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The pulley train reduces to a zero ratio.
    #[error("gear ratio must not be zero")]
    ZeroGearRatio,

    /// The roller is not turning, so its diameter cannot be inferred.
    #[error("roller speed must not be zero")]
    ZeroRollerSpeed,
}

impl InputError {
    pub(crate) fn out_of_range(parameter: impl Into<Parameter>, source: ConstraintError) -> Self {
        Self::OutOfRange {
            parameter: parameter.into(),
            source,
        }
    }
}
