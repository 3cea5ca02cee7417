use crate::support::{
    constraint::{Constrained, Constraint, NonNegative, StrictlyPositive},
    drivetrain::PulleyTrain,
};
use num_traits::Zero;
use uom::si::f64::{AngularVelocity, Length, Power, Ratio, Velocity};

use crate::models::mechanical::treadmill::core::SolveError;

use super::{CoreField, InputError, Parameter};

/// Drivetrain inputs for a single computation.
///
/// Every field is optional. Leaving exactly one of the six core fields empty
/// asks the solver to resolve it; the secondary-stage pulleys are resolved
/// separately and do not count toward that limit.
///
/// The solver never modifies a parameter set. Derived values are returned
/// in a separate [`ComputationResult`](super::super::ComputationResult).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterSet {
    /// Rated motor power.
    pub motor_power: Option<Power>,

    /// Motor shaft speed.
    pub motor_speed: Option<AngularVelocity>,

    /// Diameter of the pulley on the motor shaft.
    pub motor_pulley_diameter: Option<Length>,

    /// Diameter of the pulley on the roller shaft.
    pub roller_pulley_diameter: Option<Length>,

    /// Diameter of the roller driving the belt.
    pub roller_diameter: Option<Length>,

    /// Linear speed of the belt.
    pub belt_speed: Option<Velocity>,

    /// Secondary reduction stage, or `None` for a direct drive.
    pub secondary: Option<SecondaryPulleys>,
}

/// Pulley diameters of an enabled secondary reduction stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SecondaryPulleys {
    /// Pulley driven by the motor belt.
    pub motor_side: Option<Length>,

    /// Pulley driving the roller belt.
    pub roller_side: Option<Length>,
}

impl ParameterSet {
    /// Returns `true` if the given core field has a value.
    #[must_use]
    pub fn is_present(&self, field: CoreField) -> bool {
        match field {
            CoreField::MotorPower => self.motor_power.is_some(),
            CoreField::MotorSpeed => self.motor_speed.is_some(),
            CoreField::MotorPulleyDiameter => self.motor_pulley_diameter.is_some(),
            CoreField::RollerPulleyDiameter => self.roller_pulley_diameter.is_some(),
            CoreField::RollerDiameter => self.roller_diameter.is_some(),
            CoreField::BeltSpeed => self.belt_speed.is_some(),
        }
    }

    /// Core fields without a value, in form order.
    #[must_use]
    pub fn missing(&self) -> Vec<CoreField> {
        CoreField::ALL
            .into_iter()
            .filter(|&field| !self.is_present(field))
            .collect()
    }

    /// Identifies the single empty core field.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NothingToSolve`] if every core field has a value,
    /// or [`SolveError::Underdetermined`] if more than one is empty.
    pub fn unknown(&self) -> Result<CoreField, SolveError> {
        let missing = self.missing();
        match missing.len() {
            0 => Err(SolveError::NothingToSolve),
            1 => Ok(missing[0]),
            _ => Err(SolveError::Underdetermined { missing }),
        }
    }

    /// Checks every supplied value against its physical range.
    ///
    /// Diameters must be strictly positive; speeds and power must be
    /// non-negative. Empty fields are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), InputError> {
        check::<_, NonNegative>(self.motor_power, CoreField::MotorPower.into())?;
        check::<_, NonNegative>(self.motor_speed, CoreField::MotorSpeed.into())?;
        check::<_, StrictlyPositive>(
            self.motor_pulley_diameter,
            CoreField::MotorPulleyDiameter.into(),
        )?;
        check::<_, StrictlyPositive>(
            self.roller_pulley_diameter,
            CoreField::RollerPulleyDiameter.into(),
        )?;
        check::<_, StrictlyPositive>(self.roller_diameter, CoreField::RollerDiameter.into())?;
        check::<_, NonNegative>(self.belt_speed, CoreField::BeltSpeed.into())?;

        if let Some(stage) = self.secondary {
            check::<_, StrictlyPositive>(stage.motor_side, Parameter::SecondaryMotorSide)?;
            check::<_, StrictlyPositive>(stage.roller_side, Parameter::SecondaryRollerSide)?;
        }

        Ok(())
    }

    /// Total gear ratio, if the full pulley set is known.
    ///
    /// Requires both main pulleys and, when the secondary stage is enabled,
    /// both of its pulleys. Returns `None` if any of them is empty or not
    /// strictly positive.
    #[must_use]
    pub fn total_gear_ratio(&self) -> Option<Ratio> {
        self.pulley_train().ok().map(|train| train.ratio())
    }

    /// Builds the pulley train, naming the first unusable pulley on failure.
    pub(crate) fn pulley_train(&self) -> Result<PulleyTrain, InputError> {
        let train = PulleyTrain::from_constrained(
            positive(
                self.motor_pulley_diameter,
                CoreField::MotorPulleyDiameter.into(),
            )?,
            positive(
                self.roller_pulley_diameter,
                CoreField::RollerPulleyDiameter.into(),
            )?,
        );

        match self.secondary {
            None => Ok(train),
            Some(stage) => Ok(train.with_secondary_from_constrained(
                positive(stage.motor_side, Parameter::SecondaryMotorSide)?,
                positive(stage.roller_side, Parameter::SecondaryRollerSide)?,
            )),
        }
    }
}

/// Unwraps a prerequisite or reports it as missing.
pub(crate) fn required<T>(value: Option<T>, parameter: Parameter) -> Result<T, InputError> {
    value.ok_or(InputError::Missing(parameter))
}

/// Unwraps a prerequisite that must be strictly positive.
pub(crate) fn positive<T: PartialOrd + Zero>(
    value: Option<T>,
    parameter: Parameter,
) -> Result<Constrained<T, StrictlyPositive>, InputError> {
    let value = required(value, parameter)?;
    StrictlyPositive::new(value).map_err(|source| InputError::out_of_range(parameter, source))
}

fn check<T, C: Constraint<T>>(value: Option<T>, parameter: Parameter) -> Result<(), InputError> {
    match value {
        Some(value) => C::check(&value).map_err(|source| InputError::out_of_range(parameter, source)),
        None => Ok(()),
    }
}
