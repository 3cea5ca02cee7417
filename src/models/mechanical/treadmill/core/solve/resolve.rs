//! Closed-form derivations, one per solvable core field.
//!
//! Each function assumes its field is the single unknown and that supplied
//! values passed [`ParameterSet::validate`].

use crate::support::{
    constraint::StrictlyPositive,
    drivetrain::{format_ratio, kinematics},
};
use uom::{
    ConstZero,
    si::{
        f64::{AngularVelocity, Ratio, Velocity},
        ratio::ratio,
    },
};

use crate::models::mechanical::treadmill::core::{
    ComputationResult, CoreField, InputError, ParameterSet,
    input::{positive, required},
};

/// Belt speed from motor speed, the pulley train and the roller.
pub(super) fn belt_speed(params: &ParameterSet) -> Result<ComputationResult, InputError> {
    let roller_diameter = positive(params.roller_diameter, CoreField::RollerDiameter.into())?;
    let motor_speed = required(params.motor_speed, CoreField::MotorSpeed.into())?;
    let train = params.pulley_train()?;

    let gear_ratio = train.ratio();
    let roller_speed = train.roller_speed(motor_speed);
    let belt_speed =
        kinematics::belt_speed_from_roller(roller_speed, roller_diameter.into_inner());

    Ok(result(
        CoreField::BeltSpeed,
        gear_ratio,
        roller_speed,
        motor_speed,
        belt_speed,
    ))
}

/// Motor speed from belt speed, the roller and the pulley train.
pub(super) fn motor_speed(params: &ParameterSet) -> Result<ComputationResult, InputError> {
    let belt_speed = required(params.belt_speed, CoreField::BeltSpeed.into())?;
    let roller_diameter = positive(params.roller_diameter, CoreField::RollerDiameter.into())?;

    let roller_speed = kinematics::roller_speed_from_belt(belt_speed, roller_diameter);
    let gear_ratio = nonzero(params.pulley_train()?.ratio())?;
    let motor_speed = roller_speed / gear_ratio.get::<ratio>();

    Ok(result(
        CoreField::MotorSpeed,
        gear_ratio,
        roller_speed,
        motor_speed,
        belt_speed,
    ))
}

/// Roller diameter from motor speed, the pulley train and belt speed.
///
/// Motor speed is required even though a roller speed could in principle
/// anchor the inversion on its own.
pub(super) fn roller_diameter(params: &ParameterSet) -> Result<ComputationResult, InputError> {
    let motor_speed = required(params.motor_speed, CoreField::MotorSpeed.into())?;
    let train = params.pulley_train()?;
    let gear_ratio = nonzero(train.ratio())?;
    let roller_speed = train.roller_speed(motor_speed);
    let belt_speed = required(params.belt_speed, CoreField::BeltSpeed.into())?;

    let turning = StrictlyPositive::new(roller_speed).map_err(|_| InputError::ZeroRollerSpeed)?;
    let roller_diameter = kinematics::roller_diameter_from_speeds(belt_speed, turning);

    Ok(ComputationResult {
        roller_diameter: Some(roller_diameter),
        ..result(
            CoreField::RollerDiameter,
            gear_ratio,
            roller_speed,
            motor_speed,
            belt_speed,
        )
    })
}

fn nonzero(gear_ratio: Ratio) -> Result<Ratio, InputError> {
    if gear_ratio == Ratio::ZERO {
        Err(InputError::ZeroGearRatio)
    } else {
        Ok(gear_ratio)
    }
}

fn result(
    solved: CoreField,
    gear_ratio: Ratio,
    roller_speed: AngularVelocity,
    motor_speed: AngularVelocity,
    belt_speed: Velocity,
) -> ComputationResult {
    ComputationResult {
        solved,
        roller_speed: Some(roller_speed),
        motor_speed: Some(motor_speed),
        belt_speed: Some(belt_speed),
        gear_ratio: Some(gear_ratio),
        gear_ratio_display: format_ratio(Some(gear_ratio.get::<ratio>())),
        secondary_motor_side: None,
        secondary_roller_side: None,
        roller_diameter: None,
    }
}
