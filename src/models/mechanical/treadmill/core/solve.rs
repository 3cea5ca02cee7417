//! Core single-unknown drivetrain solver.

mod error;
mod resolve;

pub use error::SolveError;

use uom::si::{
    angular_velocity::revolution_per_minute, length::millimeter, ratio::ratio,
    velocity::kilometer_per_hour,
};

use super::{ComputationResult, CoreField, InputError, ParameterSet, resolve_secondary};

/// Solves for the single empty core field.
///
/// The empty field is classified first, then fields the solver never derives
/// are rejected, then supplied values are range-checked, and finally the
/// matching closed-form derivation runs. The secondary stage is resolved
/// alongside and its derived side, if any, is included in the result.
///
/// # Errors
///
/// Returns [`SolveError`] if no field or more than one field is empty, if the
/// empty field cannot be solved, or if a prerequisite is absent or unusable.
pub(crate) fn solve(params: &ParameterSet) -> Result<ComputationResult, SolveError> {
    let unknown = params.unknown()?;
    let derive: fn(&ParameterSet) -> Result<ComputationResult, InputError> = match unknown {
        CoreField::BeltSpeed => resolve::belt_speed,
        CoreField::MotorSpeed => resolve::motor_speed,
        CoreField::RollerDiameter => resolve::roller_diameter,
        CoreField::MotorPower | CoreField::MotorPulleyDiameter | CoreField::RollerPulleyDiameter => {
            return Err(SolveError::not_solvable(unknown));
        }
    };
    params.validate()?;

    tracing::debug!(%unknown, "resolving drivetrain parameter");
    let result = derive(params)?;
    check_result(&result)?;

    // Reaching here needs the full pulley set, so with the current inputs
    // the resolution is empty. It is merged so the result always reflects it.
    let secondary = resolve_secondary(params);
    Ok(ComputationResult {
        secondary_motor_side: secondary.motor_side,
        secondary_roller_side: secondary.roller_side,
        ..result
    })
}

fn check_result(result: &ComputationResult) -> Result<(), SolveError> {
    if let Some(speed) = result.roller_speed {
        SolveError::check_finite(speed.get::<revolution_per_minute>(), "roller speed")?;
    }
    if let Some(speed) = result.motor_speed {
        SolveError::check_finite(speed.get::<revolution_per_minute>(), "motor speed")?;
    }
    if let Some(speed) = result.belt_speed {
        SolveError::check_finite(speed.get::<kilometer_per_hour>(), "belt speed")?;
    }
    if let Some(gear_ratio) = result.gear_ratio {
        SolveError::check_finite(gear_ratio.get::<ratio>(), "gear ratio")?;
    }
    if let Some(diameter) = result.roller_diameter {
        SolveError::check_finite(diameter.get::<millimeter>(), "roller diameter")?;
    }
    Ok(())
}
