//! Best-effort resolution of a missing secondary-stage pulley.
//!
//! When motor speed and roller speed are both known, their ratio fixes the
//! total gear ratio, which leaves one free diameter in
//! `(motor_pulley / motor_side) × (roller_side / roller_pulley)`.

use crate::support::{constraint::StrictlyPositive, drivetrain::kinematics};
use uom::si::{angular_velocity::revolution_per_minute, f64::Length, length::millimeter};

use super::{ParameterSet, SecondaryResolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Motor,
    Roller,
}

/// Derives the one missing secondary-stage pulley, if possible.
///
/// Runs only when the secondary stage is enabled with exactly one side empty
/// and every supplied value is in range. Needs motor speed, a roller speed
/// from belt speed and roller diameter, and both main pulleys. Anything short
/// of that leaves the resolution empty.
pub(crate) fn resolve_secondary(params: &ParameterSet) -> SecondaryResolution {
    let Some(stage) = params.secondary else {
        return SecondaryResolution::default();
    };

    let (side, known) = match (stage.motor_side, stage.roller_side) {
        (None, Some(roller_side)) => (Side::Motor, roller_side),
        (Some(motor_side), None) => (Side::Roller, motor_side),
        _ => return SecondaryResolution::default(),
    };

    let Some(diameter) = derive(params, side, known) else {
        tracing::debug!(?side, "secondary pulley left unresolved");
        return SecondaryResolution::default();
    };

    tracing::debug!(?side, diameter_mm = diameter.get::<millimeter>(), "resolved secondary pulley");
    match side {
        Side::Motor => SecondaryResolution {
            motor_side: Some(diameter),
            roller_side: None,
        },
        Side::Roller => SecondaryResolution {
            motor_side: None,
            roller_side: Some(diameter),
        },
    }
}

fn derive(params: &ParameterSet, side: Side, known: Length) -> Option<Length> {
    params.validate().ok()?;

    let motor_rpm = params.motor_speed?.get::<revolution_per_minute>();
    let roller_diameter = StrictlyPositive::new(params.roller_diameter?).ok()?;
    let roller_speed = kinematics::roller_speed_from_belt(params.belt_speed?, roller_diameter);
    if motor_rpm == 0.0 {
        return None;
    }
    let ratio_total = roller_speed.get::<revolution_per_minute>() / motor_rpm;

    let motor_pulley = params.motor_pulley_diameter?.get::<millimeter>();
    let roller_pulley = params.roller_pulley_diameter?.get::<millimeter>();
    let known = known.get::<millimeter>();

    let diameter = match side {
        Side::Motor => {
            if ratio_total == 0.0 {
                return None;
            }
            motor_pulley * (known / roller_pulley) / ratio_total
        }
        Side::Roller => ratio_total * (known * roller_pulley) / motor_pulley,
    };

    StrictlyPositive::new(Length::new::<millimeter>(diameter))
        .ok()
        .filter(|d| d.as_ref().get::<millimeter>().is_finite())
        .map(|d| d.into_inner())
}
