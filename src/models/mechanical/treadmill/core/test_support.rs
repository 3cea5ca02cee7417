use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Power, Velocity},
    length::millimeter,
    power::watt,
    velocity::kilometer_per_hour,
};

use super::{ParameterSet, SecondaryPulleys};

pub(crate) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

pub(crate) fn rpm(value: f64) -> AngularVelocity {
    AngularVelocity::new::<revolution_per_minute>(value)
}

pub(crate) fn kmh(value: f64) -> Velocity {
    Velocity::new::<kilometer_per_hour>(value)
}

pub(crate) fn watts(value: f64) -> Power {
    Power::new::<watt>(value)
}

/// Direct drive with an unknown belt speed.
pub(crate) fn scenario_a() -> ParameterSet {
    ParameterSet {
        motor_power: Some(watts(1500.0)),
        motor_speed: Some(rpm(1400.0)),
        motor_pulley_diameter: Some(mm(40.0)),
        roller_pulley_diameter: Some(mm(60.0)),
        roller_diameter: Some(mm(50.0)),
        belt_speed: None,
        secondary: None,
    }
}

/// Direct drive with an unknown motor speed.
pub(crate) fn scenario_b() -> ParameterSet {
    ParameterSet {
        motor_power: Some(watts(1500.0)),
        motor_speed: None,
        motor_pulley_diameter: Some(mm(40.0)),
        roller_pulley_diameter: Some(mm(80.0)),
        roller_diameter: Some(mm(60.0)),
        belt_speed: Some(kmh(10.0)),
        secondary: None,
    }
}

/// Secondary stage with an unknown motor-side pulley.
///
/// Motor power is left empty, so the main resolution is not solvable and
/// only the secondary stage produces a value.
pub(crate) fn scenario_d() -> ParameterSet {
    ParameterSet {
        motor_power: None,
        motor_speed: Some(rpm(1400.0)),
        motor_pulley_diameter: Some(mm(40.0)),
        roller_pulley_diameter: Some(mm(60.0)),
        roller_diameter: Some(mm(50.0)),
        belt_speed: Some(kmh(7.333)),
        secondary: Some(SecondaryPulleys {
            motor_side: None,
            roller_side: Some(mm(30.0)),
        }),
    }
}
