//! Relations between belt speed, roller speed and roller diameter.
//!
//! The belt moves one roller circumference (`π × D`) per roller revolution,
//! so `v = π × D × n`. Each function below solves that relation for one of
//! its three terms.
//!
//! Denominators are encoded in the argument types: a function that divides
//! by a diameter or a speed takes it as a [`StrictlyPositive`] value.

use std::f64::consts::PI;

use crate::support::constraint::{Constrained, StrictlyPositive};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

/// Roller speed needed to drive the belt at `belt_speed`.
#[must_use]
pub fn roller_speed_from_belt(
    belt_speed: Velocity,
    roller_diameter: Constrained<Length, StrictlyPositive>,
) -> AngularVelocity {
    let circumference = PI * roller_diameter.into_inner().get::<meter>();
    let rpm = belt_speed.get::<meter_per_second>() * 60.0 / circumference;
    AngularVelocity::new::<revolution_per_minute>(rpm)
}

/// Belt speed produced by a roller turning at `roller_speed`.
#[must_use]
pub fn belt_speed_from_roller(roller_speed: AngularVelocity, roller_diameter: Length) -> Velocity {
    let circumference = PI * roller_diameter.get::<meter>();
    let mps = circumference * roller_speed.get::<revolution_per_minute>() / 60.0;
    Velocity::new::<meter_per_second>(mps)
}

/// Roller diameter that turns `roller_speed` into `belt_speed`.
#[must_use]
pub fn roller_diameter_from_speeds(
    belt_speed: Velocity,
    roller_speed: Constrained<AngularVelocity, StrictlyPositive>,
) -> Length {
    let revolutions_per_second = roller_speed.into_inner().get::<revolution_per_minute>() / 60.0;
    let diameter = belt_speed.get::<meter_per_second>() / (PI * revolutions_per_second);
    Length::new::<meter>(diameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, velocity::kilometer_per_hour};

    use crate::support::constraint::ConstraintResult;

    fn kmh(value: f64) -> Velocity {
        Velocity::new::<kilometer_per_hour>(value)
    }

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    #[test]
    fn one_meter_circumference() -> ConstraintResult<()> {
        // 3.6 km/h is 1 m/s, one revolution per second of a 1 m circumference.
        let roller = StrictlyPositive::new(mm(1000.0 / PI))?;
        let speed = roller_speed_from_belt(kmh(3.6), roller);
        assert_relative_eq!(speed.get::<revolution_per_minute>(), 60.0, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn belt_and_roller_round_trip() -> ConstraintResult<()> {
        for (belt, diameter) in [(0.8, 35.0), (7.333, 50.0), (10.0, 60.0), (22.0, 89.5)] {
            let roller = StrictlyPositive::new(mm(diameter))?;
            let roller_speed = roller_speed_from_belt(kmh(belt), roller);
            let back = belt_speed_from_roller(roller_speed, mm(diameter));
            assert_relative_eq!(back.get::<kilometer_per_hour>(), belt, max_relative = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn diameter_inverts_belt_speed() -> ConstraintResult<()> {
        let roller_speed = AngularVelocity::new::<revolution_per_minute>(933.333);
        let belt = belt_speed_from_roller(roller_speed, mm(50.0));
        let diameter = roller_diameter_from_speeds(belt, StrictlyPositive::new(roller_speed)?);
        assert_relative_eq!(diameter.get::<millimeter>(), 50.0, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn stopped_belt() -> ConstraintResult<()> {
        let roller = StrictlyPositive::new(mm(50.0))?;
        let speed = roller_speed_from_belt(kmh(0.0), roller);
        assert_eq!(speed.get::<revolution_per_minute>(), 0.0);
        Ok(())
    }
}
