//! Results types for drivetrain solving.

use serde::{Deserialize, Serialize};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Ratio, Velocity},
    length::millimeter,
    ratio::ratio,
    velocity::kilometer_per_hour,
};

use crate::support::drivetrain::{ABSENT, DisplayConfig, format_ratio_with};

use super::{CoreField, SolveError};

/// Values derived by a successful solve.
///
/// Inputs that the derivation used are echoed (motor speed, belt speed), so a
/// result can be displayed without the input [`ParameterSet`](super::ParameterSet).
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    /// The core field that was resolved.
    pub solved: CoreField,

    /// Roller speed.
    pub roller_speed: Option<AngularVelocity>,

    /// Motor speed, echoed or derived.
    pub motor_speed: Option<AngularVelocity>,

    /// Belt speed, echoed or derived.
    pub belt_speed: Option<Velocity>,

    /// Total gear ratio (roller speed over motor speed).
    pub gear_ratio: Option<Ratio>,

    /// Gear ratio rendered as `N:1` or `1:N`.
    pub gear_ratio_display: String,

    /// Secondary motor-side pulley diameter, if it was derived.
    pub secondary_motor_side: Option<Length>,

    /// Secondary roller-side pulley diameter, if it was derived.
    pub secondary_roller_side: Option<Length>,

    /// Roller diameter, if it was the field being solved.
    pub roller_diameter: Option<Length>,
}

impl ComputationResult {
    /// Renders the result with the default three-decimal precision.
    #[must_use]
    pub fn display(&self) -> ResultDisplay {
        self.display_with(&DisplayConfig::default())
    }

    /// Renders the result with the given precision.
    #[must_use]
    pub fn display_with(&self, config: &DisplayConfig) -> ResultDisplay {
        ResultDisplay {
            roller_rpm: config.fixed(self.roller_speed.map(|n| n.get::<revolution_per_minute>())),
            motor_rpm: config.fixed(self.motor_speed.map(|n| n.get::<revolution_per_minute>())),
            belt_kmh: config.fixed(self.belt_speed.map(|v| v.get::<kilometer_per_hour>())),
            gear_ratio: format_ratio_with(self.gear_ratio.map(|r| r.get::<ratio>()), config),
            sec1: config.fixed(self.secondary_motor_side.map(|d| d.get::<millimeter>())),
            sec2: config.fixed(self.secondary_roller_side.map(|d| d.get::<millimeter>())),
            roller_diameter: config.fixed(self.roller_diameter.map(|d| d.get::<millimeter>())),
        }
    }
}

/// Secondary-stage pulley diameters derived from the overall speed ratio.
///
/// At most one side is ever set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SecondaryResolution {
    /// Derived motor-side pulley diameter.
    pub motor_side: Option<Length>,

    /// Derived roller-side pulley diameter.
    pub roller_side: Option<Length>,
}

impl SecondaryResolution {
    /// Returns `true` if neither side was derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.motor_side.is_none() && self.roller_side.is_none()
    }
}

/// Outcome of the secondary-stage resolution and the main solve together.
///
/// The two run independently, so a secondary pulley can be derived even
/// when the main solve reports a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Secondary-stage resolution.
    pub secondary: SecondaryResolution,

    /// Main single-unknown solve.
    pub solution: Result<ComputationResult, SolveError>,
}

impl Evaluation {
    /// Renders the evaluation with the default three-decimal precision.
    #[must_use]
    pub fn display(&self) -> ResultDisplay {
        self.display_with(&DisplayConfig::default())
    }

    /// Renders the evaluation with the given precision.
    ///
    /// If the main solve failed, only the secondary stage is shown.
    #[must_use]
    pub fn display_with(&self, config: &DisplayConfig) -> ResultDisplay {
        match &self.solution {
            Ok(result) => result.display_with(config),
            Err(_) => ResultDisplay {
                sec1: config.fixed(self.secondary.motor_side.map(|d| d.get::<millimeter>())),
                sec2: config.fixed(self.secondary.roller_side.map(|d| d.get::<millimeter>())),
                ..ResultDisplay::default()
            },
        }
    }
}

/// Display strings for each derived value.
///
/// Numbers use fixed precision (rpm, km/h, mm) and absent values show `"-"`.
/// The field names match the `computed` block of a saved model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultDisplay {
    /// Roller speed in rpm.
    pub roller_rpm: String,

    /// Motor speed in rpm.
    pub motor_rpm: String,

    /// Belt speed in km/h.
    pub belt_kmh: String,

    /// Total gear ratio as `N:1` or `1:N`.
    pub gear_ratio: String,

    /// Secondary motor-side pulley diameter in mm.
    pub sec1: String,

    /// Secondary roller-side pulley diameter in mm.
    pub sec2: String,

    /// Roller diameter in mm.
    pub roller_diameter: String,
}

impl Default for ResultDisplay {
    fn default() -> Self {
        Self {
            roller_rpm: ABSENT.to_string(),
            motor_rpm: ABSENT.to_string(),
            belt_kmh: ABSENT.to_string(),
            gear_ratio: ABSENT.to_string(),
            sec1: ABSENT.to_string(),
            sec2: ABSENT.to_string(),
            roller_diameter: ABSENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::mechanical::treadmill::core::test_support::{kmh, mm, rpm};

    fn result() -> ComputationResult {
        ComputationResult {
            solved: CoreField::BeltSpeed,
            roller_speed: Some(rpm(2800.0 / 3.0)),
            motor_speed: Some(rpm(1400.0)),
            belt_speed: Some(kmh(8.796_459)),
            gear_ratio: Some(Ratio::new::<ratio>(2.0 / 3.0)),
            gear_ratio_display: "1:1.5".to_string(),
            secondary_motor_side: None,
            secondary_roller_side: None,
            roller_diameter: None,
        }
    }

    #[test]
    fn three_decimal_display() {
        let display = result().display();
        assert_eq!(display.roller_rpm, "933.333");
        assert_eq!(display.motor_rpm, "1400.000");
        assert_eq!(display.belt_kmh, "8.796");
        assert_eq!(display.gear_ratio, "1:1.5");
        assert_eq!(display.sec1, "-");
        assert_eq!(display.roller_diameter, "-");
    }

    #[test]
    fn failed_solve_still_shows_secondary_stage() {
        let evaluation = Evaluation {
            secondary: SecondaryResolution {
                motor_side: Some(mm(35.996_4)),
                roller_side: None,
            },
            solution: Err(SolveError::NothingToSolve),
        };

        let display = evaluation.display();
        assert_eq!(display.sec1, "35.996");
        assert_eq!(display.sec2, "-");
        assert_eq!(display.gear_ratio, "-");
        assert_eq!(display.belt_kmh, "-");
    }

    #[test]
    fn successful_evaluation_uses_the_result() {
        let evaluation = Evaluation {
            secondary: SecondaryResolution::default(),
            solution: Ok(result()),
        };
        assert!(evaluation.secondary.is_empty());
        assert_eq!(evaluation.display(), result().display());
    }
}
