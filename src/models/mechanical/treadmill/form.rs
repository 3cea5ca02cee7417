//! Raw form text and its conversion to drivetrain parameters.
//!
//! Every numeric entry is free text. Empty, unparseable and non-finite text
//! all count as "absent", which is what lets the solver treat an empty field
//! as the unknown to resolve.

use serde::{Deserialize, Serialize};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Power, Velocity},
    length::millimeter,
    power::watt,
    velocity::kilometer_per_hour,
};

use super::{ParameterSet, SecondaryPulleys};

/// Parses one form entry into a number.
///
/// Surrounding whitespace is ignored. Returns `None` for empty text, text
/// that is not a number, and infinite or NaN values.
#[must_use]
pub fn parse_field(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            tracing::debug!(text, value, "ignoring non-finite entry");
            None
        }
        Err(error) => {
            tracing::debug!(text, %error, "ignoring unparseable entry");
            None
        }
    }
}

/// Raw text of the drivetrain form.
///
/// Units are fixed by the form: watts, rpm, millimeters and km/h. The serde
/// field names match the keys of a saved model record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    /// Motor power in W.
    pub motor_power: String,

    /// Motor speed in rpm.
    #[serde(rename = "motor_rpm")]
    pub motor_speed: String,

    /// Motor pulley diameter in mm.
    #[serde(rename = "motor_pulley_d")]
    pub motor_pulley_diameter: String,

    /// Whether the secondary reduction stage is enabled.
    pub use_secondary: bool,

    /// Secondary motor-side pulley diameter in mm.
    #[serde(rename = "sec1")]
    pub secondary_motor_side: String,

    /// Secondary roller-side pulley diameter in mm.
    #[serde(rename = "sec2")]
    pub secondary_roller_side: String,

    /// Roller pulley diameter in mm.
    #[serde(rename = "roller_pulley_d")]
    pub roller_pulley_diameter: String,

    /// Roller diameter in mm.
    pub roller_diameter: String,

    /// Belt speed in km/h.
    #[serde(rename = "belt_kmh")]
    pub belt_speed: String,
}

impl FormFields {
    /// Returns a copy with surrounding whitespace removed from every entry.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let trim = |s: &String| s.trim().to_string();
        Self {
            motor_power: trim(&self.motor_power),
            motor_speed: trim(&self.motor_speed),
            motor_pulley_diameter: trim(&self.motor_pulley_diameter),
            use_secondary: self.use_secondary,
            secondary_motor_side: trim(&self.secondary_motor_side),
            secondary_roller_side: trim(&self.secondary_roller_side),
            roller_pulley_diameter: trim(&self.roller_pulley_diameter),
            roller_diameter: trim(&self.roller_diameter),
            belt_speed: trim(&self.belt_speed),
        }
    }

    /// Converts the form text to a [`ParameterSet`].
    ///
    /// The secondary-stage entries are only read when `use_secondary` is set.
    #[must_use]
    pub fn to_parameters(&self) -> ParameterSet {
        let mm = |text: &str| parse_field(text).map(Length::new::<millimeter>);

        ParameterSet {
            motor_power: parse_field(&self.motor_power).map(Power::new::<watt>),
            motor_speed: parse_field(&self.motor_speed)
                .map(AngularVelocity::new::<revolution_per_minute>),
            motor_pulley_diameter: mm(&self.motor_pulley_diameter),
            roller_pulley_diameter: mm(&self.roller_pulley_diameter),
            roller_diameter: mm(&self.roller_diameter),
            belt_speed: parse_field(&self.belt_speed).map(Velocity::new::<kilometer_per_hour>),
            secondary: self.use_secondary.then(|| SecondaryPulleys {
                motor_side: mm(&self.secondary_motor_side),
                roller_side: mm(&self.secondary_roller_side),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::mechanical::treadmill::{CoreField, TreadmillDrivetrain};

    fn scenario_a() -> FormFields {
        FormFields {
            motor_power: "1500".into(),
            motor_speed: " 1400 ".into(),
            motor_pulley_diameter: "40".into(),
            roller_pulley_diameter: "60".into(),
            roller_diameter: "50".into(),
            ..FormFields::default()
        }
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_field("42"), Some(42.0));
        assert_eq!(parse_field("  7.5\t"), Some(7.5));
        assert_eq!(parse_field("-3"), Some(-3.0));
        assert_eq!(parse_field("1e3"), Some(1000.0));
    }

    #[test]
    fn treats_bad_text_as_absent() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("12mm"), None);
        assert_eq!(parse_field("inf"), None);
        assert_eq!(parse_field("NaN"), None);
    }

    #[test]
    fn converts_units() {
        let params = scenario_a().to_parameters();
        assert_relative_eq!(params.motor_power.unwrap().get::<watt>(), 1500.0);
        assert_relative_eq!(
            params.motor_speed.unwrap().get::<revolution_per_minute>(),
            1400.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            params.roller_diameter.unwrap().get::<millimeter>(),
            50.0,
            max_relative = 1e-12
        );
        assert!(params.belt_speed.is_none());
        assert!(params.secondary.is_none());
        assert_eq!(params.missing(), vec![CoreField::BeltSpeed]);
    }

    #[test]
    fn secondary_entries_need_the_flag() {
        let fields = FormFields {
            secondary_roller_side: "30".into(),
            ..scenario_a()
        };
        assert!(fields.to_parameters().secondary.is_none());

        let enabled = FormFields {
            use_secondary: true,
            ..fields
        };
        let stage = enabled.to_parameters().secondary.unwrap();
        assert!(stage.motor_side.is_none());
        assert_relative_eq!(
            stage.roller_side.unwrap().get::<millimeter>(),
            30.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn form_text_solves_end_to_end() {
        let result = TreadmillDrivetrain
            .solve(&scenario_a().to_parameters())
            .expect("belt speed should solve");
        assert_eq!(result.display().belt_kmh, "8.796");
    }

    #[test]
    fn serde_uses_record_keys() {
        let json = serde_json::to_value(scenario_a().trimmed()).unwrap();
        assert_eq!(json["motor_rpm"], "1400");
        assert_eq!(json["motor_pulley_d"], "40");
        assert_eq!(json["use_secondary"], false);
        assert_eq!(json["belt_kmh"], "");

        let parsed: FormFields =
            serde_json::from_str(r#"{"sec2": "30", "use_secondary": true}"#).unwrap();
        assert_eq!(parsed.secondary_roller_side, "30");
        assert!(parsed.use_secondary);
        assert_eq!(parsed.motor_power, "");
    }
}
