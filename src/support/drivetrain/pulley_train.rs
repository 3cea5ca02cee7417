use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{AngularVelocity, Length, Ratio},
    ratio::ratio,
};

/// Belt-and-pulley connection from a motor to a roller.
///
/// The motor pulley drives the roller pulley either directly or through a
/// secondary stage: a pair of pulleys on a shared intermediate shaft, where
/// the motor belt turns the motor-side pulley and the roller belt is driven
/// by the roller-side pulley.
///
/// All diameters are guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulleyTrain {
    motor_pulley: Length,
    roller_pulley: Length,
    secondary: Option<SecondaryStage>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SecondaryStage {
    motor_side: Length,
    roller_side: Length,
}

impl PulleyTrain {
    /// Constructs a direct (single-stage) pulley train.
    ///
    /// # Errors
    ///
    /// Returns an error if either diameter is not strictly positive.
    pub fn new(motor_pulley: Length, roller_pulley: Length) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(motor_pulley)?,
            StrictlyPositive::new(roller_pulley)?,
        ))
    }

    /// Constructs a direct pulley train from pre-validated diameters.
    #[must_use]
    pub fn from_constrained(
        motor_pulley: Constrained<Length, StrictlyPositive>,
        roller_pulley: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            motor_pulley: motor_pulley.into_inner(),
            roller_pulley: roller_pulley.into_inner(),
            secondary: None,
        }
    }

    /// Inserts a secondary stage between the motor and roller pulleys.
    ///
    /// # Errors
    ///
    /// Returns an error if either diameter is not strictly positive.
    pub fn with_secondary(self, motor_side: Length, roller_side: Length) -> ConstraintResult<Self> {
        Ok(self.with_secondary_from_constrained(
            StrictlyPositive::new(motor_side)?,
            StrictlyPositive::new(roller_side)?,
        ))
    }

    /// Inserts a secondary stage using pre-validated diameters.
    #[must_use]
    pub fn with_secondary_from_constrained(
        self,
        motor_side: Constrained<Length, StrictlyPositive>,
        roller_side: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            secondary: Some(SecondaryStage {
                motor_side: motor_side.into_inner(),
                roller_side: roller_side.into_inner(),
            }),
            ..self
        }
    }

    /// Returns `true` if the train includes a secondary stage.
    #[must_use]
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    /// Total gear ratio of the train.
    ///
    /// Multiplying a motor speed by this ratio yields the roller speed:
    /// `motor_pulley / roller_pulley` for a direct train, and
    /// `(motor_pulley / motor_side) × (roller_side / roller_pulley)` with a
    /// secondary stage.
    #[must_use]
    pub fn ratio(&self) -> Ratio {
        match self.secondary {
            None => self.motor_pulley / self.roller_pulley,
            Some(stage) => {
                let first: Ratio = self.motor_pulley / stage.motor_side;
                let second: Ratio = stage.roller_side / self.roller_pulley;
                first * second
            }
        }
    }

    /// Roller speed produced by a motor turning at `motor_speed`.
    #[must_use]
    pub fn roller_speed(&self, motor_speed: AngularVelocity) -> AngularVelocity {
        motor_speed * self.ratio().get::<ratio>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angular_velocity::revolution_per_minute, length::millimeter};

    use crate::support::constraint::ConstraintError;

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    #[test]
    fn direct_ratio() -> ConstraintResult<()> {
        let train = PulleyTrain::new(mm(40.0), mm(60.0))?;
        assert!(!train.has_secondary());
        assert_relative_eq!(train.ratio().get::<ratio>(), 2.0 / 3.0);

        let roller = train.roller_speed(AngularVelocity::new::<revolution_per_minute>(1400.0));
        assert_relative_eq!(roller.get::<revolution_per_minute>(), 2800.0 / 3.0);
        Ok(())
    }

    #[test]
    fn secondary_stage_chains_ratios() -> ConstraintResult<()> {
        let train = PulleyTrain::new(mm(40.0), mm(60.0))?.with_secondary(mm(80.0), mm(30.0))?;
        assert!(train.has_secondary());
        // (40 / 80) × (30 / 60)
        assert_relative_eq!(train.ratio().get::<ratio>(), 0.25);
        Ok(())
    }

    #[test]
    fn rejects_zero_diameters() {
        assert_eq!(
            PulleyTrain::new(mm(40.0), mm(0.0)),
            Err(ConstraintError::Zero)
        );

        let train = PulleyTrain::new(mm(40.0), mm(60.0)).unwrap();
        assert_eq!(
            train.with_secondary(mm(-5.0), mm(30.0)),
            Err(ConstraintError::Negative)
        );
    }
}
