//! Treadmill drivetrain models.
//!
//! This module provides a [`twine_core::Model`] implementation that resolves
//! the one missing drivetrain parameter of a treadmill. The computational
//! core is in the internal [`core`] module. [`form`] turns raw form text into
//! parameters and [`catalog`] persists named models.
//!
//! # Example
//!
//! ```
//! use drivetrain_models::models::mechanical::treadmill::{ParameterSet, TreadmillDrivetrain};
//! use twine_core::Model;
//! use uom::si::{
//!     angular_velocity::revolution_per_minute,
//!     f64::{AngularVelocity, Length, Power},
//!     length::millimeter,
//!     power::watt,
//!     velocity::kilometer_per_hour,
//! };
//!
//! let params = ParameterSet {
//!     motor_power: Some(Power::new::<watt>(1500.0)),
//!     motor_speed: Some(AngularVelocity::new::<revolution_per_minute>(1400.0)),
//!     motor_pulley_diameter: Some(Length::new::<millimeter>(40.0)),
//!     roller_pulley_diameter: Some(Length::new::<millimeter>(60.0)),
//!     roller_diameter: Some(Length::new::<millimeter>(50.0)),
//!     ..ParameterSet::default()
//! };
//!
//! let result = TreadmillDrivetrain.call(&params)?;
//! let belt_kmh = result.belt_speed.map(|v| v.get::<kilometer_per_hour>());
//! assert!((belt_kmh.unwrap() - 8.796).abs() < 1e-3);
//! assert_eq!(result.gear_ratio_display, "1:1.5");
//! # Ok::<(), drivetrain_models::models::mechanical::treadmill::SolveError>(())
//! ```

pub mod catalog;
pub(crate) mod core;
pub mod form;

use twine_core::Model;

pub use self::core::{
    ComputationResult, CoreField, Evaluation, InputError, Parameter, ParameterSet, ResultDisplay,
    SecondaryPulleys, SecondaryResolution, SolveError,
};

/// Single-unknown treadmill drivetrain solver.
///
/// Stateless: every call works only from the supplied [`ParameterSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreadmillDrivetrain;

impl TreadmillDrivetrain {
    /// Solves for the single empty core field of `params`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if the parameter set does not have exactly one
    /// solvable empty field or its values cannot support the derivation.
    pub fn solve(self, params: &ParameterSet) -> Result<ComputationResult, SolveError> {
        self::core::solve(params)
    }

    /// Derives a missing secondary-stage pulley from the overall speed ratio.
    #[must_use]
    pub fn resolve_secondary(self, params: &ParameterSet) -> SecondaryResolution {
        self::core::resolve_secondary(params)
    }

    /// Runs the secondary-stage resolution and the main solve together.
    #[must_use]
    pub fn evaluate(self, params: &ParameterSet) -> Evaluation {
        self::core::evaluate(params)
    }
}

impl Model for TreadmillDrivetrain {
    type Input = ParameterSet;
    type Output = ComputationResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angular_velocity::revolution_per_minute,
        f64::{AngularVelocity, Length, Power, Velocity},
        length::millimeter,
        power::watt,
        velocity::kilometer_per_hour,
    };

    fn params() -> ParameterSet {
        ParameterSet {
            motor_power: Some(Power::new::<watt>(1500.0)),
            motor_speed: None,
            motor_pulley_diameter: Some(Length::new::<millimeter>(40.0)),
            roller_pulley_diameter: Some(Length::new::<millimeter>(80.0)),
            roller_diameter: Some(Length::new::<millimeter>(60.0)),
            belt_speed: Some(Velocity::new::<kilometer_per_hour>(10.0)),
            secondary: None,
        }
    }

    #[test]
    fn model_call_matches_solve() {
        let model = TreadmillDrivetrain;
        let via_model = model.call(&params()).expect("motor speed should solve");
        assert_eq!(via_model, model.solve(&params()).unwrap());
        assert_relative_eq!(
            via_model.motor_speed.unwrap().get::<revolution_per_minute>(),
            1768.388_256_576_614_8,
            max_relative = 1e-9
        );
    }

    #[test]
    fn model_reports_diagnostics() {
        let complete = ParameterSet {
            motor_speed: Some(AngularVelocity::new::<revolution_per_minute>(1400.0)),
            ..params()
        };
        assert_eq!(
            TreadmillDrivetrain.call(&complete),
            Err(SolveError::NothingToSolve)
        );
    }

    #[test]
    fn evaluate_combines_secondary_and_main() {
        let params = ParameterSet {
            motor_power: None,
            motor_speed: Some(AngularVelocity::new::<revolution_per_minute>(1400.0)),
            secondary: Some(SecondaryPulleys {
                motor_side: None,
                roller_side: Some(Length::new::<millimeter>(30.0)),
            }),
            ..params()
        };
        let evaluation = TreadmillDrivetrain.evaluate(&params);
        assert!(evaluation.solution.is_err());
        assert_eq!(
            evaluation.secondary,
            TreadmillDrivetrain.resolve_secondary(&params)
        );
        assert!(evaluation.secondary.motor_side.is_some());
    }
}
