//! Drivetrain analysis toolkit.
//!
//! This module provides general-purpose utilities for belt-and-pulley
//! drivetrains that end in a roller driving a belt, as found in treadmills
//! and conveyors.
//!
//! # Overview
//!
//! A motor pulley drives a roller pulley, optionally through an intermediate
//! two-pulley stage. The resulting ratio links motor speed to roller speed,
//! and the roller circumference links roller speed to belt speed.
//!
//! This toolkit provides:
//!
//! - **Pulley trains**: [`PulleyTrain`] and its total [gear ratio](PulleyTrain::ratio)
//! - **Kinematics**: [`kinematics`] relations between belt speed, roller speed
//!   and roller diameter
//! - **Display**: [`format_ratio`] for `N:1` / `1:N` rendering,
//!   [`parse_ratio`] for reading it back, and [`DisplayConfig`]
//!
//! # Example
//!
//! ```
//! use drivetrain_models::support::constraint::{ConstraintResult, StrictlyPositive};
//! use drivetrain_models::support::drivetrain::{format_ratio, kinematics, PulleyTrain};
//! use uom::si::{
//!     angular_velocity::revolution_per_minute,
//!     f64::{AngularVelocity, Length},
//!     length::millimeter,
//!     ratio::ratio,
//!     velocity::kilometer_per_hour,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     let train = PulleyTrain::new(
//!         Length::new::<millimeter>(40.0),
//!         Length::new::<millimeter>(60.0),
//!     )?;
//!     assert_eq!(format_ratio(Some(train.ratio().get::<ratio>())), "1:1.5");
//!
//!     let roller_speed = train.roller_speed(AngularVelocity::new::<revolution_per_minute>(1400.0));
//!     let roller_diameter = Length::new::<millimeter>(50.0);
//!     let belt_speed = kinematics::belt_speed_from_roller(roller_speed, roller_diameter);
//!
//!     // And back again.
//!     let roller_diameter = StrictlyPositive::new(roller_diameter)?;
//!     let round_trip = kinematics::roller_speed_from_belt(belt_speed, roller_diameter);
//!     assert!((round_trip.get::<revolution_per_minute>() - 933.333).abs() < 1e-3);
//!     assert!((belt_speed.get::<kilometer_per_hour>() - 8.796).abs() < 1e-3);
//!
//!     Ok(())
//! }
//! ```

mod display;
pub mod kinematics;
mod pulley_train;
mod ratio;

pub use display::{ABSENT, DisplayConfig};
pub use pulley_train::PulleyTrain;
pub use ratio::{format_ratio, format_ratio_with, parse_ratio};
