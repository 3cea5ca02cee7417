use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that may be zero but never negative.
///
/// Used for speeds and power, where a stopped motor or belt is a valid input.
///
/// # Examples
///
/// ```
/// use drivetrain_models::support::constraint::{Constrained, NonNegative};
///
/// let x = Constrained::<_, NonNegative>::new(1400.0).unwrap();
/// assert_eq!(x.into_inner(), 1400.0);
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Power, Velocity},
        power::watt,
        velocity::kilometer_per_hour,
    };

    #[test]
    fn belt_speeds() {
        assert!(NonNegative::new(Velocity::new::<kilometer_per_hour>(12.0)).is_ok());
        assert!(NonNegative::new(Velocity::new::<kilometer_per_hour>(0.0)).is_ok());
        assert_eq!(
            NonNegative::new(Velocity::new::<kilometer_per_hour>(-1.0)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn motor_power() {
        let power = NonNegative::new(Power::new::<watt>(1500.0)).unwrap();
        assert_eq!(power.into_inner().get::<watt>(), 1500.0);
        assert!(NonNegative::new(Power::new::<watt>(f64::NAN)).is_err());
    }
}
