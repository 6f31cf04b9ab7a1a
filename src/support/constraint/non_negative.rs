use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Used where zero is physically meaningful, such as a bare tube with no fin
/// height or still air with no wind.
///
/// # Examples
///
/// ```
/// use gasifier_models::support::constraint::{Constrained, NonNegative};
/// use uom::si::{f64::Velocity, velocity::meter_per_second};
///
/// let calm = NonNegative::new(Velocity::new::<meter_per_second>(0.0)).unwrap();
/// assert_eq!(calm.into_inner().get::<meter_per_second>(), 0.0);
///
/// assert!(NonNegative::new(Velocity::new::<meter_per_second>(-0.5)).is_err());
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
