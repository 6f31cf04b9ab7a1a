use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Used for tube diameters, spacings, tube lengths, and tube counts.
///
/// # Examples
///
/// ```
/// use gasifier_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let tubes = Constrained::<u32, StrictlyPositive>::new(9).unwrap();
/// assert_eq!(tubes.into_inner(), 9);
///
/// assert!(StrictlyPositive::new(0_u32).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn tube_counts() {
        let x = Constrained::<u32, StrictlyPositive>::new(1).unwrap();
        assert_eq!(x.into_inner(), 1);

        let y = StrictlyPositive::new(30_u32).unwrap();
        assert_eq!(y.as_ref(), &30);

        assert!(matches!(
            StrictlyPositive::new(0_u32),
            Err(ConstraintError::Zero)
        ));
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert!(matches!(
            StrictlyPositive::new(-5.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn lengths() {
        assert!(StrictlyPositive::new(Length::new::<millimeter>(215.0)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<millimeter>(-28.0)).is_err());
    }
}
