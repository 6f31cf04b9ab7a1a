use uom::si::f64::Length;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::GasifierError;

/// Rectangular tube array of one gasifier module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleConfig {
    tubes_x: Constrained<u32, StrictlyPositive>,
    tubes_y: Constrained<u32, StrictlyPositive>,
    spacing_x: Constrained<Length, StrictlyPositive>,
    spacing_y: Constrained<Length, StrictlyPositive>,
}

impl ModuleConfig {
    /// Creates a module layout of `tubes_x` by `tubes_y` tubes on a
    /// center-to-center pitch of `spacing_x` by `spacing_y`.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::InvalidLayout`] if a tube count is zero, the
    /// tube total does not fit in a `u32`, or a spacing is not strictly
    /// positive.
    pub fn new(
        tubes_x: u32,
        tubes_y: u32,
        spacing_x: Length,
        spacing_y: Length,
    ) -> Result<Self, GasifierError> {
        if tubes_x.checked_mul(tubes_y).is_none() {
            return Err(GasifierError::InvalidLayout {
                field: "tubes_y",
                source: ConstraintError::AboveMaximum,
            });
        }
        Ok(Self {
            tubes_x: StrictlyPositive::new(tubes_x).map_err(GasifierError::layout("tubes_x"))?,
            tubes_y: StrictlyPositive::new(tubes_y).map_err(GasifierError::layout("tubes_y"))?,
            spacing_x: StrictlyPositive::new(spacing_x)
                .map_err(GasifierError::layout("spacing_x"))?,
            spacing_y: StrictlyPositive::new(spacing_y)
                .map_err(GasifierError::layout("spacing_y"))?,
        })
    }

    #[must_use]
    pub fn tubes_x(&self) -> u32 {
        self.tubes_x.into_inner()
    }

    #[must_use]
    pub fn tubes_y(&self) -> u32 {
        self.tubes_y.into_inner()
    }

    #[must_use]
    pub fn spacing_x(&self) -> Length {
        self.spacing_x.into_inner()
    }

    #[must_use]
    pub fn spacing_y(&self) -> Length {
        self.spacing_y.into_inner()
    }

    /// Number of tubes in the module.
    ///
    /// Cannot overflow: [`new`](Self::new) rejects layouts whose product
    /// exceeds `u32::MAX`.
    #[must_use]
    pub fn n_tubes(&self) -> u32 {
        self.tubes_x() * self.tubes_y()
    }

    /// Plan dimensions `(width, depth)` of the tube array.
    ///
    /// `tube_diameter` must be the finned outer diameter: the outermost
    /// tubes overhang the pitch grid by half of it on each side.
    #[must_use]
    pub fn footprint(&self, tube_diameter: Length) -> (Length, Length) {
        let width = self.spacing_x() * f64::from(self.tubes_x() - 1) + tube_diameter;
        let depth = self.spacing_y() * f64::from(self.tubes_y() - 1) + tube_diameter;
        (width, depth)
    }
}
