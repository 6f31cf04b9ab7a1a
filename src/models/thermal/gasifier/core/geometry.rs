use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::support::constraint::{
    Constrained, NonNegative, StrictlyPositive, UnitIntervalLowerOpen,
};

use super::GasifierError;

/// Cross-section of one vertical finned tube.
///
/// Fins are straight radial plates running the full tube length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinTubeGeometry {
    tube_od: Constrained<Length, StrictlyPositive>,
    fin_height: Constrained<Length, NonNegative>,
    fin_count: u32,
    fin_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
}

impl FinTubeGeometry {
    /// Creates a finned-tube cross-section.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::InvalidGeometry`] if the tube outer diameter
    /// is not strictly positive, the fin height is negative, or the fin
    /// efficiency is outside `(0, 1]`.
    pub fn new(
        tube_od: Length,
        fin_height: Length,
        fin_count: u32,
        fin_efficiency: Ratio,
    ) -> Result<Self, GasifierError> {
        Ok(Self {
            tube_od: StrictlyPositive::new(tube_od).map_err(GasifierError::geometry("tube_od"))?,
            fin_height: NonNegative::new(fin_height)
                .map_err(GasifierError::geometry("fin_height"))?,
            fin_count,
            fin_efficiency: UnitIntervalLowerOpen::new(fin_efficiency)
                .map_err(GasifierError::geometry("fin_efficiency"))?,
        })
    }

    /// Outer diameter of the bare tube (liner).
    #[must_use]
    pub fn tube_od(&self) -> Length {
        self.tube_od.into_inner()
    }

    /// Radial height of each fin.
    #[must_use]
    pub fn fin_height(&self) -> Length {
        self.fin_height.into_inner()
    }

    /// Number of fins on one tube.
    #[must_use]
    pub fn fin_count(&self) -> u32 {
        self.fin_count
    }

    /// Fin efficiency.
    #[must_use]
    pub fn fin_efficiency(&self) -> Ratio {
        self.fin_efficiency.into_inner()
    }

    /// Outer diameter including fins, `OD + 2·fin height`.
    ///
    /// This is the characteristic diameter used by the convection
    /// correlations and the footprint.
    #[must_use]
    pub fn finned_diameter(&self) -> Length {
        self.tube_od() + self.fin_height() * 2.0
    }

    /// Effective heat-transfer area of a one-meter tube section.
    ///
    /// ```text
    /// A = π·OD + ε · N · (2 · π·OD · h_fin)
    /// ```
    ///
    /// The first term is the bare tube surface; each fin contributes both
    /// faces, weighted by the fin efficiency ε.
    #[must_use]
    pub fn area_per_meter(&self) -> Area {
        let od = self.tube_od().get::<meter>();
        let fin_height = self.fin_height().get::<meter>();
        let circumference = PI * od;

        let bare = circumference;
        let fins = f64::from(self.fin_count) * 2.0 * circumference * fin_height;

        Area::new::<square_meter>(bare + self.fin_efficiency().get::<ratio>() * fins)
    }

    /// Effective heat-transfer area of one tube of the given length.
    #[must_use]
    pub fn exposed_area(&self, tube_length: Length) -> Area {
        self.area_per_meter() * tube_length.get::<meter>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    use crate::support::constraint::ConstraintError;

    fn geometry(fin_height_mm: f64, fin_count: u32) -> FinTubeGeometry {
        FinTubeGeometry::new(
            Length::new::<millimeter>(28.0),
            Length::new::<millimeter>(fin_height_mm),
            fin_count,
            Ratio::new::<ratio>(0.85),
        )
        .unwrap()
    }

    #[test]
    fn reference_area_per_meter() {
        let area = geometry(200.0, 12).area_per_meter();
        assert_relative_eq!(
            area.get::<square_meter>(),
            0.446_860_139_046_612_15,
            max_relative = 1e-12
        );
    }

    #[test]
    fn bare_tube_is_its_circumference() {
        let area = geometry(0.0, 12).area_per_meter();
        assert_relative_eq!(area.get::<square_meter>(), PI * 0.028, max_relative = 1e-12);

        let area = geometry(200.0, 0).area_per_meter();
        assert_relative_eq!(area.get::<square_meter>(), PI * 0.028, max_relative = 1e-12);
    }

    #[test]
    fn finned_diameter_includes_both_fins() {
        let d = geometry(200.0, 12).finned_diameter();
        assert_relative_eq!(d.get::<millimeter>(), 428.0, max_relative = 1e-12);
    }

    #[test]
    fn area_increases_with_fin_height() {
        let mut previous = geometry(50.0, 12).area_per_meter();
        for height in (60..=500).step_by(10) {
            let area = geometry(f64::from(height), 12).area_per_meter();
            assert!(area > previous, "not increasing at {height} mm");
            previous = area;
        }
    }

    #[test]
    fn area_increases_with_fin_count() {
        let mut previous = geometry(200.0, 6).area_per_meter();
        for count in 7..=40 {
            let area = geometry(200.0, count).area_per_meter();
            assert!(area > previous, "not increasing at {count} fins");
            previous = area;
        }
    }

    #[test]
    fn exposed_area_scales_with_length() {
        let g = geometry(200.0, 12);
        let area = g.exposed_area(Length::new::<millimeter>(4600.0));
        assert_relative_eq!(
            area.get::<square_meter>(),
            4.6 * g.area_per_meter().get::<square_meter>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_invalid_dimensions() {
        let err = FinTubeGeometry::new(
            Length::new::<millimeter>(0.0),
            Length::new::<millimeter>(200.0),
            12,
            Ratio::new::<ratio>(0.85),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GasifierError::InvalidGeometry {
                field: "tube_od",
                source: ConstraintError::Zero,
            }
        );

        let err = FinTubeGeometry::new(
            Length::new::<millimeter>(28.0),
            Length::new::<millimeter>(-1.0),
            12,
            Ratio::new::<ratio>(0.85),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GasifierError::InvalidGeometry {
                field: "fin_height",
                ..
            }
        ));

        let err = FinTubeGeometry::new(
            Length::new::<millimeter>(28.0),
            Length::new::<millimeter>(200.0),
            12,
            Ratio::new::<ratio>(1.5),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GasifierError::InvalidGeometry {
                field: "fin_efficiency",
                source: ConstraintError::AboveMaximum,
            }
        );
    }
}
