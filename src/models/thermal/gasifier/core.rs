//! Steady-state sizing of an ambient-air finned-tube gasifier module.
//!
//! The module is a rectangular bank of vertical aluminium tubes with straight
//! radial fins. Liquid boils inside the tubes; heat arrives from outside air
//! by mixed natural and wind-driven convection. The outside film is taken as
//! the only thermal resistance, so the overall coefficient `U` equals the
//! convective coefficient `h`.

mod ambient;
mod bank;
mod constants;
mod design_ambient;
mod error;
mod geometry;
mod layout;
mod summary;

#[cfg(test)]
mod test_support;

pub use ambient::AmbientConditions;
pub use bank::{Connection, ModuleBank};
pub use constants::PhysicalConstants;
pub use design_ambient::{DesignAmbientConfig, DesignAmbientError, design_ambient};
pub use error::GasifierError;
pub use geometry::FinTubeGeometry;
pub use layout::ModuleConfig;
pub use summary::{Footprint, Summary};

use std::str::FromStr;

use thiserror::Error;
use uom::si::{
    f64::{
        Area, HeatTransfer, Length, Mass, MassRate, Power, ThermalConductance, Time, Volume,
        VolumeRate,
    },
    available_energy::joule_per_kilogram,
    thermal_conductance::watt_per_kelvin,
    time::second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::TemperatureDifference,
};

use error::finite;

/// Fraction of steady-state output credited during a cold start.
const COLD_START_FACTOR: f64 = 0.5;

/// Operating condition for a capacity estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OperatingMode {
    /// Quasi-steady output with the tube bank at thermal equilibrium.
    #[default]
    Steady,
    /// Output while the tube bank is still warming up.
    ///
    /// A flat first-order derate of the steady output; the thermal time
    /// constant does not scale it.
    ColdStart,
}

/// Error returned when parsing an unknown [`OperatingMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operating mode `{0}` (expected `steady` or `cold-start`)")]
pub struct ParseModeError(String);

impl FromStr for OperatingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steady" => Ok(Self::Steady),
            "cold-start" => Ok(Self::ColdStart),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

/// One gasifier module: a finned-tube bank of fixed length in given air.
///
/// Fully determined by its inputs; every result is recomputed on request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gasifier<'c> {
    geometry: FinTubeGeometry,
    layout: ModuleConfig,
    tube_length: Constrained<Length, StrictlyPositive>,
    ambient: AmbientConditions,
    constants: &'c PhysicalConstants,
}

impl Gasifier<'static> {
    /// Creates a module that uses the [reference constants](PhysicalConstants::reference).
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::InvalidGeometry`] if the tube length is not
    /// strictly positive.
    pub fn new(
        geometry: FinTubeGeometry,
        layout: ModuleConfig,
        tube_length: Length,
        ambient: AmbientConditions,
    ) -> Result<Self, GasifierError> {
        Ok(Self {
            geometry,
            layout,
            tube_length: StrictlyPositive::new(tube_length)
                .map_err(GasifierError::geometry("tube_length"))?,
            ambient,
            constants: PhysicalConstants::reference(),
        })
    }
}

impl<'c> Gasifier<'c> {
    /// Returns the same module evaluated with a different constant set.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::InvalidConstant`] if `constants` fails
    /// [`PhysicalConstants::check`].
    pub fn with_constants<'k>(
        self,
        constants: &'k PhysicalConstants,
    ) -> Result<Gasifier<'k>, GasifierError> {
        constants.check()?;
        Ok(Gasifier {
            geometry: self.geometry,
            layout: self.layout,
            tube_length: self.tube_length,
            ambient: self.ambient,
            constants,
        })
    }

    /// Returns the same module in different air.
    #[must_use]
    pub fn with_ambient(self, ambient: AmbientConditions) -> Self {
        Self { ambient, ..self }
    }

    #[must_use]
    pub fn geometry(&self) -> &FinTubeGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn layout(&self) -> &ModuleConfig {
        &self.layout
    }

    #[must_use]
    pub fn ambient(&self) -> &AmbientConditions {
        &self.ambient
    }

    #[must_use]
    pub fn constants(&self) -> &'c PhysicalConstants {
        self.constants
    }

    #[must_use]
    pub fn tube_length(&self) -> Length {
        self.tube_length.into_inner()
    }

    /// Number of tubes in the module.
    #[must_use]
    pub fn n_tubes(&self) -> u32 {
        self.layout.n_tubes()
    }

    /// Characteristic diameter `D_h`, the tube diameter across the fins.
    #[must_use]
    pub fn finned_diameter(&self) -> Length {
        self.geometry.finned_diameter()
    }

    /// Overall heat-transfer coefficient `U`, equal to the outside `h`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`AmbientConditions::h_coefficient`].
    pub fn heat_transfer_coefficient(&self) -> Result<HeatTransfer, GasifierError> {
        self.ambient
            .h_coefficient(self.finned_diameter(), self.constants)
    }

    /// Effective heat-transfer area of one tube.
    #[must_use]
    pub fn area_per_tube(&self) -> Area {
        self.geometry.exposed_area(self.tube_length())
    }

    /// Effective heat-transfer area of the whole module.
    #[must_use]
    pub fn total_area(&self) -> Area {
        self.area_per_tube() * f64::from(self.n_tubes())
    }

    /// Heat drawn from the air by the whole module, `Q = U·A·(T_air − T_lng)`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`heat_transfer_coefficient`](Self::heat_transfer_coefficient).
    pub fn heat_duty(&self) -> Result<Power, GasifierError> {
        let u = self.heat_transfer_coefficient()?;
        let delta_t = self
            .ambient
            .air_temperature()
            .minus(self.constants.lng_temperature);
        let ua: ThermalConductance = u * self.total_area();
        Ok(ua * delta_t)
    }

    /// Liquid vaporized per unit time by the whole module.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::DivisionHazard`] if the vaporization
    /// enthalpy is not strictly positive, and propagates errors from
    /// [`heat_duty`](Self::heat_duty).
    pub fn mass_flow(&self) -> Result<MassRate, GasifierError> {
        let enthalpy = self.constants.vaporization_enthalpy();
        if enthalpy.get::<joule_per_kilogram>() <= 0.0 {
            return Err(GasifierError::DivisionHazard {
                context: "vaporization enthalpy must be positive",
            });
        }
        Ok(self.heat_duty()? / enthalpy)
    }

    /// Gas output of the module, in normal cubic meters per hour.
    ///
    /// [`OperatingMode::ColdStart`] returns exactly half of the steady
    /// output. The thermal time constant is still evaluated, so a module
    /// whose time constant is undefined is rejected in either mode.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`mass_flow`](Self::mass_flow) and, for a
    /// cold start, from [`thermal_time_constant`](Self::thermal_time_constant).
    pub fn capacity(&self, mode: OperatingMode) -> Result<VolumeRate, GasifierError> {
        let steady: VolumeRate = self.mass_flow()? / self.constants.ng_normal_density;
        match mode {
            OperatingMode::Steady => Ok(steady),
            OperatingMode::ColdStart => {
                let _ = self.thermal_time_constant()?;
                Ok(steady * COLD_START_FACTOR)
            }
        }
    }

    /// Time for the tube bank to approach thermal equilibrium.
    ///
    /// Lumped capacitance of the aluminium behind the exposed area divided
    /// by the convective conductance, `τ = m·c_p / (h·A)`.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::DivisionHazard`] if the conductance is not
    /// strictly positive or the result is not finite.
    pub fn thermal_time_constant(&self) -> Result<Time, GasifierError> {
        let area = self.total_area();
        let metal: Volume = area * self.constants.wall_thickness;
        let mass: Mass = self.constants.fin_density * metal;
        let capacitance = mass * self.constants.fin_specific_heat;

        let conductance: ThermalConductance = self.heat_transfer_coefficient()? * area;
        if conductance.get::<watt_per_kelvin>() <= 0.0 {
            return Err(GasifierError::DivisionHazard {
                context: "convective conductance must be positive",
            });
        }

        let tau: Time = capacitance / conductance;
        finite(tau.get::<second>(), "thermal time constant is not finite")?;
        Ok(tau)
    }

    /// Current results for this module.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`capacity`](Self::capacity) and
    /// [`thermal_time_constant`](Self::thermal_time_constant).
    pub fn summary(&self) -> Result<Summary, GasifierError> {
        let (x, y) = self.layout.footprint(self.finned_diameter());
        Ok(Summary {
            n_tubes: self.n_tubes(),
            total_area: self.total_area(),
            capacity: self.capacity(OperatingMode::Steady)?,
            footprint: Footprint {
                x,
                y,
                z: self.tube_length(),
            },
            time_constant: self.thermal_time_constant()?,
        })
    }
}
