use std::sync::LazyLock;

use uom::si::{
    acceleration::meter_per_second_squared,
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    f64::{
        Acceleration, AvailableEnergy, DynamicViscosity, Length, MassDensity,
        SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature,
    },
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{constraint::StrictlyPositive, units::TemperatureDifference};

use super::GasifierError;

static REFERENCE: LazyLock<PhysicalConstants> = LazyLock::new(PhysicalConstants::default);

/// Fixed fluid and material properties used by the gasifier model.
///
/// Properties are evaluated once at reference conditions and never
/// recomputed: LNG at −160 °C, natural gas at 0 °C and 1 bar, air between
/// 0 and 30 °C, and aluminium for the finned tubes.
///
/// Every dimensional value must be strictly positive; see [`check`](Self::check).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Liquid density at the cryogenic reference temperature.
    pub lng_density: MassDensity,
    /// Liquid specific heat, taken as constant.
    pub lng_specific_heat: SpecificHeatCapacity,
    /// Boiling (reference) temperature of the liquid.
    pub lng_temperature: ThermodynamicTemperature,
    /// Temperature at which liquid is supplied to the tubes.
    ///
    /// Equal to [`lng_temperature`](Self::lng_temperature) by default, which
    /// makes the sensible-heat term of the vaporization enthalpy zero.
    pub lng_supply_temperature: ThermodynamicTemperature,
    /// Gas density at 0 °C and 1 bar, used in the Reynolds number.
    pub ng_density: MassDensity,
    /// Gas specific heat.
    pub ng_specific_heat: SpecificHeatCapacity,
    /// Gas density at normal conditions, in kg per normal cubic meter.
    pub ng_normal_density: MassDensity,
    /// Average latent heat of vaporization.
    pub latent_heat: AvailableEnergy,
    pub air_viscosity: DynamicViscosity,
    pub air_conductivity: ThermalConductivity,
    pub air_prandtl: f64,
    /// Volumetric thermal expansion coefficient of air, in 1/K.
    pub air_expansion: f64,
    pub gravity: Acceleration,
    /// Density of the tube and fin material.
    pub fin_density: MassDensity,
    /// Specific heat of the tube and fin material.
    pub fin_specific_heat: SpecificHeatCapacity,
    /// Assumed metal thickness behind every square meter of exposed area.
    pub wall_thickness: Length,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            lng_density: MassDensity::new::<kilogram_per_cubic_meter>(430.0),
            lng_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2.5e3),
            lng_temperature: ThermodynamicTemperature::new::<degree_celsius>(-160.0),
            lng_supply_temperature: ThermodynamicTemperature::new::<degree_celsius>(-160.0),
            ng_density: MassDensity::new::<kilogram_per_cubic_meter>(1.0),
            ng_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2.1e3),
            ng_normal_density: MassDensity::new::<kilogram_per_cubic_meter>(0.693),
            latent_heat: AvailableEnergy::new::<joule_per_kilogram>(510e3),
            air_viscosity: DynamicViscosity::new::<pascal_second>(1.8e-5),
            air_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.026),
            air_prandtl: 0.71,
            air_expansion: 1.0 / 273.15,
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            fin_density: MassDensity::new::<kilogram_per_cubic_meter>(2700.0),
            fin_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
            wall_thickness: Length::new::<millimeter>(2.0),
        }
    }
}

impl PhysicalConstants {
    /// Returns the process-wide reference constants.
    ///
    /// The set is built on first use and shared read-only afterwards.
    #[must_use]
    pub fn reference() -> &'static Self {
        &REFERENCE
    }

    /// Checks that every dimensional value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::InvalidConstant`] naming the first offending field.
    pub fn check(&self) -> Result<(), GasifierError> {
        let c = GasifierError::constant;
        StrictlyPositive::new(self.lng_density).map_err(c("lng_density"))?;
        StrictlyPositive::new(self.lng_specific_heat).map_err(c("lng_specific_heat"))?;
        StrictlyPositive::new(self.lng_temperature.get::<kelvin>()).map_err(c("lng_temperature"))?;
        StrictlyPositive::new(self.lng_supply_temperature.get::<kelvin>())
            .map_err(c("lng_supply_temperature"))?;
        StrictlyPositive::new(self.ng_density).map_err(c("ng_density"))?;
        StrictlyPositive::new(self.ng_specific_heat).map_err(c("ng_specific_heat"))?;
        StrictlyPositive::new(self.ng_normal_density).map_err(c("ng_normal_density"))?;
        StrictlyPositive::new(self.latent_heat).map_err(c("latent_heat"))?;
        StrictlyPositive::new(self.air_viscosity).map_err(c("air_viscosity"))?;
        StrictlyPositive::new(self.air_conductivity).map_err(c("air_conductivity"))?;
        StrictlyPositive::new(self.air_prandtl).map_err(c("air_prandtl"))?;
        StrictlyPositive::new(self.air_expansion).map_err(c("air_expansion"))?;
        StrictlyPositive::new(self.gravity).map_err(c("gravity"))?;
        StrictlyPositive::new(self.fin_density).map_err(c("fin_density"))?;
        StrictlyPositive::new(self.fin_specific_heat).map_err(c("fin_specific_heat"))?;
        StrictlyPositive::new(self.wall_thickness).map_err(c("wall_thickness"))?;
        StrictlyPositive::new(self.vaporization_enthalpy()).map_err(c("lng_supply_temperature"))?;
        Ok(())
    }

    /// Heat absorbed per kilogram of liquid turned to gas.
    ///
    /// Latent heat plus the sensible heat needed to bring supplied liquid up
    /// to its boiling temperature.
    #[must_use]
    pub fn vaporization_enthalpy(&self) -> AvailableEnergy {
        let subcooling = self.lng_temperature.minus(self.lng_supply_temperature);
        self.latent_heat + self.lng_specific_heat * subcooling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn reference_set_is_valid() {
        assert_eq!(PhysicalConstants::reference().check(), Ok(()));
        assert_eq!(*PhysicalConstants::reference(), PhysicalConstants::default());
    }

    #[test]
    fn reference_is_shared() {
        assert!(std::ptr::eq(
            PhysicalConstants::reference(),
            PhysicalConstants::reference()
        ));
    }

    #[test]
    fn no_sensible_heat_at_reference_supply() {
        let constants = PhysicalConstants::default();
        assert_relative_eq!(
            constants.vaporization_enthalpy().get::<joule_per_kilogram>(),
            510e3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn subcooled_supply_adds_sensible_heat() {
        let constants = PhysicalConstants {
            lng_supply_temperature: ThermodynamicTemperature::new::<degree_celsius>(-162.0),
            ..PhysicalConstants::default()
        };
        assert_relative_eq!(
            constants.vaporization_enthalpy().get::<joule_per_kilogram>(),
            510e3 + 2.5e3 * 2.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn rejects_non_positive_values() {
        let constants = PhysicalConstants {
            latent_heat: AvailableEnergy::new::<joule_per_kilogram>(0.0),
            ..PhysicalConstants::default()
        };
        assert_eq!(
            constants.check(),
            Err(GasifierError::InvalidConstant {
                field: "latent_heat",
                source: ConstraintError::Zero,
            })
        );

        let constants = PhysicalConstants {
            air_prandtl: -0.71,
            ..PhysicalConstants::default()
        };
        assert!(matches!(
            constants.check(),
            Err(GasifierError::InvalidConstant {
                field: "air_prandtl",
                ..
            })
        ));
    }
}
