use uom::si::{
    acceleration::meter_per_second_squared,
    dynamic_viscosity::pascal_second,
    f64::{HeatTransfer, Length, ThermodynamicTemperature, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative},
    convection::{forced, mixed, natural},
    units::TemperatureDifference,
};

use super::{GasifierError, PhysicalConstants, error::finite};

/// Outside-air state around the tube bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientConditions {
    air_temperature: ThermodynamicTemperature,
    wind_speed: Constrained<Velocity, NonNegative>,
}

impl AmbientConditions {
    /// Creates ambient conditions.
    ///
    /// A wind speed of zero means natural convection only.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::InvalidAmbient`] if the wind speed is
    /// negative or not a number.
    pub fn new(
        air_temperature: ThermodynamicTemperature,
        wind_speed: Velocity,
    ) -> Result<Self, GasifierError> {
        Ok(Self {
            air_temperature,
            wind_speed: NonNegative::new(wind_speed)
                .map_err(GasifierError::ambient("wind_speed"))?,
        })
    }

    #[must_use]
    pub fn air_temperature(&self) -> ThermodynamicTemperature {
        self.air_temperature
    }

    #[must_use]
    pub fn wind_speed(&self) -> Velocity {
        self.wind_speed.into_inner()
    }

    /// Returns a copy at a different air temperature, same wind.
    #[must_use]
    pub fn at_temperature(self, air_temperature: ThermodynamicTemperature) -> Self {
        Self {
            air_temperature,
            ..self
        }
    }

    /// Convective heat-transfer coefficient on a vertical finned cylinder of
    /// characteristic diameter `d_h`.
    ///
    /// Natural convection uses Churchill–Chu with the driving temperature
    /// difference between the air and the liquid reference temperature.
    /// Forced convection uses Zukauskas for cross flow. The two Nusselt
    /// numbers are blended with a power mean (n = 3) and `h = Nu·k / d_h`.
    ///
    /// # Errors
    ///
    /// - [`GasifierError::DivisionHazard`] if `d_h` is not strictly positive
    ///   or the result is not finite.
    /// - [`GasifierError::InvalidAmbient`] if the air is colder than the
    ///   liquid reference temperature.
    pub fn h_coefficient(
        &self,
        d_h: Length,
        constants: &PhysicalConstants,
    ) -> Result<HeatTransfer, GasifierError> {
        let d = d_h.get::<meter>();
        if d.is_nan() || d <= 0.0 {
            return Err(GasifierError::DivisionHazard {
                context: "characteristic diameter must be positive",
            });
        }

        let delta_t = self
            .air_temperature
            .minus(constants.lng_temperature)
            .get::<delta_kelvin>();
        if delta_t < 0.0 {
            return Err(GasifierError::InvalidAmbient {
                field: "air_temperature",
                source: ConstraintError::BelowMinimum,
            });
        }

        let mu = constants.air_viscosity.get::<pascal_second>();
        let prandtl = constants.air_prandtl;

        // ν is taken numerically equal to μ (unit air density).
        let grashof = natural::grashof(
            constants.gravity.get::<meter_per_second_squared>(),
            constants.air_expansion,
            delta_t,
            d,
            mu,
        );
        let nu_natural = natural::churchill_chu(natural::rayleigh(grashof, prandtl), prandtl);

        let reynolds = forced::reynolds(
            constants.ng_density.get::<kilogram_per_cubic_meter>(),
            self.wind_speed().get::<meter_per_second>(),
            d,
            mu,
        );
        let nu_forced = forced::zukauskas(reynolds, prandtl);

        let nu = mixed::power_mean(nu_natural, nu_forced, mixed::MIXED_CONVECTION_EXPONENT);
        let h = nu * constants.air_conductivity.get::<watt_per_meter_kelvin>() / d;

        Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(finite(
            h,
            "convective coefficient is not finite",
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, thermodynamic_temperature::degree_celsius};

    fn ambient(celsius: f64, wind: f64) -> AmbientConditions {
        AmbientConditions::new(
            ThermodynamicTemperature::new::<degree_celsius>(celsius),
            Velocity::new::<meter_per_second>(wind),
        )
        .unwrap()
    }

    fn h(ambient: &AmbientConditions, d_h: Length) -> f64 {
        ambient
            .h_coefficient(d_h, PhysicalConstants::reference())
            .unwrap()
            .get::<watt_per_square_meter_kelvin>()
    }

    fn d_h() -> Length {
        Length::new::<millimeter>(428.0)
    }

    #[test]
    fn reference_values() {
        assert_relative_eq!(
            h(&ambient(15.0, 0.5), d_h()),
            8.451_153_737_485_136,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            h(&ambient(15.0, 0.0), d_h()),
            7.642_265_433_792_836,
            max_relative = 1e-9
        );
    }

    #[test]
    fn still_air_is_lower_than_breeze() {
        for celsius in [-20.0, 0.0, 15.0, 40.0] {
            let calm = h(&ambient(celsius, 0.0), d_h());
            let breeze = h(&ambient(celsius, 0.5), d_h());
            assert!(calm <= breeze, "calm air wins at {celsius} °C");
        }
    }

    #[test]
    fn increases_with_wind_below_threshold() {
        let mut previous = h(&ambient(15.0, 0.0), d_h());
        for tenths in 1..=40 {
            let next = h(&ambient(15.0, f64::from(tenths) / 10.0), d_h());
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn bounded_step_across_reynolds_threshold() {
        let constants = PhysicalConstants::reference();
        let d = d_h().get::<meter>();
        let mu = constants.air_viscosity.get::<pascal_second>();
        let rho = constants.ng_density.get::<kilogram_per_cubic_meter>();
        let threshold_wind = forced::REYNOLDS_THRESHOLD * mu / (rho * d);

        let below = ambient(15.0, threshold_wind * (1.0 - 1e-9));
        let above = ambient(15.0, threshold_wind * (1.0 + 1e-9));
        let h_below = h(&below, d_h());
        let h_above = h(&above, d_h());

        assert!(h_below.is_finite() && h_below > 0.0);
        assert!(h_above.is_finite() && h_above > 0.0);

        // Blending with natural convection softens the change in the forced
        // correlation's constants.
        let re_below = forced::REYNOLDS_THRESHOLD * (1.0 - 1e-9);
        let re_above = forced::REYNOLDS_THRESHOLD * (1.0 + 1e-9);
        let forced_step = forced::zukauskas(re_below, constants.air_prandtl)
            / forced::zukauskas(re_above, constants.air_prandtl);
        let blended_step = h_below / h_above;
        assert!(blended_step > 1.0);
        assert!(blended_step < forced_step);
    }

    #[test]
    fn larger_diameter_lowers_h() {
        let air = ambient(15.0, 0.5);
        assert!(h(&air, Length::new::<millimeter>(600.0)) < h(&air, d_h()));
    }

    #[test]
    fn air_at_reference_temperature_is_still_defined() {
        let air = ambient(-160.0, 0.0);
        assert!(h(&air, d_h()) > 0.0);
    }

    #[test]
    fn rejects_air_colder_than_liquid() {
        let air = ambient(-170.0, 0.5);
        assert!(matches!(
            air.h_coefficient(d_h(), PhysicalConstants::reference()),
            Err(GasifierError::InvalidAmbient {
                field: "air_temperature",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_positive_diameter() {
        let air = ambient(15.0, 0.5);
        for mm in [0.0, -10.0] {
            assert!(matches!(
                air.h_coefficient(Length::new::<millimeter>(mm), PhysicalConstants::reference()),
                Err(GasifierError::DivisionHazard { .. })
            ));
        }
    }

    #[test]
    fn rejects_negative_wind() {
        let result = AmbientConditions::new(
            ThermodynamicTemperature::new::<degree_celsius>(15.0),
            Velocity::new::<meter_per_second>(-1.0),
        );
        assert_eq!(
            result,
            Err(GasifierError::InvalidAmbient {
                field: "wind_speed",
                source: ConstraintError::Negative,
            })
        );
    }
}
