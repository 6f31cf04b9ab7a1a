use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature, VolumeRate},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

/// Solver configuration for the design ambient search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignAmbientConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the ambient temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the flow residual (achieved - target).
    pub flow_tol: VolumeRate,

    /// Warmest ambient temperature searched.
    pub upper_temperature: ThermodynamicTemperature,
}

impl Default for DesignAmbientConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            flow_tol: VolumeRate::new::<cubic_meter_per_hour>(1e-9),
            upper_temperature: ThermodynamicTemperature::new::<degree_celsius>(60.0),
        }
    }
}

impl DesignAmbientConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.flow_tol.get::<cubic_meter_per_hour>(),
        }
    }
}
