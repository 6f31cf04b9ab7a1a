//! Problem formulation for the design ambient search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{ThermodynamicTemperature, VolumeRate},
    thermodynamic_temperature::kelvin,
    volume_rate::cubic_meter_per_hour,
};

use super::super::{Gasifier, GasifierError, OperatingMode};

/// Model adapter exposing the ambient air temperature as the sole input.
///
/// Wind speed and everything else about the module stay fixed.
pub(super) struct DesignAmbientModel<'a, 'c> {
    gasifier: &'a Gasifier<'c>,
}

impl<'a, 'c> DesignAmbientModel<'a, 'c> {
    pub(super) fn new(gasifier: &'a Gasifier<'c>) -> Self {
        Self { gasifier }
    }
}

impl Model for DesignAmbientModel<'_, '_> {
    type Input = ThermodynamicTemperature;
    type Output = VolumeRate;
    type Error = GasifierError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let ambient = self.gasifier.ambient().at_temperature(*input);
        self.gasifier
            .with_ambient(ambient)
            .capacity(OperatingMode::Steady)
    }
}

/// Equation problem definition for flow matching.
///
/// Computes the residual as `achieved_flow - target_flow`.
pub(super) struct DesignAmbientProblem {
    target: VolumeRate,
}

impl DesignAmbientProblem {
    pub(super) fn new(target: VolumeRate) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for DesignAmbientProblem {
    type Input = ThermodynamicTemperature;
    type Output = VolumeRate;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let flow = output.get::<cubic_meter_per_hour>();
        let target = self.target.get::<cubic_meter_per_hour>();
        Ok([flow - target])
    }
}
