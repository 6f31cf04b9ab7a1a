//! Ambient-air LNG gasifier models.
//!
//! This module provides [`twine_core::Model`] implementations for finned-tube
//! gasifier modules and banks of modules.
//! The computational core is in the internal `core` module.

pub(crate) mod core;

pub use self::core::{
    AmbientConditions, Connection, DesignAmbientConfig, DesignAmbientError, FinTubeGeometry,
    Footprint, Gasifier, GasifierError, ModuleBank, ModuleConfig, OperatingMode,
    ParseModeError, PhysicalConstants, Summary, design_ambient,
};

use twine_core::Model;
use uom::si::f64::VolumeRate;

/// Maps an operating mode to the module's gas output.
impl Model for Gasifier<'_> {
    type Input = OperatingMode;
    type Output = VolumeRate;
    type Error = GasifierError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.capacity(*input)
    }
}

/// Maps an operating mode to the combined output of the bank.
impl Model for ModuleBank<'_> {
    type Input = OperatingMode;
    type Output = VolumeRate;
    type Error = GasifierError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.capacity(*input)
    }
}
