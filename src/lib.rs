//! # Gasifier Models
//!
//! Sizing models for atmospheric LNG→NG gasifiers built from vertical
//! finned-tube modules, exposed as [`twine_core::Model`] implementations.
//!
//! Given tube geometry, module layout, ambient conditions, and how modules
//! are connected, the models estimate steady-state vaporization capacity,
//! heat-transfer area, footprint, and thermal time constant.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific models, starting with
//!   [`models::thermal::gasifier`].
//! - [`support`]: Supporting utilities used by models (numeric constraints,
//!   `uom` extensions, convection correlations).
//!
//! ## Example
//!
//! ```
//! use gasifier_models::models::thermal::gasifier::{
//!     AmbientConditions, FinTubeGeometry, Gasifier, GasifierError, ModuleConfig, OperatingMode,
//! };
//! use uom::si::{
//!     f64::{Length, Ratio, ThermodynamicTemperature, Velocity},
//!     length::millimeter,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::meter_per_second,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! fn main() -> Result<(), GasifierError> {
//!     let geometry = FinTubeGeometry::new(
//!         Length::new::<millimeter>(28.0),
//!         Length::new::<millimeter>(200.0),
//!         12,
//!         Ratio::new::<ratio>(0.85),
//!     )?;
//!     let layout = ModuleConfig::new(
//!         9,
//!         8,
//!         Length::new::<millimeter>(215.0),
//!         Length::new::<millimeter>(300.0),
//!     )?;
//!     let ambient = AmbientConditions::new(
//!         ThermodynamicTemperature::new::<degree_celsius>(15.0),
//!         Velocity::new::<meter_per_second>(0.5),
//!     )?;
//!
//!     let gasifier = Gasifier::new(geometry, layout, Length::new::<millimeter>(4600.0), ambient)?;
//!     let flow = gasifier.capacity(OperatingMode::Steady)?;
//!     assert!(flow.get::<cubic_meter_per_hour>() > 2000.0);
//!
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod support;
