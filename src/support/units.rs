//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities in its public API.
//! This module provides extensions that are useful for modeling but aren't
//! included in [`uom`].
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another and yields a temperature interval, which is what the driving
//! force between ambient air and a cryogenic liquid needs:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use gasifier_models::support::units::TemperatureDifference;
//!
//! let air = ThermodynamicTemperature::new::<degree_celsius>(15.0);
//! let lng = ThermodynamicTemperature::new::<degree_celsius>(-160.0);
//! let delta_t = air.minus(lng);
//! assert!((delta_t.get::<delta_kelvin>() - 175.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
