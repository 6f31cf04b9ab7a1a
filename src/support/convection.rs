//! Dimensionless convection correlations.
//!
//! These functions work on plain `f64` values in SI base units. Callers are
//! responsible for converting [`uom`] quantities at the boundary.
//!
//! - [`natural`]: Grashof and Rayleigh numbers, Churchill–Chu correlation
//!   for a vertical plate or cylinder.
//! - [`forced`]: Reynolds number, Zukauskas correlation for a cylinder in
//!   cross flow.
//! - [`mixed`]: power-mean blending of natural and forced Nusselt numbers.
//!
//! # Example
//!
//! ```
//! use gasifier_models::support::convection::{forced, mixed, natural};
//!
//! let prandtl = 0.71;
//! let gr = natural::grashof(9.81, 1.0 / 273.15, 175.0, 0.428, 1.8e-5);
//! let nu_natural = natural::churchill_chu(natural::rayleigh(gr, prandtl), prandtl);
//!
//! let re = forced::reynolds(1.0, 0.5, 0.428, 1.8e-5);
//! let nu_forced = forced::zukauskas(re, prandtl);
//!
//! let nu = mixed::power_mean(nu_natural, nu_forced, mixed::MIXED_CONVECTION_EXPONENT);
//! assert!(nu >= nu_natural && nu >= nu_forced);
//! ```

pub mod forced;
pub mod mixed;
pub mod natural;
