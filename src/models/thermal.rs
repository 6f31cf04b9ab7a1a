//! Thermal systems models.
//!
//! This module contains models for thermal equipment, currently ambient-air
//! LNG gasifiers.

pub mod gasifier;
