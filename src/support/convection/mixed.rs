//! Combined natural and forced convection.

/// Blending exponent for assisting flows over vertical cylinders.
pub const MIXED_CONVECTION_EXPONENT: f64 = 3.0;

/// Power-mean blend `(Nu_nat^n + Nu_forced^n)^(1/n)`.
///
/// The result tends to the larger of the two contributions as they
/// separate, and equals either one when the other vanishes.
#[must_use]
pub fn power_mean(nu_natural: f64, nu_forced: f64, n: f64) -> f64 {
    (nu_natural.powf(n) + nu_forced.powf(n)).powf(1.0 / n)
}
