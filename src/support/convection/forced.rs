//! Wind-driven convection over a cylinder in cross flow.

/// Reynolds number at which the Zukauskas constants switch.
pub const REYNOLDS_THRESHOLD: f64 = 1e5;

/// Exponent applied to the Prandtl number in [`zukauskas`].
const PRANDTL_EXPONENT: f64 = 0.37;

/// Reynolds number `ρ·v·L / μ`.
#[must_use]
pub fn reynolds(density: f64, velocity: f64, length: f64, viscosity: f64) -> f64 {
    density * velocity * length / viscosity
}

/// Zukauskas correlation constants `Nu = C·Re^m·Pr^0.37`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZukauskasConstants {
    pub c: f64,
    pub m: f64,
}

impl ZukauskasConstants {
    /// Selects the constants for a Reynolds number.
    ///
    /// Below [`REYNOLDS_THRESHOLD`]: `C = 0.3, m = 0.62`.
    /// At or above it: `C = 0.027, m = 0.805`.
    #[must_use]
    pub fn for_reynolds(reynolds: f64) -> Self {
        if reynolds < REYNOLDS_THRESHOLD {
            Self { c: 0.3, m: 0.62 }
        } else {
            Self { c: 0.027, m: 0.805 }
        }
    }
}

/// Zukauskas average Nusselt number for a cylinder in cross flow.
///
/// Returns zero in still air.
#[must_use]
pub fn zukauskas(reynolds: f64, prandtl: f64) -> f64 {
    let ZukauskasConstants { c, m } = ZukauskasConstants::for_reynolds(reynolds);
    c * reynolds.powf(m) * prandtl.powf(PRANDTL_EXPONENT)
}
