use uom::si::{
    f64::{Length, Ratio, ThermodynamicTemperature, Velocity},
    length::millimeter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use super::{AmbientConditions, FinTubeGeometry, Gasifier, ModuleConfig};

pub(super) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

pub(super) fn ambient(celsius: f64, wind: f64) -> AmbientConditions {
    AmbientConditions::new(
        ThermodynamicTemperature::new::<degree_celsius>(celsius),
        Velocity::new::<meter_per_second>(wind),
    )
    .unwrap()
}

/// 28 mm tubes with twelve 200 mm fins on a 9 × 8 grid, 4.6 m long, in
/// 15 °C air with a 0.5 m/s breeze.
pub(super) fn scenario_a() -> Gasifier<'static> {
    Gasifier::new(
        FinTubeGeometry::new(mm(28.0), mm(200.0), 12, Ratio::new::<ratio>(0.85)).unwrap(),
        ModuleConfig::new(9, 8, mm(215.0), mm(300.0)).unwrap(),
        mm(4600.0),
        ambient(15.0, 0.5),
    )
    .unwrap()
}

/// A large 8 × 18 module of 10.6 m tubes with sixteen 300 mm fins in 20 °C
/// air and a 1 m/s wind.
pub(super) fn large_module() -> Gasifier<'static> {
    Gasifier::new(
        FinTubeGeometry::new(mm(28.0), mm(300.0), 16, Ratio::new::<ratio>(0.85)).unwrap(),
        ModuleConfig::new(8, 18, mm(215.0), mm(215.0)).unwrap(),
        mm(10_600.0),
        ambient(20.0, 1.0),
    )
    .unwrap()
}
