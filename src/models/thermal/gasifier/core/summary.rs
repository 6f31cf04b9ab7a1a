use std::fmt;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Time, VolumeRate},
    length::millimeter,
    time::hour,
    volume_rate::cubic_meter_per_hour,
};

/// Outer envelope of one module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Width across the X tube rows, finned diameter included.
    pub x: Length,
    /// Depth across the Y tube rows, finned diameter included.
    pub y: Length,
    /// Height, equal to the tube length.
    pub z: Length,
}

/// Read-only results for one gasifier module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub n_tubes: u32,
    /// Effective heat-transfer area of all tubes.
    pub total_area: Area,
    /// Steady-state gas output, in normal cubic meters per hour.
    pub capacity: VolumeRate,
    pub footprint: Footprint,
    pub time_constant: Time,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n_tubes: {}", self.n_tubes)?;
        writeln!(f, "area_total_m2: {:.1}", self.total_area.get::<square_meter>())?;
        writeln!(
            f,
            "capacity_Nm3_h: {:.0}",
            self.capacity.get::<cubic_meter_per_hour>()
        )?;
        writeln!(
            f,
            "footprint_mm: x={:.0} y={:.0} z={:.0}",
            self.footprint.x.get::<millimeter>(),
            self.footprint.y.get::<millimeter>(),
            self.footprint.z.get::<millimeter>()
        )?;
        write!(f, "tau_h: {:.2}", self.time_constant.get::<hour>())
    }
}
