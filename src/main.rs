//! Gasifier CLI - LNG ambient-air vaporizer sizing.
//!
//! Estimate gas output, heat-transfer area, footprint, and warm-up time for
//! banks of vertical finned-tube modules.

use std::fmt::Display;

use clap::{Parser, ValueEnum};
use uom::si::{
    area::square_meter,
    f64::{Length, Ratio, ThermodynamicTemperature, Velocity, VolumeRate},
    length::millimeter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    time::hour,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_hour,
};

use gasifier_models::models::thermal::gasifier::{
    AmbientConditions, Connection, DesignAmbientConfig, DesignAmbientError, FinTubeGeometry,
    Gasifier, GasifierError, ModuleBank, ModuleConfig, OperatingMode, design_ambient,
};
use gasifier_models::support::constraint::{ConstraintError, NonNegative};

/// Ambient-air LNG gasifier sizing calculator.
#[derive(Debug, Parser)]
#[command(name = "gasifier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tube outer diameter in mm (20-60).
    #[arg(long, default_value = "28")]
    tube_od: f64,

    /// Radial fin height in mm (50-500).
    #[arg(long, default_value = "200")]
    fin_height: f64,

    /// Number of fins per tube (6-40).
    #[arg(long, default_value = "12")]
    fins: u32,

    /// Fin efficiency (0.3-1.0).
    #[arg(long, default_value = "0.85")]
    fin_efficiency: f64,

    /// Tubes along X (1-30).
    #[arg(long, default_value = "9")]
    tubes_x: u32,

    /// Tubes along Y (1-30).
    #[arg(long, default_value = "8")]
    tubes_y: u32,

    /// Tube pitch along X in mm (100-400).
    #[arg(long, default_value = "215")]
    spacing_x: f64,

    /// Tube pitch along Y in mm (100-400).
    #[arg(long, default_value = "300")]
    spacing_y: f64,

    /// Number of identical modules (1-4).
    #[arg(long, default_value = "1")]
    modules: usize,

    /// How modules share the liquid feed.
    #[arg(long, default_value = "parallel")]
    connection: ConnectionArg,

    /// Tube length in mm (1000-15000).
    #[arg(long, default_value = "4600")]
    tube_length: f64,

    /// Ambient air temperature in °C (-20-40).
    #[arg(long, default_value = "15", allow_hyphen_values = true)]
    ambient: f64,

    /// Wind speed in m/s (0-5).
    #[arg(long, default_value = "0.5")]
    wind: f64,

    /// Operating mode.
    #[arg(long, default_value = "steady")]
    mode: ModeArg,

    /// Also report the lowest ambient temperature that delivers this flow (Nm³/h).
    #[arg(long, allow_hyphen_values = true)]
    design_flow: Option<f64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConnectionArg {
    /// Outputs add up.
    Parallel,
    /// The weakest module limits the bank.
    Series,
}

impl From<ConnectionArg> for Connection {
    fn from(arg: ConnectionArg) -> Self {
        match arg {
            ConnectionArg::Parallel => Connection::Parallel,
            ConnectionArg::Series => Connection::Series,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Quasi-steady output.
    Steady,
    /// Output while the bank warms up.
    ColdStart,
}

impl From<ModeArg> for OperatingMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Steady => OperatingMode::Steady,
            ModeArg::ColdStart => OperatingMode::ColdStart,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(message) = validate(&cli) {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn check_range<T: PartialOrd + Display>(
    name: &str,
    value: T,
    min: T,
    max: T,
    unit: &str,
) -> Result<(), String> {
    // Written so that NaN fails.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(format!("{name} must be between {min} and {max}{unit} (got {value})"))
    }
}

fn validate(cli: &Cli) -> Result<(), String> {
    check_range("Tube OD", cli.tube_od, 20.0, 60.0, " mm")?;
    check_range("Fin height", cli.fin_height, 50.0, 500.0, " mm")?;
    check_range("Number of fins", cli.fins, 6, 40, "")?;
    check_range("Fin efficiency", cli.fin_efficiency, 0.3, 1.0, "")?;
    check_range("Tubes X", cli.tubes_x, 1, 30, "")?;
    check_range("Tubes Y", cli.tubes_y, 1, 30, "")?;
    check_range("Spacing X", cli.spacing_x, 100.0, 400.0, " mm")?;
    check_range("Spacing Y", cli.spacing_y, 100.0, 400.0, " mm")?;
    check_range("Modules", cli.modules, 1, 4, "")?;
    check_range("Tube length", cli.tube_length, 1000.0, 15000.0, " mm")?;
    check_range("Ambient temperature", cli.ambient, -20.0, 40.0, " °C")?;
    check_range("Wind speed", cli.wind, 0.0, 5.0, " m/s")?;
    if let Some(flow) = cli.design_flow {
        if !(flow >= 0.0 && flow.is_finite()) {
            return Err(format!("Design flow must be a non-negative number (got {flow})"));
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Gasifier(#[from] GasifierError),

    #[error(transparent)]
    DesignAmbient(#[from] DesignAmbientError),

    #[error("design flow: {0}")]
    DesignFlow(ConstraintError),
}

fn build_module(cli: &Cli) -> Result<Gasifier<'static>, GasifierError> {
    let mm = Length::new::<millimeter>;
    let geometry = FinTubeGeometry::new(
        mm(cli.tube_od),
        mm(cli.fin_height),
        cli.fins,
        Ratio::new::<ratio>(cli.fin_efficiency),
    )?;
    let layout = ModuleConfig::new(cli.tubes_x, cli.tubes_y, mm(cli.spacing_x), mm(cli.spacing_y))?;
    let ambient = AmbientConditions::new(
        ThermodynamicTemperature::new::<degree_celsius>(cli.ambient),
        Velocity::new::<meter_per_second>(cli.wind),
    )?;
    Gasifier::new(geometry, layout, mm(cli.tube_length), ambient)
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let module = build_module(cli)?;
    let connection = Connection::from(cli.connection);
    let mode = OperatingMode::from(cli.mode);
    let bank = ModuleBank::uniform(module, cli.modules, connection)?;

    let capacity = bank.capacity(mode)?;
    let area = bank.total_area()?;
    let tau = bank.time_constant()?;
    let summary = module.summary()?;

    println!("LNG Gasifier Sizing");
    println!("===================");
    println!("Modules:          {} ({connection:?})", cli.modules);
    println!("Mode:             {mode:?}");
    println!("Total tubes:      {}", bank.n_tubes());
    println!(
        "Capacity:         {:.0} Nm³/h",
        capacity.get::<cubic_meter_per_hour>()
    );
    println!("Total area:       {:.1} m²", area.get::<square_meter>());
    println!("Time constant:    {:.2} h", tau.get::<hour>());

    println!("\nFootprint per module:");
    println!("  X: {:.0} mm", summary.footprint.x.get::<millimeter>());
    println!("  Y: {:.0} mm", summary.footprint.y.get::<millimeter>());
    println!("  Z: {:.0} mm", summary.footprint.z.get::<millimeter>());

    if let Some(flow) = cli.design_flow {
        // Parallel modules share the load evenly; in series each must carry all of it.
        let per_module = match connection {
            Connection::Parallel => flow / cli.modules as f64,
            Connection::Series => flow,
        };
        let target = NonNegative::new(VolumeRate::new::<cubic_meter_per_hour>(per_module))
            .map_err(RunError::DesignFlow)?;
        let found = design_ambient(&module, target, DesignAmbientConfig::default())?;
        println!(
            "\nDesign ambient for {flow:.0} Nm³/h: {:.1} °C",
            found.get::<degree_celsius>()
        );
    }

    Ok(())
}
