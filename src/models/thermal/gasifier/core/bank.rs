use uom::{
    ConstZero,
    si::f64::{Area, Time, VolumeRate},
};

use crate::support::constraint::ConstraintError;

use super::{Gasifier, GasifierError, OperatingMode};

/// How the modules of a bank share the liquid feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Connection {
    /// Each module vaporizes its own share of the feed; outputs add up.
    #[default]
    Parallel,
    /// The feed passes through every module in turn.
    ///
    /// The bank is limited by its weakest module. No coupling between
    /// stages is modeled.
    Series,
}

/// Several gasifier modules combined by a [`Connection`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleBank<'c> {
    modules: Vec<Gasifier<'c>>,
    connection: Connection,
}

impl<'c> ModuleBank<'c> {
    /// Creates a bank from the given modules.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::InvalidLayout`] if `modules` is empty.
    pub fn new(modules: Vec<Gasifier<'c>>, connection: Connection) -> Result<Self, GasifierError> {
        if modules.is_empty() {
            return Err(GasifierError::InvalidLayout {
                field: "modules",
                source: ConstraintError::Zero,
            });
        }
        Ok(Self {
            modules,
            connection,
        })
    }

    /// Creates a bank of `count` identical modules.
    ///
    /// # Errors
    ///
    /// Returns [`GasifierError::InvalidLayout`] if `count` is zero.
    pub fn uniform(
        gasifier: Gasifier<'c>,
        count: usize,
        connection: Connection,
    ) -> Result<Self, GasifierError> {
        Self::new(vec![gasifier; count], connection)
    }

    #[must_use]
    pub fn modules(&self) -> &[Gasifier<'c>] {
        &self.modules
    }

    #[must_use]
    pub fn connection(&self) -> Connection {
        self.connection
    }

    /// Total number of tubes across all modules, whatever the connection.
    ///
    /// Counted in `u64` so that banks of large modules cannot overflow.
    #[must_use]
    pub fn n_tubes(&self) -> u64 {
        self.modules
            .iter()
            .map(|module| u64::from(module.n_tubes()))
            .sum()
    }

    /// Module with the lowest steady-state capacity.
    ///
    /// # Errors
    ///
    /// Propagates the first module error encountered.
    pub fn limiting(&self) -> Result<&Gasifier<'c>, GasifierError> {
        let mut limiting: Option<(&Gasifier<'c>, VolumeRate)> = None;
        for module in &self.modules {
            let capacity = module.capacity(OperatingMode::Steady)?;
            if limiting.is_none_or(|(_, lowest)| capacity < lowest) {
                limiting = Some((module, capacity));
            }
        }
        limiting
            .map(|(module, _)| module)
            .ok_or(GasifierError::InvalidLayout {
                field: "modules",
                source: ConstraintError::Zero,
            })
    }

    /// Combined gas output of the bank.
    ///
    /// Parallel banks add module outputs; a series bank delivers the output
    /// of its [limiting](Self::limiting) module.
    ///
    /// # Errors
    ///
    /// Propagates module errors.
    pub fn capacity(&self, mode: OperatingMode) -> Result<VolumeRate, GasifierError> {
        match self.connection {
            Connection::Parallel => self
                .modules
                .iter()
                .try_fold(VolumeRate::ZERO, |total, module| {
                    Ok(total + module.capacity(mode)?)
                }),
            Connection::Series => self.limiting()?.capacity(mode),
        }
    }

    /// Heat-transfer area credited to the bank's output.
    ///
    /// The sum over all modules in parallel, the limiting module's area in
    /// series.
    ///
    /// # Errors
    ///
    /// Propagates module errors when locating the limiting module.
    pub fn total_area(&self) -> Result<Area, GasifierError> {
        match self.connection {
            Connection::Parallel => Ok(self
                .modules
                .iter()
                .map(Gasifier::total_area)
                .fold(Area::ZERO, |total, area| total + area)),
            Connection::Series => Ok(self.limiting()?.total_area()),
        }
    }

    /// Thermal time constant of the bank.
    ///
    /// The slowest module sets it in parallel; the limiting module in series.
    ///
    /// # Errors
    ///
    /// Propagates module errors.
    pub fn time_constant(&self) -> Result<Time, GasifierError> {
        match self.connection {
            Connection::Parallel => {
                self.modules
                    .iter()
                    .try_fold(Time::ZERO, |slowest, module| {
                        let tau = module.thermal_time_constant()?;
                        Ok(if tau > slowest { tau } else { slowest })
                    })
            }
            Connection::Series => self.limiting()?.thermal_time_constant(),
        }
    }
}
