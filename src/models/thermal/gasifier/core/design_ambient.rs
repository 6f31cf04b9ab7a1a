//! Iterative search for the coldest ambient that meets a target flow.
//!
//! Steady output rises monotonically with air temperature, so the design
//! ambient is bracketed by the liquid reference temperature, where no heat
//! flows, and a configurable warm bound.

mod config;
mod error;
mod problem;

pub use config::DesignAmbientConfig;
pub use error::DesignAmbientError;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{ThermodynamicTemperature, VolumeRate},
        thermodynamic_temperature::kelvin,
        volume_rate::cubic_meter_per_hour,
    },
};

use crate::support::constraint::{Constrained, NonNegative};

use super::{Gasifier, OperatingMode};

use problem::{DesignAmbientModel, DesignAmbientProblem};

/// Finds the lowest ambient temperature at which `gasifier` delivers
/// `target_flow` at steady state.
///
/// Wind speed and geometry are held fixed. A zero target is met at the
/// liquid reference temperature.
///
/// # Errors
///
/// - [`DesignAmbientError::Unreachable`] if the module falls short of the
///   target even at [`DesignAmbientConfig::upper_temperature`].
/// - [`DesignAmbientError::MaxIters`] if the solver fails to converge.
/// - Wrapped gasifier and bisection errors otherwise.
pub fn design_ambient(
    gasifier: &Gasifier<'_>,
    target_flow: Constrained<VolumeRate, NonNegative>,
    config: DesignAmbientConfig,
) -> Result<ThermodynamicTemperature, DesignAmbientError> {
    let target = target_flow.into_inner();
    let lower = gasifier.constants().lng_temperature;

    if target == VolumeRate::ZERO {
        return Ok(lower);
    }

    let upper = config.upper_temperature;
    let available = gasifier
        .with_ambient(gasifier.ambient().at_temperature(upper))
        .capacity(OperatingMode::Steady)?;
    if available < target {
        return Err(DesignAmbientError::Unreachable { target, available });
    }

    let model = DesignAmbientModel::new(gasifier);
    let problem = DesignAmbientProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [lower.get::<kelvin>(), upper.get::<kelvin>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Air colder than the liquid cannot vaporize anything, so treat a
            // rejected temperature as falling short of the target.
            if event.result().is_err() {
                return Some(bisection::Action::assume_negative());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(DesignAmbientError::MaxIters {
            residual: VolumeRate::new::<cubic_meter_per_hour>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.input)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use super::super::test_support::{ambient, scenario_a};

    fn target(flow: f64) -> Constrained<VolumeRate, NonNegative> {
        NonNegative::new(VolumeRate::new::<cubic_meter_per_hour>(flow)).unwrap()
    }

    #[test]
    fn recovers_ambient_that_produced_the_flow() {
        let gasifier = scenario_a();
        let flow = gasifier.capacity(OperatingMode::Steady).unwrap();

        let found = design_ambient(
            &gasifier.with_ambient(ambient(-10.0, 0.5)),
            NonNegative::new(flow).unwrap(),
            DesignAmbientConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(found.get::<degree_celsius>(), 15.0, epsilon = 1e-6);
    }

    #[test]
    fn meets_the_target_at_the_result() {
        let gasifier = scenario_a();
        let found = design_ambient(&gasifier, target(1_500.0), DesignAmbientConfig::default())
            .unwrap();

        let achieved = gasifier
            .with_ambient(gasifier.ambient().at_temperature(found))
            .capacity(OperatingMode::Steady)
            .unwrap();
        assert_relative_eq!(
            achieved.get::<cubic_meter_per_hour>(),
            1_500.0,
            max_relative = 1e-6
        );
        assert!(found.get::<degree_celsius>() < 15.0);
    }

    #[test]
    fn zero_target_is_met_at_reference_temperature() {
        let gasifier = scenario_a();
        let found =
            design_ambient(&gasifier, target(0.0), DesignAmbientConfig::default()).unwrap();
        assert_eq!(found, gasifier.constants().lng_temperature);
    }

    #[test]
    fn reports_unreachable_target() {
        let result = design_ambient(
            &scenario_a(),
            target(1.0e6),
            DesignAmbientConfig::default(),
        );
        assert!(matches!(
            result,
            Err(DesignAmbientError::Unreachable { .. })
        ));
    }

    #[test]
    fn reports_iteration_limit() {
        let config = DesignAmbientConfig {
            max_iters: 2,
            ..DesignAmbientConfig::default()
        };
        let result = design_ambient(&scenario_a(), target(1_500.0), config);
        assert!(matches!(
            result,
            Err(DesignAmbientError::MaxIters { iters: 2, .. })
        ));
    }
}
