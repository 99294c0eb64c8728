//! Run one or all scenarios against a snapshot.
//!
//! Every scenario in a comparison gets a fresh `SimRng` built from the same
//! seed, so differences between outcomes come from the configuration alone.
//! With the `parallel` feature the runs share the Rayon pool; each owns its
//! engine and random source, so no state crosses runs.

use ferry_core::{SimRng, SimulationConfig};
use ferry_sim::{SimulationResult, simulate};
use serde::Serialize;
use tracing::debug;

use crate::{
    OperationalSnapshot, Scenario, ScenarioDefaults, ScenarioResult, SnapshotWarning, configure,
    snapshot_warnings,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub config:   SimulationConfig,
    pub result:   SimulationResult,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub seed:     u64,
    pub warnings: Vec<SnapshotWarning>,
    /// One entry per scenario, in [`Scenario::ALL`] order.
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioComparison {
    pub fn outcome(&self, scenario: Scenario) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.scenario == scenario)
    }
}

/// Configure and simulate a single scenario.
pub fn run_scenario(
    snapshot: &OperationalSnapshot,
    scenario: Scenario,
    defaults: &ScenarioDefaults,
    seed:     u64,
) -> ScenarioResult<ScenarioOutcome> {
    let config = configure(snapshot, scenario, defaults)?;
    execute(scenario, config, seed)
}

/// Run every scenario with the same seed.
///
/// All configs are built before any run starts, so a bad snapshot fails
/// without simulating anything.
pub fn compare_scenarios(
    snapshot: &OperationalSnapshot,
    defaults: &ScenarioDefaults,
    seed:     u64,
) -> ScenarioResult<ScenarioComparison> {
    let configs = Scenario::ALL
        .iter()
        .map(|&scenario| configure(snapshot, scenario, defaults).map(|c| (scenario, c)))
        .collect::<ScenarioResult<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let outcomes = configs
        .into_iter()
        .map(|(scenario, config)| execute(scenario, config, seed))
        .collect::<ScenarioResult<Vec<_>>>()?;

    #[cfg(feature = "parallel")]
    let outcomes = {
        use rayon::prelude::*;

        configs
            .into_par_iter()
            .map(|(scenario, config)| execute(scenario, config, seed))
            .collect::<ScenarioResult<Vec<_>>>()?
    };

    Ok(ScenarioComparison { seed, warnings: snapshot_warnings(snapshot), outcomes })
}

fn execute(scenario: Scenario, config: SimulationConfig, seed: u64) -> ScenarioResult<ScenarioOutcome> {
    let result = simulate(&config, SimRng::new(seed))?;
    debug!(
        %scenario,
        seed,
        avg_wait = result.avg_wait_time,
        max_queue = result.max_queue_size,
        vehicles = result.total_vehicles,
        "scenario finished"
    );
    Ok(ScenarioOutcome { scenario, config, result })
}
