//! Scenario runner: executes scenarios in isolation and collects outcomes.

use std::time::{Duration, Instant};

use anyhow::anyhow;
use petstore_core::ContractError;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::client::PetClientBuilder;
use crate::scenario::Scenario;

/// How scenarios are scheduled relative to each other. Calls inside one
/// scenario are always sequential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Parallel,
    Sequential,
}

/// Outcome of a single scenario.
#[derive(Debug)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub outcome: Result<(), ContractError>,
    pub elapsed: Duration,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct Runner {
    clients: PetClientBuilder,
}

impl Runner {
    pub fn new(clients: PetClientBuilder) -> Self {
        Self { clients }
    }

    /// Run `scenarios` and return one result per scenario, in input order.
    ///
    /// Every scenario gets its own client and its own task. A failure or
    /// panic in one scenario is recorded and never stops the others.
    pub async fn run(&self, scenarios: &[Scenario], execution: Execution) -> Vec<ScenarioResult> {
        let mut results = Vec::with_capacity(scenarios.len());
        match execution {
            Execution::Sequential => {
                for &scenario in scenarios {
                    let task = tokio::spawn(run_one(self.clients.clone(), scenario));
                    results.push(settle(scenario, task).await);
                }
            }
            Execution::Parallel => {
                let tasks: Vec<_> = scenarios
                    .iter()
                    .map(|&scenario| {
                        let clients = self.clients.clone();
                        (scenario, tokio::spawn(run_one(clients, scenario)))
                    })
                    .collect();
                for (scenario, task) in tasks {
                    results.push(settle(scenario, task).await);
                }
            }
        }
        results
    }
}

/// Wait for a scenario task; a panic or cancellation becomes `Internal`.
async fn settle(scenario: Scenario, task: JoinHandle<ScenarioResult>) -> ScenarioResult {
    match task.await {
        Ok(result) => result,
        Err(e) => {
            warn!(%scenario, error = %e, "scenario task aborted");
            ScenarioResult {
                scenario,
                outcome: Err(anyhow!("scenario task aborted: {e}").into()),
                elapsed: Duration::ZERO,
            }
        }
    }
}

async fn run_one(clients: PetClientBuilder, scenario: Scenario) -> ScenarioResult {
    let started = Instant::now();
    let outcome = match clients.build() {
        Ok(client) => scenario.run(&client).await,
        Err(e) => Err(e),
    };
    let elapsed = started.elapsed();
    match &outcome {
        Ok(()) => info!(%scenario, ?elapsed, "scenario passed"),
        Err(e) => warn!(%scenario, kind = e.kind(), error = %e, "scenario failed"),
    }
    ScenarioResult {
        scenario,
        outcome,
        elapsed,
    }
}
