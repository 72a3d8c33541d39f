//! Test result reporter: formats PASS/FAIL output and prints a summary.

use petstore_core::ContractError;

use crate::runner::ScenarioResult;

pub struct Reporter {
    passed: usize,
    failed: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, result: &ScenarioResult) {
        let scenario = result.scenario;
        match &result.outcome {
            Ok(()) => {
                self.passed += 1;
                println!(
                    "PASS  [{}] {} ({} ms)",
                    scenario,
                    scenario.description(),
                    result.elapsed.as_millis()
                );
            }
            Err(err) => {
                self.failed += 1;
                println!("FAIL  [{}] {}", scenario, scenario.description());
                for line in diagnostics(err) {
                    println!("        {line}");
                }
            }
        }
    }

    pub fn print_summary(&self) {
        println!();
        println!("────────────────────────────────────────────────────");
        println!("Results: {} passed, {} failed", self.passed, self.failed);
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Lines explaining why a scenario failed.
pub fn diagnostics(err: &ContractError) -> Vec<String> {
    match err {
        ContractError::AssertionFailure {
            expectation,
            expected,
            actual,
        } => vec![
            format!("assertion: {expectation}"),
            format!("expected:  {expected}"),
            format!("actual:    {actual}"),
        ],
        ContractError::UnexpectedStatus {
            expected,
            actual,
            endpoint,
        } => vec![format!("{endpoint} → expected {expected}, got {actual}")],
        ContractError::SchemaMismatch { field, reason } => {
            vec![format!("schema: field `{field}`: {reason}")]
        }
        ContractError::Transport { endpoint, reason } => {
            vec![format!("{endpoint} → request failed: {reason}")]
        }
        ContractError::Internal(e) => vec![format!("error: {e:#}")],
    }
}
