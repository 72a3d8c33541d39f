//! Contract harness: runs pet store contract scenarios against a live service.
//!
//! # Usage
//!
//! ```bash
//! # Run every scenario against the public pet store
//! cargo run -p contract-harness
//!
//! # Run one scenario against a local deployment, one at a time
//! cargo run -p contract-harness -- --base-url http://localhost:8080/v2 \
//!     --scenario create-then-update --sequential
//! ```
//!
//! Exits 0 when all scenarios pass, exits 1 when any fail.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use contract_harness::config::HarnessConfig;
use contract_harness::reporter::Reporter;
use contract_harness::{Execution, PetClient, Runner, Scenario};

#[derive(Parser)]
#[command(about = "Run pet store contract scenarios against a live service")]
struct Args {
    /// Base URL of the service (overrides PETSTORE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds (overrides PETSTORE_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Run only this scenario; repeat to select several
    #[arg(long = "scenario")]
    scenarios: Vec<Scenario>,

    /// Run scenarios one after another instead of concurrently
    #[arg(long)]
    sequential: bool,

    /// Print scenario names and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    petstore_core::tracing::init_tracing();

    let args = Args::parse();

    if args.list {
        for scenario in Scenario::ALL {
            println!("{:<20} {}", scenario.name(), scenario.description());
        }
        return Ok(());
    }

    let mut config = HarnessConfig::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }

    let scenarios = if args.scenarios.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        args.scenarios
    };
    let execution = if args.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel
    };

    println!(
        "Running {} scenario(s) against {}",
        scenarios.len(),
        config.base_url
    );
    println!();

    let runner = Runner::new(PetClient::builder(&config.base_url).timeout(config.timeout));
    let mut reporter = Reporter::new();

    for result in runner.run(&scenarios, execution).await {
        reporter.record(&result);
    }

    reporter.print_summary();

    if reporter.all_passed() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
