//! Contract harness for the pet store API.
//!
//! - [`client`]: typed HTTP calls against a configured base URL
//! - [`expect`]: composable expectations that fail with diagnostics
//! - [`scenario`]: the contract scenarios themselves
//! - [`runner`] / [`reporter`]: isolated execution and PASS/FAIL output

pub mod client;
pub mod config;
pub mod expect;
pub mod reporter;
pub mod runner;
pub mod scenario;

pub use client::{PetClient, PetClientBuilder};
pub use petstore_core::ContractError;
pub use runner::{Execution, Runner, ScenarioResult};
pub use scenario::Scenario;
