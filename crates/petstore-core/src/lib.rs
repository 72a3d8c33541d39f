//! Shared plumbing for the contract harness: the error taxonomy and
//! tracing setup.

pub mod error;
pub mod tracing;

pub use error::ContractError;
