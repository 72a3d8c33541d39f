//! Test utilities for the pet store contract harness.
//!
//! Provides `MockPetStore` (an in-process stand-in for the remote service)
//! and the seeded fixture dataset it serves.
//! Import from tests only, never from the harness itself.

pub mod fixture;
pub mod store;

pub use fixture::Fixture;
pub use store::MockPetStore;
