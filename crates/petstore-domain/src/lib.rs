//! Resource model for the pet store contract.
//!
//! Pure wire types with no HTTP or runtime dependencies. Everything the
//! harness knows about the service's JSON schema lives here.

pub mod pet;
pub mod schema;
pub mod status;

pub use pet::{Category, Pet, Tag};
pub use schema::SchemaMismatch;
pub use status::{Status, UnknownStatus};
