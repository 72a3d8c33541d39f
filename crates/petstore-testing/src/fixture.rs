//! Fixture loader.
//!
//! Loads files from this crate's `fixtures/` directory.

use std::path::Path;

use petstore_domain::Pet;
use serde_json::Value;

/// File holding the dataset the mock store is seeded with.
pub const SEED_PETS: &str = "pets.json";

/// Load fixture files relative to `crates/petstore-testing/fixtures/`.
///
/// # Example
/// ```no_run
/// use petstore_testing::fixture::Fixture;
/// let val = Fixture::load("pets.json");
/// ```
pub struct Fixture;

impl Fixture {
    /// Load and parse a fixture JSON file.
    ///
    /// Panics if the file is missing or invalid JSON.
    pub fn load(name: &str) -> Value {
        let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name);
        let contents = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", name, e))
    }

    /// The seeded pet dataset, in insertion order.
    ///
    /// Among the `available` pets the fourth (index 3) is named "Puff"; the
    /// set also holds `sold` and `pending` pets.
    ///
    /// Panics if the fixture does not decode as a list of pets.
    pub fn seed_pets() -> Vec<Pet> {
        let value = Self::load(SEED_PETS);
        serde_json::from_value(value)
            .unwrap_or_else(|e| panic!("fixture {SEED_PETS} is not a pet list: {e}"))
    }
}
