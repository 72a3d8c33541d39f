use contract_harness::PetClient;
use petstore_core::ContractError;
use petstore_domain::{Pet, Status};
use petstore_testing::{Fixture, MockPetStore};

/// Client pointed at `base_url` with the default settings.
pub fn client(base_url: &str) -> PetClient {
    PetClient::builder(base_url).build().unwrap()
}

/// Mock store seeded with the standard fixture dataset.
pub async fn seeded_store() -> MockPetStore {
    MockPetStore::spawn(Fixture::seed_pets()).await.unwrap()
}

/// Seeded dataset without any pet in `status`.
pub fn seed_without(status: Status) -> Vec<Pet> {
    Fixture::seed_pets()
        .into_iter()
        .filter(|p| p.status != Some(status))
        .collect()
}

/// Unwrap an `AssertionFailure` into `(expectation, expected, actual)`.
pub fn assertion(err: &ContractError) -> (&str, &str, &str) {
    match err {
        ContractError::AssertionFailure {
            expectation,
            expected,
            actual,
        } => (expectation.as_str(), expected.as_str(), actual.as_str()),
        other => panic!("expected AssertionFailure, got {other:?}"),
    }
}
