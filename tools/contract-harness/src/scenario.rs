//! Contract scenarios.
//!
//! Each scenario builds its input from fixed literals, drives the client in
//! order and stops at the first failed expectation.

use std::fmt;
use std::str::FromStr;

use petstore_core::ContractError;
use petstore_domain::{Category, Pet, Status, Tag};
use thiserror::Error;
use tracing::info;

use crate::client::PetClient;
use crate::expect::{assert_that, at, eq, every, field, len_at_least, not_empty, present};

pub const NEW_PET_NAME: &str = "Jelly";

/// Name expected at [`SEARCHED_DOG_INDEX`] among available pets. Depends on
/// the data seeded in the remote store, not on the API contract.
pub const SEARCHED_DOG_NAME: &str = "Puff";
pub const SEARCHED_DOG_INDEX: usize = 3;
pub const MIN_AVAILABLE_PETS: usize = 4;

/// One independent, reproducible contract check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Create a pet, then mark it sold.
    CreateThenUpdate,
    /// Query available pets against the seeded dataset.
    FindAvailable,
    /// Query sold pets and check the filter.
    FindSold,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Self::CreateThenUpdate, Self::FindAvailable, Self::FindSold];

    pub fn name(self) -> &'static str {
        match self {
            Self::CreateThenUpdate => "create-then-update",
            Self::FindAvailable => "find-available",
            Self::FindSold => "find-sold",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CreateThenUpdate => "create a pet, then update its status to sold",
            Self::FindAvailable => "find pets by status `available`",
            Self::FindSold => "find pets by status `sold`",
        }
    }

    pub async fn run(self, client: &PetClient) -> Result<(), ContractError> {
        match self {
            Self::CreateThenUpdate => create_then_update(client).await,
            Self::FindAvailable => find_available(client).await,
            Self::FindSold => find_sold(client).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`Scenario`].
#[derive(Debug, Error)]
#[error("unknown scenario: {0:?} (expected one of: create-then-update, find-available, find-sold)")]
pub struct UnknownScenario(pub String);

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| UnknownScenario(s.to_owned()))
    }
}

/// The pet created by [`Scenario::CreateThenUpdate`].
pub fn new_pet() -> Pet {
    Pet::new(NEW_PET_NAME)
        .with_category(Category::new(1, "Dog"))
        .with_photo_url("https://example.com/photo1.jpg")
        .with_tag(Tag::new(1, "friendly"))
        .with_status(Status::Available)
}

fn assert_pet_details(pet: &Pet, name: &str, status: Status) -> Result<(), ContractError> {
    assert_that("Pet ID should not be null", &pet.id, present())?;
    assert_that("Pet name should match", &pet.name, eq(name))?;
    assert_that("Pet status should match", &pet.status, eq(Some(status)))
}

async fn create_then_update(client: &PetClient) -> Result<(), ContractError> {
    let mut created = client.create(&new_pet()).await?;
    info!(pet = ?created, "created pet");
    assert_pet_details(&created, NEW_PET_NAME, Status::Available)?;

    created.status = Some(Status::Sold);
    let updated = client.update(&created).await?;
    info!(pet = ?updated, "updated pet");
    assert_pet_details(&updated, NEW_PET_NAME, Status::Sold)
}

async fn find_available(client: &PetClient) -> Result<(), ContractError> {
    let found = client.find_by_status(Status::Available).await?;
    assert_that("No available pets found", found.as_slice(), not_empty())?;
    assert_that(
        "Found less than 4 available pets",
        found.as_slice(),
        len_at_least(MIN_AVAILABLE_PETS),
    )?;
    info!(count = found.len(), "available pets found");

    assert_that(
        "Fourth pet's name does not match",
        found.as_slice(),
        at(
            SEARCHED_DOG_INDEX,
            field("name", |p: &Pet| &p.name, eq(SEARCHED_DOG_NAME)),
        ),
    )?;
    assert_that(
        "Not all pets have status AVAILABLE",
        found.as_slice(),
        every(field("status", |p: &Pet| &p.status, eq(Some(Status::Available)))),
    )
}

async fn find_sold(client: &PetClient) -> Result<(), ContractError> {
    let found = client.find_by_status(Status::Sold).await?;
    info!(count = found.len(), "sold pets found");
    assert_that("No sold pets found", found.as_slice(), not_empty())?;
    assert_that(
        "Not all pets have status SOLD",
        found.as_slice(),
        every(field("status", |p: &Pet| &p.status, eq(Some(Status::Sold)))),
    )
}
