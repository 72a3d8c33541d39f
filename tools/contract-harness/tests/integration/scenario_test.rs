use httpmock::prelude::*;
use serde_json::json;

use contract_harness::{Execution, PetClient, Runner, Scenario};
use petstore_domain::{Pet, Status};
use petstore_testing::MockPetStore;

use crate::helpers::{assertion, client, seed_without, seeded_store};

// ── against the mock store ───────────────────────────────────────────────────

#[tokio::test]
async fn should_pass_every_scenario_against_seeded_store() {
    let store = seeded_store().await;
    let runner = Runner::new(PetClient::builder(store.base_url()));

    let results = runner.run(&Scenario::ALL, Execution::Parallel).await;

    for result in &results {
        assert!(
            result.passed(),
            "{} failed: {:?}",
            result.scenario,
            result.outcome
        );
    }
}

#[tokio::test]
async fn should_leave_created_pet_sold_after_lifecycle() {
    let store = seeded_store().await;

    Scenario::CreateThenUpdate
        .run(&client(store.base_url()))
        .await
        .unwrap();

    let jelly: Vec<Pet> = store
        .pets()
        .into_iter()
        .filter(|p| p.name == "Jelly")
        .collect();
    assert_eq!(jelly.len(), 1);
    assert!(jelly[0].id.is_some());
    assert_eq!(jelly[0].status, Some(Status::Sold));
}

#[tokio::test]
async fn should_return_only_requested_status_for_every_token() {
    let store = seeded_store().await;
    let client = client(store.base_url());

    for status in Status::ALL {
        let found = client.find_by_status(status).await.unwrap();
        assert!(!found.is_empty(), "no pets seeded as {status}");
        assert!(found.iter().all(|p| p.status == Some(status)));
    }
}

#[tokio::test]
async fn should_fail_find_available_when_too_few_pets_seeded() {
    let seed: Vec<Pet> = petstore_testing::Fixture::seed_pets()
        .into_iter()
        .filter(|p| p.status != Some(Status::Available) || p.name == "Rex")
        .collect();
    let store = MockPetStore::spawn(seed).await.unwrap();

    let err = Scenario::FindAvailable
        .run(&client(store.base_url()))
        .await
        .unwrap_err();

    let (expectation, expected, actual) = assertion(&err);
    assert_eq!(expectation, "Found less than 4 available pets");
    assert_eq!(expected, "a collection of at least 4 items");
    assert_eq!(actual, "1 items");
}

#[tokio::test]
async fn should_fail_find_available_when_fourth_pet_differs() {
    let seed = vec![
        Pet::new("A").with_status(Status::Available),
        Pet::new("B").with_status(Status::Available),
        Pet::new("C").with_status(Status::Available),
        Pet::new("D").with_status(Status::Available),
    ];
    let store = MockPetStore::spawn(seed).await.unwrap();

    let err = Scenario::FindAvailable
        .run(&client(store.base_url()))
        .await
        .unwrap_err();

    let (expectation, _, actual) = assertion(&err);
    assert_eq!(expectation, "Fourth pet's name does not match");
    assert_eq!(actual, "item [3] was `name` \"D\"");
}

#[tokio::test]
async fn should_fail_find_sold_when_nothing_is_sold() {
    let store = MockPetStore::spawn(seed_without(Status::Sold)).await.unwrap();

    let err = Scenario::FindSold
        .run(&client(store.base_url()))
        .await
        .unwrap_err();

    let (expectation, _, actual) = assertion(&err);
    assert_eq!(expectation, "No sold pets found");
    assert_eq!(actual, "an empty collection");
}

#[tokio::test]
async fn should_keep_running_siblings_when_one_scenario_fails() {
    let store = MockPetStore::spawn(seed_without(Status::Sold)).await.unwrap();
    let runner = Runner::new(PetClient::builder(store.base_url()));

    let results = runner.run(&Scenario::ALL, Execution::Parallel).await;

    let outcomes: Vec<_> = results
        .iter()
        .map(|r| (r.scenario, r.passed()))
        .collect();
    assert_eq!(
        outcomes,
        [
            (Scenario::CreateThenUpdate, true),
            (Scenario::FindAvailable, true),
            (Scenario::FindSold, false),
        ]
    );
}

// ── contract drift ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_detect_filter_drift_in_sold_query() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/pet/findByStatus")
                .query_param("status", "sold");
            then.status(200).json_body(json!([
                { "id": 2, "name": "Luna", "status": "sold" },
                { "id": 4, "name": "Milo", "status": "pending" }
            ]));
        })
        .await;

    let err = Scenario::FindSold
        .run(&client(&server.base_url()))
        .await
        .unwrap_err();

    let (expectation, expected, actual) = assertion(&err);
    assert_eq!(expectation, "Not all pets have status SOLD");
    assert_eq!(expected, "every item with `status` equal to Some(Sold)");
    assert_eq!(actual, "item [1] was `status` Some(Pending)");
}

#[tokio::test]
async fn should_report_fourth_name_before_status_filter_in_available_query() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/pet/findByStatus")
                .query_param("status", "available");
            then.status(200).json_body(json!([
                { "id": 1, "name": "Rex", "status": "available" },
                { "id": 4, "name": "Milo", "status": "pending" },
                { "id": 3, "name": "Bella", "status": "available" },
                { "id": 5, "name": "Max", "status": "available" }
            ]));
        })
        .await;

    let err = Scenario::FindAvailable
        .run(&client(&server.base_url()))
        .await
        .unwrap_err();

    let (expectation, _, actual) = assertion(&err);
    assert_eq!(expectation, "Fourth pet's name does not match");
    assert_eq!(actual, "item [3] was `name` \"Max\"");
}

#[tokio::test]
async fn should_detect_filter_drift_in_available_query() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/pet/findByStatus")
                .query_param("status", "available");
            then.status(200).json_body(json!([
                { "id": 1, "name": "Rex", "status": "available" },
                { "id": 4, "name": "Milo", "status": "pending" },
                { "id": 3, "name": "Bella", "status": "available" },
                { "id": 6, "name": "Puff", "status": "available" }
            ]));
        })
        .await;

    let err = Scenario::FindAvailable
        .run(&client(&server.base_url()))
        .await
        .unwrap_err();

    let (expectation, _, actual) = assertion(&err);
    assert_eq!(expectation, "Not all pets have status AVAILABLE");
    assert_eq!(actual, "item [1] was `status` Some(Pending)");
}

#[tokio::test]
async fn should_detect_update_that_does_not_apply_status() {
    let server = MockServer::start_async().await;
    let stale = json!({
        "id": 77,
        "category": { "id": 1, "name": "Dog" },
        "name": "Jelly",
        "photoUrls": ["https://example.com/photo1.jpg"],
        "tags": [{ "id": 1, "name": "friendly" }],
        "status": "available"
    });
    server
        .mock_async(|when, then| {
            when.method(POST).path("/pet");
            then.status(200).json_body(stale.clone());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/pet");
            then.status(200).json_body(stale.clone());
        })
        .await;

    let err = Scenario::CreateThenUpdate
        .run(&client(&server.base_url()))
        .await
        .unwrap_err();

    let (expectation, expected, actual) = assertion(&err);
    assert_eq!(expectation, "Pet status should match");
    assert_eq!(expected, "equal to Some(Sold)");
    assert_eq!(actual, "Some(Available)");
}

#[tokio::test]
async fn should_stop_lifecycle_when_create_is_rejected() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/pet");
            then.status(405);
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT).path("/pet");
            then.status(200);
        })
        .await;

    let err = Scenario::CreateThenUpdate
        .run(&client(&server.base_url()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "UNEXPECTED_STATUS");
    create.assert_hits_async(1).await;
    update.assert_hits_async(0).await;
}
