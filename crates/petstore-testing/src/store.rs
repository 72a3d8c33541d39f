//! In-process mock of the remote pet store.
//!
//! Serves the three endpoints the harness exercises, backed by an in-memory
//! list. Runs on an OS-assigned port so tests never collide.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use petstore_domain::{Pet, Status};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug)]
struct Store {
    pets: Vec<Pet>,
    next_id: i64,
}

type SharedStore = Arc<Mutex<Store>>;

/// Build the mock store router over `seed`.
///
/// New ids start above the highest seeded id.
pub fn router(seed: Vec<Pet>) -> Router {
    router_with_store(shared(seed))
}

fn shared(seed: Vec<Pet>) -> SharedStore {
    let next_id = seed.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1;
    Arc::new(Mutex::new(Store {
        pets: seed,
        next_id,
    }))
}

fn router_with_store(store: SharedStore) -> Router {
    Router::new()
        .route("/pet", post(create_pet).put(update_pet))
        .route("/pet/findByStatus", get(find_by_status))
        .with_state(store)
}

// ── POST /pet ────────────────────────────────────────────────────────────────

async fn create_pet(State(store): State<SharedStore>, Json(mut pet): Json<Pet>) -> Json<Pet> {
    let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
    pet.id = Some(store.next_id);
    store.next_id += 1;
    store.pets.push(pet.clone());
    Json(pet)
}

// ── PUT /pet ─────────────────────────────────────────────────────────────────

async fn update_pet(
    State(store): State<SharedStore>,
    Json(pet): Json<Pet>,
) -> Result<Json<Pet>, StatusCode> {
    let id = pet.id.ok_or(StatusCode::BAD_REQUEST)?;
    let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
    let slot = store
        .pets
        .iter_mut()
        .find(|p| p.id == Some(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = pet.clone();
    Ok(Json(pet))
}

// ── GET /pet/findByStatus ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FindByStatusQuery {
    status: String,
}

async fn find_by_status(
    State(store): State<SharedStore>,
    Query(query): Query<FindByStatusQuery>,
) -> Result<Json<Vec<Pet>>, StatusCode> {
    let status: Status = query.status.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let store = store.lock().unwrap_or_else(PoisonError::into_inner);
    let found = store
        .pets
        .iter()
        .filter(|p| p.status == Some(status))
        .cloned()
        .collect();
    Ok(Json(found))
}

/// A running mock store. The server task stops when this is dropped.
pub struct MockPetStore {
    base_url: String,
    store: SharedStore,
    handle: JoinHandle<()>,
}

impl MockPetStore {
    /// Start the mock store on `127.0.0.1` with an OS-assigned port.
    pub async fn spawn(seed: Vec<Pet>) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let base_url = format!("http://127.0.0.1:{port}");

        let store = shared(seed);
        let app = router_with_store(Arc::clone(&store));
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "mock pet store stopped");
            }
        });

        tracing::debug!(%base_url, "mock pet store listening");
        Ok(Self {
            base_url,
            store,
            handle,
        })
    }

    /// Base URL to point a client at, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of every stored pet, in insertion order.
    pub fn pets(&self) -> Vec<Pet> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pets
            .clone()
    }
}

impl Drop for MockPetStore {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
