//! HTTP interaction layer: typed calls against the pet store.
//!
//! Every call expects `200 OK` and decodes the body into the resource model.
//! Any other status, an undecodable body, or a transport failure is returned
//! as a [`ContractError`]; nothing is retried.

use std::time::Duration;

use anyhow::anyhow;
use petstore_core::ContractError;
use petstore_domain::{Pet, Status};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url, header};
use tracing::{debug, warn};

pub const PET_ENDPOINT: &str = "/pet";
pub const FIND_BY_STATUS_ENDPOINT: &str = "/pet/findByStatus";

/// Documented success code for every pet endpoint.
pub const SUCCESS_STATUS: StatusCode = StatusCode::OK;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configures independent [`PetClient`] instances.
///
/// Holds only read-only settings; each scenario builds its own client from it.
#[derive(Debug, Clone)]
pub struct PetClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl PetClientBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Upper bound on a single request/response cycle.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build(&self) -> Result<PetClient, ContractError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| anyhow!("failed to build http client: {e}"))?;
        Ok(PetClient {
            client,
            base_url: self.base_url.clone(),
        })
    }
}

/// Client for one base endpoint.
pub struct PetClient {
    client: Client,
    base_url: String,
}

impl PetClient {
    pub fn builder(base_url: &str) -> PetClientBuilder {
        PetClientBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /pet`: create `pet` and return the service's copy.
    ///
    /// Any id on `pet` is dropped from the request body; ids are assigned by
    /// the service.
    pub async fn create(&self, pet: &Pet) -> Result<Pet, ContractError> {
        let body = Pet {
            id: None,
            ..pet.clone()
        };
        let bytes = self
            .send(Method::POST, PET_ENDPOINT, &[], Some(&body))
            .await?;
        Ok(Pet::from_json(&bytes)?)
    }

    /// `PUT /pet`: replace the pet identified by `pet.id` and return the
    /// service's updated copy.
    pub async fn update(&self, pet: &Pet) -> Result<Pet, ContractError> {
        if pet.id.is_none() {
            let err = anyhow!("cannot update pet {:?} without a server-assigned id", pet.name);
            return Err(err.into());
        }
        let bytes = self.send(Method::PUT, PET_ENDPOINT, &[], Some(pet)).await?;
        Ok(Pet::from_json(&bytes)?)
    }

    /// `GET /pet/findByStatus?status={token}`: every pet the service reports
    /// with `status`. An empty list is a valid answer.
    pub async fn find_by_status(&self, status: Status) -> Result<Vec<Pet>, ContractError> {
        let query = [("status", status.as_str())];
        let bytes = self
            .send(Method::GET, FIND_BY_STATUS_ENDPOINT, &query, None)
            .await?;
        Ok(Pet::list_from_json(&bytes)?)
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ContractError> {
        let raw = format!("{}{}", self.base_url, path);
        let parsed = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };
        parsed.map_err(|e| anyhow!("invalid endpoint URL {raw:?}: {e}").into())
    }

    fn base_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
    }

    /// Send `req`, require [`SUCCESS_STATUS`] and return the raw body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Pet>,
    ) -> Result<Vec<u8>, ContractError> {
        let endpoint = endpoint(&method, path);
        let mut req = self.base_request(method, self.url(path, query)?);
        if let Some(body) = body {
            req = req.json(body);
        }
        debug!(%endpoint, base_url = %self.base_url, "sending request");

        let resp = req.send().await.map_err(|e| ContractError::Transport {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;

        let status = resp.status();
        if status != SUCCESS_STATUS {
            let body = resp.text().await.unwrap_or_default();
            warn!(%endpoint, status = status.as_u16(), %body, "unexpected response status");
            return Err(ContractError::UnexpectedStatus {
                expected: SUCCESS_STATUS.as_u16(),
                actual: status.as_u16(),
                endpoint,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| ContractError::Transport {
            endpoint: endpoint.clone(),
            reason: format!("failed to read response body: {e}"),
        })?;
        Ok(bytes.to_vec())
    }
}

/// Label used in errors and logs, e.g. `POST /pet`.
fn endpoint(method: &Method, path: &str) -> String {
    format!("{method} {path}")
}
