//! HTTP client for the customer records API.

use crs_model::{Country, RecordPatch, TaxRecord, UpdatedRecord};
use reqwest::Response;
use tracing::debug;

use crate::error::{ApiError, Result};

/// Base URL of the hosted backend.
pub const DEFAULT_BASE_URL: &str = "https://685013d7e7c42cfd17974a33.mockapi.io";

/// Client for the customer records HTTP API.
///
/// Cheap to clone; clones share the underlying connection pool, so one
/// client can be handed by value into every async task.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn records_url(&self) -> String {
        format!("{}/taxes", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/taxes/{id}", self.base_url)
    }

    fn countries_url(&self) -> String {
        format!("{}/countries", self.base_url)
    }

    /// Fetch the full record collection.
    pub async fn list_records(&self) -> Result<Vec<TaxRecord>> {
        let url = self.records_url();
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, &url)?;
        Ok(response.json().await?)
    }

    /// Update one record's name and country.
    ///
    /// On success returns the server's representation of the updated
    /// record; the caller decides how to merge it into local state.
    pub async fn update_record(&self, id: &str, patch: &RecordPatch) -> Result<UpdatedRecord> {
        let url = self.record_url(id);
        debug!("PUT {url}");
        let response = self.client.put(&url).json(patch).send().await?;
        let response = ensure_success(response, &url)?;
        Ok(response.json().await?)
    }

    /// Fetch the full country collection.
    pub async fn list_countries(&self) -> Result<Vec<Country>> {
        let url = self.countries_url();
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, &url)?;
        Ok(response.json().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn ensure_success(response: Response, endpoint: &str) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
        });
    }
    Ok(response)
}
