//! API client for the FDND Directory (Directus) REST API.
//!
//! Every fetch performs exactly one GET. Nothing is retried and nothing is
//! cached here; the caller decides what to keep.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{Envelope, OneOrMany, Person, Squad};

use super::query::{persons_query, squads_query};
use super::{ApiError, DirectoryApi, Result};

/// Public FDND Directus instance
pub const DEFAULT_BASE_URL: &str = "https://fdnd.directus.app";

/// API client for the Directory API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client. `timeout` of `None` lets requests wait indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self, collection: &str) -> String {
        format!("{}/items/{}", self.base_url, collection)
    }

    /// `{base}/items/{collection}/{id}` with `id` encoded as a single path segment.
    fn item_url(&self, collection: &str, id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.items_url(collection))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    /// Send one GET and decode the `{ "data": ... }` envelope.
    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_status(status, &body));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::Malformed(format!("{}: {}", url, e)))?;
        Ok(envelope.data)
    }

    /// Fetch the squads of one cohort within a tribe
    pub async fn fetch_squads(&self, cohort: &str, tribe: &str) -> Result<Vec<Squad>> {
        let url = self.items_url("squad");
        let squads: Vec<Squad> = self.get(&url, &squads_query(cohort, tribe)).await?;
        debug!(cohort, tribe, count = squads.len(), "Fetched squads");
        Ok(squads)
    }

    /// Fetch everyone in a squad of the given tribe and cohort, sorted by name
    pub async fn fetch_persons(&self, tribe: &str, cohort: &str) -> Result<Vec<Person>> {
        let url = self.items_url("person");
        let persons: Vec<Person> = self.get(&url, &persons_query(tribe, cohort)).await?;
        debug!(cohort, tribe, count = persons.len(), "Fetched persons");
        Ok(persons)
    }

    /// Fetch one person by id. A missing record is `Ok(None)`.
    pub async fn fetch_person_by_id(&self, id: &str) -> Result<Option<Person>> {
        // Dot segments are dropped by URL normalization and would hit the collection
        if id.is_empty() || id == "." || id == ".." {
            debug!(id, "Rejected person id");
            return Ok(None);
        }

        let url = self.item_url("person", id)?;
        let fetched = self
            .get::<Option<OneOrMany<Person>>>(url.as_str(), &[])
            .await
            .map_err(ApiError::for_single_item);

        match fetched {
            Ok(data) => {
                let person = data.and_then(OneOrMany::into_first);
                debug!(id, found = person.is_some(), "Fetched person");
                Ok(person)
            }
            Err(ApiError::NotFound(body)) => {
                debug!(id, body = %body, "Person not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl DirectoryApi for ApiClient {
    async fn get_squads(&self, cohort: &str, tribe: &str) -> Result<Vec<Squad>> {
        self.fetch_squads(cohort, tribe).await
    }

    async fn get_persons(&self, tribe: &str, cohort: &str) -> Result<Vec<Person>> {
        self.fetch_persons(tribe, cohort).await
    }

    async fn get_person_by_id(&self, id: &str) -> Result<Option<Person>> {
        self.fetch_person_by_id(id).await
    }
}
