//! REST client module for the FDND Directory API.
//!
//! The directory is a read-only Directus instance exposing `squad`, `person`
//! and `tribe` collections under `/items/{collection}`. Queries are expressed
//! with Directus `filter`, `sort` and `fields` query parameters.
//!
//! `DirectoryApi` is the seam the web layer depends on; `ApiClient` is the
//! live implementation.

pub mod client;
pub mod error;
pub mod query;

use async_trait::async_trait;

use crate::models::{Person, Squad};

pub use client::ApiClient;
pub use error::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// The three reads the site needs from the directory.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Squads of one cohort that belong to the named tribe.
    async fn get_squads(&self, cohort: &str, tribe: &str) -> Result<Vec<Squad>>;

    /// People in any squad of the named tribe and cohort, sorted by name.
    async fn get_persons(&self, tribe: &str, cohort: &str) -> Result<Vec<Person>>;

    /// A single person, or `None` when the directory has no such id.
    async fn get_person_by_id(&self, id: &str) -> Result<Option<Person>>;
}
