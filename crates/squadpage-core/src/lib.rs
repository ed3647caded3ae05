//! Core library for squadpage.
//!
//! Holds everything that does not depend on how pages are served:
//!
//! - `api`: the Directory API client and the `DirectoryApi` fetch interface
//! - `models`: squad, person and tribe records as the directory returns them
//! - `config`: environment-driven settings
//! - `snapshot`: the write-once squad list captured at startup

pub mod api;
pub mod config;
pub mod models;
pub mod snapshot;

pub use api::{ApiClient, ApiError, DirectoryApi};
pub use config::Config;
pub use models::{Person, PersonSquad, Squad, SquadRef, Tribe, TribeRef};
pub use snapshot::Snapshot;
