//! Shared request context.
//!
//! Built once in `main` before the router exists, then handed to every
//! handler as `State<Arc<AppContext>>`. The squad list inside is written here
//! and only read afterwards; person data is never kept.

use std::sync::Arc;

use squadpage_core::api::Result;
use squadpage_core::{DirectoryApi, Snapshot, Squad};
use tracing::info;

pub struct AppContext {
    pub api: Arc<dyn DirectoryApi>,
    pub cohort: String,
    pub tribe: String,
    pub squads: Arc<Snapshot<Vec<Squad>>>,
}

impl AppContext {
    /// Fetch the squad list once and build the context around it.
    pub async fn bootstrap(
        api: Arc<dyn DirectoryApi>,
        cohort: impl Into<String>,
        tribe: impl Into<String>,
    ) -> Result<Self> {
        let cohort = cohort.into();
        let tribe = tribe.into();

        let squads = api.get_squads(&cohort, &tribe).await?;
        info!(count = squads.len(), cohort = %cohort, tribe = %tribe, "Loaded squad snapshot");

        Ok(Self {
            api,
            cohort,
            tribe,
            squads: Arc::new(Snapshot::new(squads)),
        })
    }
}
