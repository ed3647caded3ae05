//! Directus query parameters for the collections the site reads.
//!
//! Filters are JSON documents passed as the `filter` query parameter; the
//! HTTP client takes care of URL-encoding them.

use serde_json::{json, Value};

/// Field selection for the person listing: every person field plus the name
/// and cohort of each linked squad.
pub const PERSON_LIST_FIELDS: &str = "*,squads.squad_id.name,squads.squad_id.cohort";

/// Sort key for the person listing.
pub const PERSON_LIST_SORT: &str = "name";

/// `cohort == cohort AND tribe.name == tribe`
pub fn squad_filter(cohort: &str, tribe: &str) -> Value {
    json!({
        "_and": [
            { "cohort": cohort },
            { "tribe": { "name": tribe } }
        ]
    })
}

/// `squads.squad_id.tribe.name == tribe AND squads.squad_id.cohort == cohort`
pub fn person_filter(tribe: &str, cohort: &str) -> Value {
    json!({
        "_and": [
            { "squads": { "squad_id": { "tribe": { "name": tribe } } } },
            { "squads": { "squad_id": { "cohort": cohort } } }
        ]
    })
}

/// Query string pairs for the squad collection.
pub fn squads_query(cohort: &str, tribe: &str) -> Vec<(&'static str, String)> {
    vec![("filter", squad_filter(cohort, tribe).to_string())]
}

/// Query string pairs for the person collection.
pub fn persons_query(tribe: &str, cohort: &str) -> Vec<(&'static str, String)> {
    vec![
        ("sort", PERSON_LIST_SORT.to_string()),
        ("fields", PERSON_LIST_FIELDS.to_string()),
        ("filter", person_filter(tribe, cohort).to_string()),
    ]
}
