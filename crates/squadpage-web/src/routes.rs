//! HTTP routes.
//!
//! | Method | Path           | Response                      |
//! |--------|----------------|-------------------------------|
//! | GET    | `/`            | squad and student listing     |
//! | POST   | `/`            | 303 redirect back to `/`      |
//! | GET    | `/student/:id` | student detail (or not found) |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::context::AppContext;
use crate::error::PageError;
use crate::templates::{HtmlTemplate, IndexTemplate, StudentTemplate};

pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/student/:id", get(student))
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
}

async fn index(State(ctx): State<Arc<AppContext>>) -> Result<Response, PageError> {
    let persons = ctx
        .api
        .get_persons(&ctx.tribe, &ctx.cohort)
        .await
        .map_err(|e| PageError::upstream(e, &ctx.cohort, &ctx.tribe))?;

    let page = IndexTemplate {
        cohort: &ctx.cohort,
        tribe: &ctx.tribe,
        persons: &persons,
        squads: &ctx.squads.data,
        squads_age: ctx.squads.age_display(),
    };
    Ok(HtmlTemplate(page).into_response())
}

/// Form posts change nothing; send the browser back to the listing.
async fn submit() -> Redirect {
    Redirect::to("/")
}

async fn student(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let person = ctx
        .api
        .get_person_by_id(&id)
        .await
        .map_err(|e| PageError::upstream(e, &ctx.cohort, &ctx.tribe))?;

    if person.is_none() {
        debug!(id = %id, "Unknown student id");
    }

    let page = StudentTemplate {
        cohort: &ctx.cohort,
        tribe: &ctx.tribe,
        id: &id,
        person,
        squads: &ctx.squads.data,
        squads_age: ctx.squads.age_display(),
    };
    Ok(HtmlTemplate(page).into_response())
}
