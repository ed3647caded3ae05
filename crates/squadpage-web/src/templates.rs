//! Askama page templates.
//!
//! Templates live in `templates/` and borrow from the request context, so
//! handlers render them before returning.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use squadpage_core::{Person, Squad};
use tracing::error;

/// Renders an askama template into an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                error!(error = %e, "Failed to render template");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}

/// Listing of all squads and students.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub cohort: &'a str,
    pub tribe: &'a str,
    pub persons: &'a [Person],
    pub squads: &'a [Squad],
    pub squads_age: String,
}

/// Detail page for one student. `person` is `None` when the id is unknown.
#[derive(Template)]
#[template(path = "student.html")]
pub struct StudentTemplate<'a> {
    pub cohort: &'a str,
    pub tribe: &'a str,
    pub id: &'a str,
    pub person: Option<Person>,
    pub squads: &'a [Squad],
    pub squads_age: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub cohort: &'a str,
    pub tribe: &'a str,
    pub status: u16,
    pub message: &'a str,
}
