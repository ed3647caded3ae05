use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use squadpage_core::ApiError;
use tracing::{error, warn};

use crate::templates::{ErrorTemplate, HtmlTemplate};

/// Request failure carrying what the error page needs.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: &'static str,
    pub cohort: String,
    pub tribe: String,
}

impl PageError {
    /// Map a Directory API failure to a page error, logging the cause.
    pub fn upstream(err: ApiError, cohort: &str, tribe: &str) -> Self {
        if err.is_upstream_failure() {
            error!(error = %err, "Directory API request failed");
        } else {
            warn!(error = %err, "Directory API record missing");
        }

        let (status, message) = match err {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Deze pagina bestaat niet."),
            ApiError::Malformed(_) => (
                StatusCode::BAD_GATEWAY,
                "De directory gaf een onverwacht antwoord.",
            ),
            ApiError::Unavailable(_) | ApiError::Status { .. } | ApiError::InvalidUrl(_) => (
                StatusCode::BAD_GATEWAY,
                "De directory is op dit moment niet bereikbaar.",
            ),
        };

        Self {
            status,
            message,
            cohort: cohort.to_string(),
            tribe: tribe.to_string(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let page = HtmlTemplate(ErrorTemplate {
            cohort: &self.cohort,
            tribe: &self.tribe,
            status: self.status.as_u16(),
            message: self.message,
        });
        (self.status, page).into_response()
    }
}
