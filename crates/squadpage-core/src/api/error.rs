use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Directory API unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Directory API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid Directory API URL: {0}")]
    InvalidUrl(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            body: Self::truncate_body(body),
        }
    }

    /// Reinterpret a failure from a single-item endpoint. Directus answers 403
    /// rather than 404 for ids the public role cannot see, which includes ids
    /// that do not exist.
    pub fn for_single_item(self) -> Self {
        match self {
            ApiError::Status {
                status: 403 | 404,
                body,
            } => ApiError::NotFound(body),
            other => other,
        }
    }

    /// True for failures that come from the directory being unreachable or broken,
    /// as opposed to a missing record.
    pub fn is_upstream_failure(&self) -> bool {
        !matches!(self, ApiError::NotFound(_))
    }
}
