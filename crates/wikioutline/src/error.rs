use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use wikioutline_core::outline::OutlineError;

/// Everything that can stop an outline request. Each variant maps to one
/// HTTP status and a short `detail` message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Error {
    /// Upstream answered with anything but 200, or never answered.
    #[error("Wikipedia page not found")]
    NotFound,

    #[error("Could not find page title")]
    MissingTitle,

    #[error("Could not find content on page")]
    MissingContent,

    #[error("Missing required query parameter: {0}")]
    MissingParameter(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::MissingTitle | Error::MissingContent => StatusCode::INTERNAL_SERVER_ERROR,
            Error::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<OutlineError> for Error {
    fn from(err: OutlineError) -> Self {
        match err {
            OutlineError::MissingTitle => Error::MissingTitle,
            OutlineError::MissingContent => Error::MissingContent,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
