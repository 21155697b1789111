use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error as ThisError;

use crate::api::ErrorResponse;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Upstream credential missing from the service configuration
    #[error("AI_GATEWAY_API_KEY is not configured")]
    Configuration,

    /// Request body could not be decoded into a generation request.
    /// Answered like every other unexpected failure, with a 500.
    #[error("{message}")]
    InvalidRequest { message: String },

    /// Upstream answered 429
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Upstream answered 402
    #[error("Payment required")]
    PaymentRequired,

    /// Any other upstream failure, including transport errors
    #[error("AI gateway error")]
    Upstream { status: Option<u16>, body: String },

    #[error("No content from AI")]
    NoContent,

    /// Assistant content was not JSON after fence stripping
    #[error("AI response is not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Error::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            Error::Configuration
            | Error::InvalidRequest { .. }
            | Error::Upstream { .. }
            | Error::NoContent
            | Error::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short message a study-set UI shows for this failure.
    ///
    /// Only rate limiting and exhausted credits get their own wording, everything else is a
    /// generic "try again".
    pub fn notice(&self) -> &'static str {
        match self {
            Error::RateLimited => "Too many requests, try again in a few seconds",
            Error::PaymentRequired => "AI credits exhausted, add credits in the workspace settings",
            _ => "Generation failed, please try again",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let notice = self.notice();
        match &self {
            Error::Upstream { status, body } => {
                tracing::error!(?status, %body, notice, "AI gateway error");
            }
            Error::Configuration | Error::NoContent | Error::MalformedResponse(_) => {
                tracing::error!(notice, "generate-study-content error: {self}");
            }
            Error::RateLimited | Error::PaymentRequired => {
                tracing::warn!(notice, "Upstream quota error: {self}");
            }
            Error::InvalidRequest { .. } => {
                tracing::warn!(notice, "Unreadable request body: {self}");
            }
        }

        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
