use crate::application::{ApplicationResult, error::ApplicationError, validation::FieldErrors};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ErrorPayload,
}

/// Not-found responses carry no body; validation failures carry the raw
/// field→messages map; everything else uses the `ErrorResponse` envelope.
#[derive(Debug)]
enum ErrorPayload {
    Empty,
    Fields(FieldErrors),
    Message(String),
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => {
                Self::new(StatusCode::BAD_REQUEST, ErrorPayload::Fields(errors))
            }
            ApplicationError::NotFound(_) => Self::not_found(),
            ApplicationError::Infrastructure(cause) => Self::internal(&cause),
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::NotFound(_) => Self::not_found(),
                DomainError::Validation(msg) => {
                    Self::new(StatusCode::BAD_REQUEST, ErrorPayload::Message(msg))
                }
                DomainError::Persistence(cause) => Self::internal(&cause),
            },
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    const fn new(status: StatusCode, body: ErrorPayload) -> Self {
        Self { status, body }
    }

    const fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorPayload::Empty)
    }

    /// Store failures surface as a generic 500; the cause stays in the logs.
    fn internal(cause: &str) -> Self {
        tracing::error!(error = %cause, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorPayload::Message("internal error".into()),
        )
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.body {
            ErrorPayload::Empty => self.status.into_response(),
            ErrorPayload::Fields(fields) => (self.status, Json(fields)).into_response(),
            ErrorPayload::Message(message) => {
                let payload = ErrorResponse {
                    error: self
                        .status
                        .canonical_reason()
                        .unwrap_or("error")
                        .to_string(),
                    message,
                };
                (self.status, Json(payload)).into_response()
            }
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
