//! HTTP error mapping.
//!
//! Store and validation failures come back as a flat text body with
//! 400 Bad Request; only internal faults (a panicked blocking task) are 500.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use teambynumbers_core::error::{ClientCode, TbnError};

#[derive(Debug)]
pub struct ApiError(pub TbnError);

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(TbnError::BadRequest(msg.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ClientCode::BadRequest | ClientCode::ValidationFailed | ClientCode::Storage => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.to_string(),
        )
            .into_response()
    }
}

impl From<TbnError> for ApiError {
    fn from(err: TbnError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self {
        Self::bad_request(rej.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rej: FormRejection) -> Self {
        Self::bad_request(rej.body_text())
    }
}
