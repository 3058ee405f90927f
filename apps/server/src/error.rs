use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Duration;
use stockview_core::Error as CoreError;
use thiserror::Error;

/// Failures of the relay routes.
///
/// Clients only ever see the generic message; the cause is logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to fetch stock data")]
    StockData(#[source] CoreError),
    #[error("Failed to fetch stock details")]
    StockDetails(#[source] CoreError),
    #[error("Request timed out")]
    Timeout(Duration),
    #[error("Request failed")]
    Middleware(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::StockData(e) | ApiError::StockDetails(e) => {
                tracing::error!(error = %e, "{}", self)
            }
            ApiError::Timeout(limit) => tracing::error!("{} after {:?}", self, limit),
            ApiError::Middleware(e) => tracing::error!(error = %e, "{}", self),
        }

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
