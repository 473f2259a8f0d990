use axum::response::IntoResponse;
use axum::Json;
use core_store::StoreError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

pub type SalesResult<T> = Result<T, SalesAPIError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SalesAPIError {
    #[snafu(display("Malformed integer parameter {param}: {value}"))]
    MalformedInteger { param: &'static str, value: String },

    #[snafu(transparent)]
    Store { source: StoreError },
}

pub(crate) trait IntoStatusCode {
    fn status_code(&self) -> StatusCode;
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
}

// Select which status code to return.
impl IntoStatusCode for SalesAPIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedInteger { .. } => StatusCode::BAD_REQUEST,
            Self::Store { source } => match source {
                StoreError::SourceUnavailable { .. }
                | StoreError::RelationalUnavailable { .. }
                | StoreError::SpreadsheetRead { .. }
                | StoreError::EmptyWorkbook { .. }
                | StoreError::CsvRead { .. }
                | StoreError::SpreadsheetRewrite { .. }
                | StoreError::Sqlite { .. }
                | StoreError::Join { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for SalesAPIError {
    fn into_response(self) -> axum::response::Response {
        let code = self.status_code();
        let error = ErrorResponse {
            message: self.to_string(),
            status_code: code.as_u16(),
        };
        (code, Json(error)).into_response()
    }
}
