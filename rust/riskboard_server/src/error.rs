use axum::Json;
use axum::http::StatusCode;
use axum::response::{
    IntoResponse,
    Response,
};
use riskboard::RiskboardError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to load risk data: {0}")]
    DataLoad(#[from] RiskboardError),

    #[error("Unknown banking solution '{solution}'")]
    UnknownSolution { solution: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// API errors use the same envelope as successful responses, so the client
/// has one shape to parse.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::UnknownSolution { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "status": "error",
            "data": self.to_string(),
        }));
        (status, body).into_response()
    }
}
