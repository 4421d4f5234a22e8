use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::AnalysisError;
use tracing::error;

/// Turns pipeline failures into `{ "detail": ... }` bodies.
#[derive(Debug)]
pub struct ApiError(pub AnalysisError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AnalysisError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::EmptyResult(_) => StatusCode::NOT_FOUND,
            AnalysisError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AnalysisError::Annotation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.0.to_string();
        error!("An error occurred ({}): {}", status.as_u16(), detail);
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
