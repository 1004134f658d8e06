use crate::error::HabitzError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[must_use]
pub fn error_status(err: &HabitzError) -> StatusCode {
    match err {
        HabitzError::Validation(_) => StatusCode::BAD_REQUEST,
        HabitzError::HabitNotFound(_) => StatusCode::NOT_FOUND,
        HabitzError::Io(_)
        | HabitzError::Serialization(_)
        | HabitzError::Store(_)
        | HabitzError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for HabitzError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        let message = match &self {
            HabitzError::HabitNotFound(_) => "Habit not found".to_string(),
            HabitzError::Validation(msg) => msg.clone(),
            other => {
                error!(error = %other, "request failed on storage");
                "Could not access habit storage".to_string()
            }
        };
        (status, Json(MessageBody::new(message))).into_response()
    }
}
