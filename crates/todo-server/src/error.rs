//! Mapping of store errors to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use todo_core::TodoError;

/// Error returned by handlers, rendered as `{"message": "..."}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(msg) => ApiError::bad_request(msg),
            TodoError::NotFound(_) => ApiError::not_found("todo not found"),
            TodoError::Persistence(e) => {
                tracing::error!(error = %e, "Failed to persist todos");
                ApiError::internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "message": self.message }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::PersistenceError;

    #[test]
    fn test_status_mapping() {
        let validation: ApiError = TodoError::Validation("title is required".into()).into();
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation.message, "title is required");

        let missing: ApiError = TodoError::NotFound(3).into();
        assert_eq!(missing.status, StatusCode::NOT_FOUND);

        let io: ApiError = TodoError::Persistence(PersistenceError::Io("disk full".into())).into();
        assert_eq!(io.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
