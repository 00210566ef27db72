use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            // Routes turn validation failures into a field map before this
            // mapper runs; this arm only backstops a missed case.
            ProductError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.validation".to_string(),
            ),
            ProductError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("Product: {id} does not exist"),
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
