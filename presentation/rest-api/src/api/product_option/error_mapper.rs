use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product_option::errors::ProductOptionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductOptionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductOptionError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product_option.validation".to_string(),
            ),
            ProductOptionError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("Product option: {id} does not exist"),
            ),
            ProductOptionError::ProductNotFound(id) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("Product: {id} does not exist"),
            ),
            ProductOptionError::Repository(_) => (
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
