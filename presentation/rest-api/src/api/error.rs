use std::collections::BTreeMap;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Body shape for create-validation failures: field name to the list of
/// messages for that field, e.g. `{"Name": ["The Name field is required."]}`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
