use axum::{
    http::{HeaderName, StatusCode},
    Json,
};

pub mod extractor;
pub mod test_utils;
pub mod validation;

pub use extractor::OptionalJson;
pub use validation::{not_blank, state_code, validate_dto};

/// `201 Created` with a `Location` header pointing at the new resource.
pub type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);
