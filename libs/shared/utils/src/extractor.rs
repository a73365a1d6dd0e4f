use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use shared_models::{AppError, ModelState};

/// JSON body extractor that lets the handler decide what a missing body means.
///
/// An empty body or a literal `null` yields `OptionalJson(None)`; malformed
/// JSON or a body of the wrong shape is rejected with `400` and the parser
/// message in the error collection. Unlike `axum::Json`, no content type is
/// required.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(ModelState::with_error("", e.body_text())))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJson(None));
        }

        serde_json::from_slice::<Option<T>>(&bytes)
            .map(OptionalJson)
            .map_err(|e| {
                debug!("Rejecting request body: {}", e);
                AppError::BadRequest(ModelState::with_error("$", e.to_string()))
            })
    }
}
