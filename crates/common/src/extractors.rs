//! Custom axum extractors for Folio

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// JSON extractor whose rejection is rendered through the response envelope.
///
/// Replaces `Json<T>` in handlers so that a malformed body produces
/// `{success: false, message}` with status 400 instead of axum's plain-text
/// rejection. No schema validation happens beyond deserialization.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;
        Ok(JsonBody(value))
    }
}
