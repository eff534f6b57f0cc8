//! Extractors that deserialize a request part and run validation on it
//!
//! Handlers only ever see validated values; a rejected request is answered
//! before the handler runs.

use crate::error::ApiError;
use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use todo_core::Validate;

/// Query string deserialized as `T` and validated into `T::Output`
pub struct ValidatedQuery<T: Validate>(pub T::Output);

/// JSON body deserialized as `T` and validated into `T::Output`
pub struct ValidatedJson<T: Validate>(pub T::Output);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: Validate + DeserializeOwned + Send,
    T::Output: Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        raw.validate()
            .map(Self)
            .map_err(|e| ApiError::from(e).into_response())
    }
}

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Validate + DeserializeOwned + Send,
    T::Output: Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        raw.validate()
            .map(Self)
            .map_err(|e| ApiError::from(e).into_response())
    }
}
