// Request extractors that turn framework rejections into JSON `AppError`s

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};

use crate::error::AppError;
use crate::models::{ReviewFields, ReviewRequest};

/// A review body that parsed as JSON and carries every required field.
///
/// Malformed JSON, a missing `Content-Type: application/json`, wrong field
/// types and absent fields all reject with `AppError::Validation` (400).
#[derive(Debug)]
pub struct ValidReview(pub ReviewFields);

impl<S> FromRequest<S> for ValidReview
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ReviewRequest>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(Self(payload.validate()?))
    }
}

/// The `{id}` path segment of `/reviews/{id}`.
///
/// A segment that is not an integer does not name any review, so it
/// rejects with 404 rather than 400.
#[derive(Debug, Clone, Copy)]
pub struct ReviewId(pub i64);

impl<S> FromRequestParts<S> for ReviewId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Resource not found".to_string()))?;

        Ok(Self(id))
    }
}
