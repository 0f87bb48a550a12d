use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::Span;
use crate::error::AppError;

/// `{experience_id}` path segment, recorded on the request span.
pub struct ExperienceId(pub i64);

impl<S> FromRequestParts<S> for ExperienceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(experience_id) = Path::<i64>::from_request_parts(parts, state).await?;
        Span::current().record("experience_id", experience_id);
        Ok(ExperienceId(experience_id))
    }
}
