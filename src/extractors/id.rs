//! Integer path ids. A segment that does not parse as `i64` names no row,
//! so it is rejected with the entity's not-found error.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// `:id` of `/bakeries/:id`.
#[derive(Clone, Copy, Debug)]
pub struct BakeryId(pub i64);

/// `:id` of `/baked_goods/:id`.
#[derive(Clone, Copy, Debug)]
pub struct BakedGoodId(pub i64);

async fn path_id<S>(parts: &mut Parts, state: &S) -> Option<i64>
where
    S: Send + Sync,
{
    match Path::<i64>::from_request_parts(parts, state).await {
        Ok(Path(id)) => Some(id),
        Err(rejection) => {
            tracing::debug!(uri = %parts.uri, reason = %rejection.body_text(), "unparseable id");
            None
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BakeryId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        path_id(parts, state)
            .await
            .map(BakeryId)
            .ok_or_else(AppError::bakery_not_found)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BakedGoodId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        path_id(parts, state)
            .await
            .map(BakedGoodId)
            .ok_or_else(AppError::baked_good_not_found)
    }
}
