//! Bakery handlers: list, lookup, rename.

use crate::error::AppError;
use crate::extractors::{BakeryId, FormOrEmpty};
use crate::response;
use crate::service::{BakeryForm, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bakeries = state.store.list_bakeries().await?;
    Ok(response::ok(bakeries))
}

pub async fn read(State(state): State<AppState>, BakeryId(id): BakeryId) -> Result<impl IntoResponse, AppError> {
    let bakery = state
        .store
        .bakery(id)
        .await?
        .ok_or_else(AppError::bakery_not_found)?;
    Ok(response::ok(bakery))
}

/// The bakery must exist before the form is looked at, so a missing bakery wins over a missing name.
pub async fn update(
    State(state): State<AppState>,
    BakeryId(id): BakeryId,
    FormOrEmpty(form): FormOrEmpty<BakeryForm>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.bakery_exists(id).await? {
        return Err(AppError::bakery_not_found());
    }
    let update = RequestValidator::bakery_name(form)?;
    let bakery = state
        .store
        .update_bakery_name(id, &update.name)
        .await?
        .ok_or_else(AppError::bakery_not_found)?;
    tracing::info!(id, name = %bakery.name, "bakery renamed");
    Ok(response::ok(bakery))
}
