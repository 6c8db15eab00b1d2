//! Baked good handlers: price ordering, most expensive, create, delete.

use crate::error::AppError;
use crate::extractors::{BakedGoodId, FormOrEmpty};
use crate::model::PriceOrder;
use crate::response;
use crate::service::{BakedGoodForm, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub const DELETED_MESSAGE: &str = "Baked good deleted successfully";

pub async fn by_price(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let goods = state.store.baked_goods_by_price(PriceOrder::Ascending).await?;
    Ok(response::ok(goods))
}

pub async fn most_expensive(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let good = state
        .store
        .most_expensive_baked_good()
        .await?
        .ok_or_else(AppError::baked_good_not_found)?;
    Ok(response::ok(good))
}

pub async fn create(
    State(state): State<AppState>,
    FormOrEmpty(form): FormOrEmpty<BakedGoodForm>,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::new_baked_good(form)?;
    if !state.store.bakery_exists(new.bakery_id).await? {
        return Err(AppError::bakery_not_found());
    }
    let good = state.store.insert_baked_good(&new).await?;
    tracing::info!(id = good.id, bakery_id = good.bakery_id, "baked good created");
    Ok(response::created(good))
}

pub async fn delete(State(state): State<AppState>, BakedGoodId(id): BakedGoodId) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_baked_good(id).await? {
        return Err(AppError::baked_good_not_found());
    }
    tracing::info!(id, "baked good deleted");
    Ok(response::message(DELETED_MESSAGE))
}
