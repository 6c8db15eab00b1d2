//! Bakery and baked good routes.
//! GET /bakeries/:id is registered once, with the not-found guard.

use crate::handlers::{baked_good, bakery, home::home};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn bakery_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/bakeries", get(bakery::list))
        .route("/bakeries/:id", get(bakery::read).patch(bakery::update))
        .route("/baked_goods", post(baked_good::create))
        .route("/baked_goods/by_price", get(baked_good::by_price))
        .route("/baked_goods/most_expensive", get(baked_good::most_expensive))
        .route("/baked_goods/:id", delete(baked_good::delete))
        .with_state(state)
}
