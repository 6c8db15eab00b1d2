//! Bakery API: form-driven REST endpoints over bakeries and their baked goods.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use model::{BakedGood, Bakery, NewBakedGood, PriceOrder};
pub use routes::{app, bakery_routes, common_routes};
pub use state::AppState;
pub use store::{connect, BakeryStore, SqliteStore};

/// Install the fmt subscriber; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bakery_api=info,tower_http=info")),
        )
        .init();
}
