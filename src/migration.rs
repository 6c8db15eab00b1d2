//! Schema DDL for the bakery tables. Applied at startup; every statement is idempotent.

use crate::error::AppError;
use sqlx::SqlitePool;

/// `bakeries` 1 ── * `baked_goods` via `baked_goods.bakery_id`.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS bakeries (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

CREATE TABLE IF NOT EXISTS baked_goods (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    bakery_id INTEGER NOT NULL REFERENCES bakeries(id),
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_baked_goods_bakery_id ON baked_goods(bakery_id);
CREATE INDEX IF NOT EXISTS idx_baked_goods_price ON baked_goods(price);
"#;

/// Create the bakery tables and indexes if they do not exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for stmt in SCHEMA.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    tracing::debug!("schema ensured");
    Ok(())
}
