use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated POST payload. `price` is finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}
