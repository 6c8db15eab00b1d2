use super::BakedGood;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A bakery row; `baked_goods` is filled by the store after the row is read.
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub baked_goods: Vec<BakedGood>,
}

/// Validated PATCH payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeryNameUpdate {
    pub name: String,
}
