//! Persistence access: the `BakeryStore` repository and its SQLite implementation.

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::model::{BakedGood, Bakery, NewBakedGood, PriceOrder};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

/// Repository over bakeries and baked goods. Every mutation is committed before it returns.
#[async_trait]
pub trait BakeryStore: Send + Sync {
    /// Round-trip to the database; used by readiness.
    async fn ping(&self) -> Result<(), AppError>;

    /// All bakeries ordered by id, each with its baked goods.
    async fn list_bakeries(&self) -> Result<Vec<Bakery>, AppError>;

    async fn bakery(&self, id: i64) -> Result<Option<Bakery>, AppError>;

    async fn bakery_exists(&self, id: i64) -> Result<bool, AppError>;

    async fn insert_bakery(&self, name: &str) -> Result<Bakery, AppError>;

    /// Rename a bakery. `None` when no bakery has this id.
    async fn update_bakery_name(&self, id: i64, name: &str) -> Result<Option<Bakery>, AppError>;

    /// All baked goods ordered by price; equal prices keep id order.
    async fn baked_goods_by_price(&self, order: PriceOrder) -> Result<Vec<BakedGood>, AppError>;

    async fn most_expensive_baked_good(&self) -> Result<Option<BakedGood>, AppError>;

    async fn insert_baked_good(&self, new: &NewBakedGood) -> Result<BakedGood, AppError>;

    /// Returns whether a row was removed.
    async fn delete_baked_good(&self, id: i64) -> Result<bool, AppError>;
}

/// Open a pool for `config.database_url`, creating the database file if missing.
/// Foreign keys are enforced on every connection.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

const BAKERY_COLUMNS: &str = "id, name, created_at, updated_at";
const BAKED_GOOD_COLUMNS: &str = "id, name, price, bakery_id, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn goods_of(&self, bakery_id: i64) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!("SELECT {} FROM baked_goods WHERE bakery_id = ? ORDER BY id", BAKED_GOOD_COLUMNS);
        tracing::debug!(sql = %sql, bakery_id, "query");
        let goods = sqlx::query_as::<_, BakedGood>(&sql)
            .bind(bakery_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(goods)
    }

    async fn with_goods(&self, bakery: Option<Bakery>) -> Result<Option<Bakery>, AppError> {
        match bakery {
            Some(mut b) => {
                b.baked_goods = self.goods_of(b.id).await?;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl BakeryStore for SqliteStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_bakeries(&self) -> Result<Vec<Bakery>, AppError> {
        let sql = format!("SELECT {} FROM bakeries ORDER BY id", BAKERY_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let mut bakeries = sqlx::query_as::<_, Bakery>(&sql).fetch_all(&self.pool).await?;

        let sql = format!("SELECT {} FROM baked_goods ORDER BY id", BAKED_GOOD_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let goods = sqlx::query_as::<_, BakedGood>(&sql).fetch_all(&self.pool).await?;
        let mut by_bakery: HashMap<i64, Vec<BakedGood>> = goods.into_iter().fold(HashMap::new(), |mut m, g| {
            m.entry(g.bakery_id).or_default().push(g);
            m
        });
        for b in &mut bakeries {
            b.baked_goods = by_bakery.remove(&b.id).unwrap_or_default();
        }
        Ok(bakeries)
    }

    async fn bakery(&self, id: i64) -> Result<Option<Bakery>, AppError> {
        let sql = format!("SELECT {} FROM bakeries WHERE id = ?", BAKERY_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let bakery = sqlx::query_as::<_, Bakery>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        self.with_goods(bakery).await
    }

    async fn bakery_exists(&self, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM bakeries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn insert_bakery(&self, name: &str) -> Result<Bakery, AppError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO bakeries (name, created_at, updated_at) VALUES (?, ?, ?) RETURNING {}",
            BAKERY_COLUMNS
        );
        tracing::debug!(sql = %sql, name, "query");
        let bakery = sqlx::query_as::<_, Bakery>(&sql)
            .bind(name)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(bakery)
    }

    async fn update_bakery_name(&self, id: i64, name: &str) -> Result<Option<Bakery>, AppError> {
        let sql = format!(
            "UPDATE bakeries SET name = ?, updated_at = ? WHERE id = ? RETURNING {}",
            BAKERY_COLUMNS
        );
        tracing::debug!(sql = %sql, id, name, "query");
        let bakery = sqlx::query_as::<_, Bakery>(&sql)
            .bind(name)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        self.with_goods(bakery).await
    }

    async fn baked_goods_by_price(&self, order: PriceOrder) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!(
            "SELECT {} FROM baked_goods ORDER BY price {}, id ASC",
            BAKED_GOOD_COLUMNS,
            order.as_sql()
        );
        tracing::debug!(sql = %sql, "query");
        let goods = sqlx::query_as::<_, BakedGood>(&sql).fetch_all(&self.pool).await?;
        Ok(goods)
    }

    async fn most_expensive_baked_good(&self) -> Result<Option<BakedGood>, AppError> {
        let sql = format!(
            "SELECT {} FROM baked_goods ORDER BY price {}, id ASC LIMIT 1",
            BAKED_GOOD_COLUMNS,
            PriceOrder::Descending.as_sql()
        );
        tracing::debug!(sql = %sql, "query");
        let good = sqlx::query_as::<_, BakedGood>(&sql).fetch_optional(&self.pool).await?;
        Ok(good)
    }

    async fn insert_baked_good(&self, new: &NewBakedGood) -> Result<BakedGood, AppError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO baked_goods (name, price, bakery_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING {}",
            BAKED_GOOD_COLUMNS
        );
        tracing::debug!(sql = %sql, params = ?new, "query");
        let good = sqlx::query_as::<_, BakedGood>(&sql)
            .bind(&new.name)
            .bind(new.price)
            .bind(new.bakery_id)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(good)
    }

    async fn delete_baked_good(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete baked good");
        let result = sqlx::query("DELETE FROM baked_goods WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
