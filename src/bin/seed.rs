//! Populate the configured database with sample bakeries and baked goods.

use bakery_api::{connect, ensure_schema, init_tracing, seed::seed, ServerConfig, SqliteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config).await?;
    ensure_schema(&pool).await?;
    let report = seed(&SqliteStore::new(pool.clone())).await?;
    println!("seeded {} bakeries, {} baked goods", report.bakeries, report.baked_goods);
    pool.close().await;
    Ok(())
}
