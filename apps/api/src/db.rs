use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

/// Connects to the interview store and returns the shared pool.
///
/// Every query in this service is a short single-statement round trip
/// (session lookups, answer appends, the one completion update), so the
/// pool stays small; `max_connections` comes from configuration. A
/// bounded acquire timeout keeps an exhausted pool from stalling an
/// answer submission indefinitely.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to interview store (pool size {max_connections})...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("Failed to connect to the interview store")?;

    info!("Interview store pool ready");
    Ok(pool)
}
