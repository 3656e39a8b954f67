//! Connection establishment with startup retry.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use super::seeder::SeedError;
use crate::config::ConnectConfig;

/// Connects to the database, retrying while the server is still starting.
///
/// Init jobs frequently race the database container. Each attempt builds a
/// pool and issues a liveness query; failed attempts are retried after
/// `retry_delay`, up to `max_attempts`.
pub async fn connect_with_retry(url: &str, config: &ConnectConfig) -> Result<PgPool, SeedError> {
    for attempt in 1..=config.max_attempts {
        match try_connect(url, config.max_connections).await {
            Ok(pool) => {
                info!(
                    "Database reachable (attempt {attempt}/{})",
                    config.max_attempts
                );
                return Ok(pool);
            }
            Err(e) => {
                warn!(
                    "Database not ready (attempt {attempt}/{}): {e}",
                    config.max_attempts
                );
                if attempt < config.max_attempts {
                    tokio::time::sleep(config.retry_delay).await;
                }
            }
        }
    }

    Err(SeedError::ConnectTimeout {
        attempts: config.max_attempts,
    })
}

/// Builds a pool and verifies liveness before handing it out.
async fn try_connect(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
