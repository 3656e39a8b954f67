//! One-shot init job: seeds the canonical profile record.
//!
//! Run with:
//! ```
//! cargo run -p profile-seed --bin seed
//! ```

use profile_seed::config::{SeedConfig, SeedStrategy};
use profile_seed::db::{Seeder, connect_with_retry};
use profile_seed::profile::{PROFILE_KEY, PROFILE_TABLE};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;

    let pool = connect_with_retry(&config.database_url, &config.connect).await?;
    tracing::info!("Connected to database");

    let seeder = Seeder::new(pool);
    seeder.ensure_schema().await?;

    let seeded = match config.strategy {
        SeedStrategy::InsertOnce => {
            let record = seeder.insert_profile(&config.profile_name).await?;
            serde_json::json!({ "name": record.name })
        }
        SeedStrategy::Upsert => {
            let entry = seeder
                .upsert_value(PROFILE_KEY, &config.profile_name)
                .await?;
            serde_json::json!({ "key": entry.key, "value": entry.value })
        }
    };

    let count = seeder.profile_count().await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Strategy: {}", config.strategy.as_str());
    tracing::info!("  Table: {PROFILE_TABLE}");
    tracing::info!("  Record: {seeded}");
    tracing::info!("  Record count: {count}");

    Ok(())
}
