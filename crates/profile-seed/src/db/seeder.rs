//! Schema and record writes for the profile table.

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::profile::{ProfileEntry, ProfileRecord};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database not reachable after {attempts} attempts")]
    ConnectTimeout { attempts: u32 },
    #[error("Unknown seed strategy {0:?} (expected \"insert-once\" or \"upsert\")")]
    InvalidStrategy(String),
}

/// Database seeder for the canonical profile record.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the profile table if it does not exist yet.
    ///
    /// The unique constraint on `key` is what makes the upsert strategy
    /// idempotent. Insert-once records leave `key` NULL and are not guarded;
    /// PostgreSQL allows any number of NULLs under a unique column.
    pub async fn ensure_schema(&self) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS profile (
                id         UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                key        TEXT UNIQUE,
                value      TEXT,
                name       TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Ensured profile table exists");
        Ok(())
    }

    /// Inserts a named profile record unconditionally (insert-once strategy).
    ///
    /// Running this twice produces two records; it relies on being run only
    /// on first container creation.
    pub async fn insert_profile(&self, name: &str) -> Result<ProfileRecord, SeedError> {
        let record: ProfileRecord = sqlx::query_as(
            r#"
            INSERT INTO profile (name, created_at, updated_at)
            VALUES ($1, NOW(), NOW())
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted profile record for {name:?}");
        Ok(record)
    }

    /// Writes the value for a lookup key (upsert strategy).
    ///
    /// Idempotent: running this any number of times leaves exactly one
    /// record for `key`, carrying the most recently written value.
    pub async fn upsert_value(&self, key: &str, value: &str) -> Result<ProfileEntry, SeedError> {
        let entry: ProfileEntry = sqlx::query_as(
            r#"
            INSERT INTO profile (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING id, key, value, created_at, updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        info!("Upserted profile value {value:?} under key {key:?}");
        Ok(entry)
    }

    /// Returns the stored value for a lookup key, if any.
    pub async fn fetch_value(&self, key: &str) -> Result<Option<String>, SeedError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM profile WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    /// Counts profile records.
    pub async fn profile_count(&self) -> Result<i64, SeedError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profile")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes all profile records.
    ///
    /// **WARNING**: This deletes all data from the table. The seeding
    /// strategies never delete; this exists for tests and manual resets.
    pub async fn clear_profile(&self) -> Result<u64, SeedError> {
        let result = sqlx::query("DELETE FROM profile")
            .execute(&self.pool)
            .await?;

        info!("Cleared {} profile records", result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
