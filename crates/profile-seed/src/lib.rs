//! Database initialization for the FK webstack.
//!
//! This crate seeds the `profile` table with the canonical profile record at
//! container startup. It is meant to run as a one-shot init job: connect,
//! ensure the table exists, write one record, report, exit. Two strategies
//! are supported: an unguarded insert for first-boot-only jobs, and an
//! idempotent upsert keyed on a unique lookup column.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use profile_seed::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let pool = connect_with_retry(&config.database_url, &config.connect).await?;
//!
//! let seeder = Seeder::new(pool);
//! seeder.ensure_schema().await?;
//! seeder.upsert_value(PROFILE_KEY, &config.profile_name).await?;
//! ```

pub mod config;
pub mod db;
pub mod profile;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConnectConfig, SeedConfig, SeedStrategy};
    pub use crate::db::{SeedError, Seeder, connect_with_retry};
    pub use crate::profile::{
        DEFAULT_PROFILE_NAME, PROFILE_KEY, PROFILE_TABLE, ProfileEntry, ProfileRecord,
    };
}
