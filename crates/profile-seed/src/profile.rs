//! The canonical profile record model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Table holding the profile records.
pub const PROFILE_TABLE: &str = "profile";

/// Lookup key of the canonical upsert record.
pub const PROFILE_KEY: &str = "name";

/// Display name seeded when none is configured.
pub const DEFAULT_PROFILE_NAME: &str = "Frank Koch";

/// Record written by the insert-once strategy: a display name plus
/// database-assigned timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Record maintained by the upsert strategy, addressed by its lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileEntry {
    pub id: Uuid,
    pub key: String,
    pub value: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
