//! Database integration for seeding the profile record.
//!
//! [`connect_with_retry`] establishes a pool against a possibly
//! still-starting database server; the [`Seeder`] performs the schema and
//! record writes.

mod connect;
mod seeder;

pub use connect::connect_with_retry;
pub use seeder::{SeedError, Seeder};
