//! SQLite database connector and utilities
//!
//! Provides connection management and migration running for the
//! single-file store.

mod config;
mod connector;

pub use config::SqliteConfig;
pub use connector::{connect, connect_from_config, connect_with_options, run_migrations};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
