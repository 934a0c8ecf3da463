//! Database library providing the SQLite connector and repository
//! utilities shared by the domain crates.
//!
//! # Examples
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect("sqlite://shop.db?mode=rwc").await?;
//! sqlite::run_migrations::<Migrator>(&db, "shop_api").await?;
//! ```

pub mod repository;
pub mod sqlite;

pub use repository::BaseRepository;
pub use sea_orm::{DatabaseConnection, DbErr};
