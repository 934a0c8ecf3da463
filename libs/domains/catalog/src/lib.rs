//! Catalog Domain
//!
//! Product catalog with ImgBB-hosted imagery and a likes/trending
//! counter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (multipart + JSON)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, upload orchestration
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼───┐ ┌─▼────────┐
//! │ Repo │ │ Uploader │  ← SQLite store / ImgBB client
//! └──┬───┘ └──────────┘
//!    │
//! ┌──▼──────────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     service::CatalogService,
//!     sqlite::SqliteCatalogRepository,
//!     upload::ImgbbClient,
//! };
//! use core_config::imgbb::ImgbbConfig;
//!
//! # async fn example(db: sea_orm::DatabaseConnection) {
//! let repository = SqliteCatalogRepository::new(db);
//! let uploader = ImgbbClient::new(&ImgbbConfig::new("key"));
//! let service = CatalogService::new(repository, uploader);
//!
//! let router = handlers::router(service);
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;
pub mod upload;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{ImagePart, NewProduct, Product, ProductForm, ProductPatch, TrendingProduct};
pub use repository::CatalogRepository;
pub use service::CatalogService;
pub use sqlite::SqliteCatalogRepository;
pub use upload::{ImageUploader, ImgbbClient, UploadError, UploadedImage};
