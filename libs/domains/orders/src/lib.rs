//! Orders Domain
//!
//! Checkout endpoint and order listing. Orders are written once and
//! never updated; the cart payload is stored as opaque JSON text.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{Order, OrderPlacedResponse, PlaceOrder};
pub use repository::OrderRepository;
pub use service::OrderService;
pub use sqlite::SqliteOrderRepository;
