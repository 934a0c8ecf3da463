//! Shared axum building blocks: standardized error responses, CORS
//! layers, and graceful shutdown.

pub mod errors;
pub mod middleware;
pub mod shutdown;

pub use errors::{AppError, ErrorResponse};
pub use middleware::cors::create_permissive_cors_layer;
pub use shutdown::shutdown_signal;
