use axum::{routing::get, Json, Router};

use domain_catalog::{CatalogService, ImgbbClient, SqliteCatalogRepository};
use domain_orders::{OrderService, SqliteOrderRepository};

/// Builds the application routes.
///
/// Paths follow the storefront contract verbatim, so domain routers are
/// merged at the root instead of nested under a prefix. Returns a
/// stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    let catalog_repository = SqliteCatalogRepository::new(state.db.clone());
    let uploader = ImgbbClient::new(&state.config.imgbb);
    let catalog = CatalogService::new(catalog_repository, uploader);

    let order_repository = SqliteOrderRepository::new(state.db.clone());
    let orders = OrderService::new(order_repository);

    Router::new()
        .merge(domain_catalog::handlers::router(catalog))
        .merge(domain_orders::handlers::router(orders))
        .route("/api-docs/openapi.json", get(serve_openapi))
        .fallback(axum_helpers::errors::not_found)
}

/// Serve the merged OpenAPI document
async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::merged())
}
