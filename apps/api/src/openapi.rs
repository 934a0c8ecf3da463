use utoipa::OpenApi;

/// Root OpenAPI document.
///
/// Domain routers use absolute paths from the storefront contract, so
/// their docs are merged rather than nested under a prefix.
#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Product catalog with ImgBB-hosted images, likes, and order placement"
    )
)]
pub struct ApiDoc;

/// The root document with all domain documents merged in
pub fn merged() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_catalog::handlers::ApiDoc::openapi());
    doc.merge(domain_orders::handlers::ApiDoc::openapi());
    doc
}
