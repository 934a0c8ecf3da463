use tower_http::cors::CorsLayer;

/// Permissive CORS: any origin, any method, any header.
///
/// The storefront is served from a separate host, so the API accepts
/// cross-origin requests unconditionally. There is no cookie or token
/// auth to protect, which is what makes this acceptable.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
