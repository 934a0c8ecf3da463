//! HTTP handlers for the catalog API
//!
//! Route shapes follow the storefront contract, so they are flat and
//! mildly irregular (`/products`, `/api/categories/all`, `/like/{id}`)
//! rather than nested under a single prefix.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CategoriesResponse, ImagePart, LikeResponse, ListQuery, MessageResponse, Product,
    ProductForm, ProductResponse, TrendingProduct,
};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;
use crate::upload::ImageUploader;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        list_products,
        get_product,
        update_product,
        delete_product,
        get_by_category,
        list_categories,
        get_trending,
        like_product,
    ),
    components(schemas(
        Product,
        TrendingProduct,
        ProductResponse,
        MessageResponse,
        LikeResponse,
        CategoriesResponse
    )),
    tags(
        (name = "Catalog", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R, U>(service: CatalogService<R, U>) -> Router
where
    R: CatalogRepository + 'static,
    U: ImageUploader + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", post(create_product))
        .route("/api/products/offset-true", get(list_products))
        .route("/products/trending", get(get_trending))
        .route("/products/category/{name}", get(get_by_category))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/categories/all", get(list_categories))
        .route("/like/{id}", get(like_product))
        .with_state(shared_service)
}

/// Read a multipart request into a [`ProductForm`].
///
/// Parts with a filename are treated as files: `image` is the primary
/// image, `more_images` may repeat. Everything else is collected as a
/// text field.
async fn read_product_form(mut multipart: Multipart) -> CatalogResult<ProductForm> {
    let mut form = ProductForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CatalogError::Validation(format!("Malformed multipart request: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let is_file = field.file_name().is_some();
        match (name.as_str(), is_file) {
            ("image", true) => form.image = Some(read_image_part(field).await?),
            ("more_images", true) => form.more_images.push(read_image_part(field).await?),
            _ => {
                let value = field.text().await.map_err(|e| {
                    CatalogError::Validation(format!("Failed to read field '{}': {}", name, e))
                })?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

async fn read_image_part(field: axum::extract::multipart::Field<'_>) -> CatalogResult<ImagePart> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| CatalogError::Validation(format!("Failed to read image: {}", e)))?
        .to_vec();

    Ok(ImagePart {
        filename,
        content_type,
        data,
    })
}

/// Create a product from a multipart submission
#[utoipa::path(
    post,
    path = "/products",
    tag = "Catalog",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Image upload or database failure")
    )
)]
async fn create_product<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
    multipart: Multipart,
) -> CatalogResult<impl IntoResponse> {
    let form = read_product_form(multipart).await?;
    let product = service.create_product(form).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: "Product added successfully".to_string(),
            product,
        }),
    ))
}

/// List products, newest first
#[utoipa::path(
    get,
    path = "/api/products/offset-true",
    tag = "Catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "Window of products", body = Vec<Product>)
    )
)]
async fn list_products<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
    Query(query): Query<ListQuery>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.list_products(query.limit, query.offset).await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Unknown product")
    )
)]
async fn get_product<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Partially update a product from a multipart submission
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Unknown product")
    )
)]
async fn update_product<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> CatalogResult<Json<ProductResponse>> {
    let form = read_product_form(multipart).await?;
    let product = service.update_product(&id, form).await?;
    Ok(Json(ProductResponse {
        message: "Product updated successfully".to_string(),
        product,
    }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Unknown product")
    )
)]
async fn delete_product<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<MessageResponse>> {
    service.delete_product(&id).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}

/// Products within a category, matched case-insensitively
#[utoipa::path(
    get,
    path = "/products/category/{name}",
    tag = "Catalog",
    params(
        ("name" = String, Path, description = "Category name")
    ),
    responses(
        (status = 200, description = "Products in the category, possibly empty", body = Vec<Product>)
    )
)]
async fn get_by_category<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
    Path(name): Path<String>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.get_by_category(&name).await?;
    Ok(Json(products))
}

/// Distinct non-empty categories
#[utoipa::path(
    get,
    path = "/api/categories/all",
    tag = "Catalog",
    responses(
        (status = 200, description = "Category names", body = CategoriesResponse)
    )
)]
async fn list_categories<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
) -> CatalogResult<Json<CategoriesResponse>> {
    let categories = service.list_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}

/// Top products by likes
#[utoipa::path(
    get,
    path = "/products/trending",
    tag = "Catalog",
    responses(
        (status = 200, description = "Top ten products by likes", body = Vec<TrendingProduct>)
    )
)]
async fn get_trending<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
) -> CatalogResult<Json<Vec<TrendingProduct>>> {
    let trending = service.get_trending().await?;
    Ok(Json(trending))
}

/// Increment a product's like counter
#[utoipa::path(
    get,
    path = "/like/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "New like count", body = LikeResponse),
        (status = 404, description = "Unknown product")
    )
)]
async fn like_product<R: CatalogRepository, U: ImageUploader>(
    State(service): State<Arc<CatalogService<R, U>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<LikeResponse>> {
    let likes = service.like_product(&id).await?;
    Ok(Json(LikeResponse {
        message: "Liked successfully".to_string(),
        likes,
    }))
}
