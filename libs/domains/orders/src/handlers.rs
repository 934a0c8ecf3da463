//! HTTP handlers for the orders API

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{OrderError, OrderResult};
use crate::models::{Order, OrderPlacedResponse, PlaceOrder};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for the orders API
#[derive(OpenApi)]
#[openapi(
    paths(place_order, view_orders),
    components(schemas(Order, PlaceOrder, OrderPlacedResponse)),
    tags(
        (name = "Orders", description = "Checkout and order listing")
    )
)]
pub struct ApiDoc;

/// Create the orders router with all HTTP endpoints
pub fn router<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/place_order", post(place_order))
        .route("/orders/view", get(view_orders))
        .with_state(shared_service)
}

/// Place an order
#[utoipa::path(
    post,
    path = "/place_order",
    tag = "Orders",
    request_body = PlaceOrder,
    responses(
        (status = 200, description = "Order placed", body = OrderPlacedResponse),
        (status = 400, description = "No request body"),
        (status = 500, description = "Database failure")
    )
)]
async fn place_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    body: Option<Json<PlaceOrder>>,
) -> OrderResult<Json<OrderPlacedResponse>> {
    // A request without a JSON body is rejected; an empty object is fine.
    let Json(input) = body.ok_or(OrderError::NoData)?;
    let order = service.place_order(input).await?;
    Ok(Json(OrderPlacedResponse {
        message: "Order placed successfully".to_string(),
        order_id: order.id,
    }))
}

/// List all orders
#[utoipa::path(
    get,
    path = "/orders/view",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>)
    )
)]
async fn view_orders<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
) -> OrderResult<Json<Vec<Order>>> {
    let orders = service.list_orders().await?;
    Ok(Json(orders))
}
