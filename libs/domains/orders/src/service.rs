//! Order Service - checkout and order listing

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{Order, PlaceOrder};
use crate::repository::OrderRepository;

pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Place an order.
    ///
    /// The cart is serialized as opaque JSON text without inspection.
    /// The short id is not checked for collisions; at boutique order
    /// volumes the 32-bit space makes one vanishingly unlikely, and a
    /// collision surfaces as a primary-key violation.
    #[instrument(skip(self, input))]
    pub async fn place_order(&self, input: PlaceOrder) -> OrderResult<Order> {
        let items = serde_json::to_string(&input.cart)
            .map_err(|e| crate::error::OrderError::Database(e.to_string()))?;

        let order = Order {
            id: generate_order_id(),
            items,
            phone: input.phone,
            placed_at: chrono::Utc::now(),
        };

        self.repository.insert(order).await
    }

    /// All orders, store order
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> OrderResult<Vec<Order>> {
        self.repository.list().await
    }
}

impl<R: OrderRepository> Clone for OrderService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// First 8 hex characters of a fresh v4 uuid, uppercased
fn generate_order_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}
