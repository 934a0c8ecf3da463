use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::Order;

/// Repository trait for Order persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order
    async fn insert(&self, order: Order) -> OrderResult<Order>;

    /// All orders, store order, no pagination
    async fn list(&self) -> OrderResult<Vec<Order>>;
}
