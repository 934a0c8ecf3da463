use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A placed order. Orders are immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// 8 uppercase hex characters, server-generated
    pub id: String,
    /// Cart lines as opaque JSON text, stored and returned verbatim
    pub items: String,
    pub phone: String,
    pub placed_at: DateTime<Utc>,
}

/// Checkout request body.
///
/// Both fields default rather than error when absent; only a missing
/// body is rejected.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlaceOrder {
    /// Cart lines, passed through without inspection
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub cart: Vec<serde_json::Value>,
    #[serde(default)]
    pub phone: String,
}

/// Response for a successful checkout
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderPlacedResponse {
    pub message: String,
    pub order_id: String,
}
