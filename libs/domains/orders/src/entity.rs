use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the orders table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub items: String,
    pub phone: String,
    pub placed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Order {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            items: model.items,
            phone: model.phone,
            placed_at: model.placed_at,
        }
    }
}

impl From<crate::models::Order> for Model {
    fn from(order: crate::models::Order) -> Self {
        Self {
            id: order.id,
            items: order.items,
            phone: order.phone,
            placed_at: order.placed_at,
        }
    }
}
