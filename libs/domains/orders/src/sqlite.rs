//! SQLite implementation of OrderRepository

use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel};

use crate::{entity, error::OrderResult, models::Order, repository::OrderRepository};

pub struct SqliteOrderRepository {
    base: BaseRepository<entity::Entity>,
}

impl SqliteOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn insert(&self, order: Order) -> OrderResult<Order> {
        let model: entity::Model = order.into();
        let inserted = self.base.insert(model.into_active_model()).await?;

        tracing::info!(order_id = %inserted.id, "Placed order");
        Ok(inserted.into())
    }

    async fn list(&self) -> OrderResult<Vec<Order>> {
        let models = entity::Entity::find().all(self.base.db()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
