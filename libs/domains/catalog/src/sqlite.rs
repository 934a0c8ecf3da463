//! SQLite implementation of CatalogRepository

use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    entity,
    error::CatalogResult,
    models::Product,
    repository::CatalogRepository,
};

pub struct SqliteCatalogRepository {
    base: BaseRepository<entity::Entity>,
}

impl SqliteCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CatalogRepository for SqliteCatalogRepository {
    async fn insert(&self, product: Product) -> CatalogResult<Product> {
        let model: entity::Model = product.into();
        let inserted = self.base.insert(model.into_active_model()).await?;

        tracing::info!(product_id = %inserted.id, "Created product");
        Ok(inserted.into())
    }

    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, limit: u64, offset: u64) -> CatalogResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::UploadedAt)
            .offset(offset)
            .limit(limit)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Category)))
                    .eq(category.to_lowercase()),
            )
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn distinct_categories(&self) -> CatalogResult<Vec<String>> {
        let categories: Vec<String> = entity::Entity::find()
            .select_only()
            .column(entity::Column::Category)
            .distinct()
            .into_tuple()
            .all(self.base.db())
            .await?;

        Ok(categories.into_iter().filter(|c| !c.is_empty()).collect())
    }

    async fn trending(&self, limit: u64) -> CatalogResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::Likes)
            .limit(limit)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, product: Product) -> CatalogResult<Product> {
        let model: entity::Model = product.into();
        // into_active_model marks values Unchanged; reset_all makes the
        // overwrite explicit so every column is written
        let updated = self.base.update(model.into_active_model().reset_all()).await?;

        tracing::info!(product_id = %updated.id, "Updated product");
        Ok(updated.into())
    }

    async fn delete(&self, id: &str) -> CatalogResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
