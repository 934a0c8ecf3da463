use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: String,
    pub sub_category: String,
    pub gender: String,
    pub price: f64,
    pub discount: f64,
    pub image: String,
    #[sea_orm(column_type = "Text")]
    pub more_images: String,
    pub uploaded_at: DateTimeUtc,
    pub likes: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Product
impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        // more_images is stored as serialized JSON text
        let more_images = serde_json::from_str(&model.more_images).unwrap_or_default();
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category,
            sub_category: model.sub_category,
            gender: model.gender,
            price: model.price,
            discount: model.discount,
            image: model.image,
            more_images,
            uploaded_at: model.uploaded_at,
            likes: model.likes,
        }
    }
}

impl From<crate::models::Product> for Model {
    fn from(product: crate::models::Product) -> Self {
        let more_images =
            serde_json::to_string(&product.more_images).unwrap_or_else(|_| "[]".to_string());
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            category: product.category,
            sub_category: product.sub_category,
            gender: product.gender,
            price: product.price,
            discount: product.discount,
            image: product.image,
            more_images,
            uploaded_at: product.uploaded_at,
            likes: product.likes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use chrono::Utc;

    #[test]
    fn test_more_images_round_trip() {
        let product = Product {
            id: "p1".to_string(),
            name: "Runner".to_string(),
            description: None,
            category: "shoes".to_string(),
            sub_category: "sneakers".to_string(),
            gender: "men".to_string(),
            price: 59.99,
            discount: 0.2,
            image: "https://i.ibb.co/abc/main.png".to_string(),
            more_images: vec![
                "https://i.ibb.co/abc/1.png".to_string(),
                "https://i.ibb.co/abc/2.png".to_string(),
            ],
            uploaded_at: Utc::now(),
            likes: 0,
        };

        let model: Model = product.clone().into();
        assert_eq!(model.more_images, r#"["https://i.ibb.co/abc/1.png","https://i.ibb.co/abc/2.png"]"#);

        let back: Product = model.into();
        assert_eq!(back, product);
    }

    #[test]
    fn test_garbage_more_images_column_becomes_empty() {
        let model = Model {
            id: "p1".to_string(),
            name: "Runner".to_string(),
            description: None,
            category: "shoes".to_string(),
            sub_category: "sneakers".to_string(),
            gender: "men".to_string(),
            price: 59.99,
            discount: 0.0,
            image: "https://i.ibb.co/abc/main.png".to_string(),
            more_images: "not json".to_string(),
            uploaded_at: Utc::now(),
            likes: 3,
        };

        let product: Product = model.into();
        assert!(product.more_images.is_empty());
        assert_eq!(product.likes, 3);
    }
}
