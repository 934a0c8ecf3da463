//! Catalog Service - validation and upload orchestration

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    has_allowed_extension, ImagePart, NewProduct, Product, ProductForm, ProductPatch,
    TrendingProduct,
};
use crate::repository::CatalogRepository;
use crate::upload::ImageUploader;

/// How many products the trending endpoint returns
const TRENDING_LIMIT: u64 = 10;

/// Catalog service providing the product business logic.
///
/// Orchestrates image uploads against the external host and persistence
/// against the repository. Validation happens before any row is
/// written; images already sent to the external host cannot be rolled
/// back if a later step fails.
pub struct CatalogService<R: CatalogRepository, U: ImageUploader> {
    repository: Arc<R>,
    uploader: Arc<U>,
}

impl<R: CatalogRepository, U: ImageUploader> CatalogService<R, U> {
    pub fn new(repository: R, uploader: U) -> Self {
        Self {
            repository: Arc::new(repository),
            uploader: Arc::new(uploader),
        }
    }

    /// Create a product from a multipart submission.
    ///
    /// The primary image is checked and uploaded before the text fields
    /// are validated; extra images are best-effort and never fail the
    /// request.
    #[instrument(skip(self, form))]
    pub async fn create_product(&self, form: ProductForm) -> CatalogResult<Product> {
        let image = form
            .image
            .as_ref()
            .ok_or_else(|| CatalogError::Validation("No image file provided".to_string()))?;
        if image.filename.is_empty() {
            return Err(CatalogError::Validation(
                "No selected image file".to_string(),
            ));
        }
        if !has_allowed_extension(&image.filename) {
            return Err(CatalogError::Validation(
                "Invalid file type. Allowed: png, jpg, jpeg, webp, gif, jfif".to_string(),
            ));
        }

        let uploaded = self
            .uploader
            .upload(&image.filename, &image.content_type, image.data.clone())
            .await?;

        let input = NewProduct::from_form(&form.fields)?;
        input
            .validate()
            .map_err(|e| CatalogError::Validation(flatten_validation_errors(&e)))?;

        let more_images = self.upload_extra_images(&form.more_images).await;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            category: input.category,
            sub_category: input.sub_category,
            gender: input.gender,
            price: input.price,
            discount: input.discount,
            image: uploaded.url,
            more_images,
            uploaded_at: chrono::Utc::now(),
            likes: 0,
        };

        self.repository.insert(product).await
    }

    /// Upload extra images, silently skipping any that are missing,
    /// wrong-typed, or rejected by the host. Order of the survivors
    /// matches submission order.
    async fn upload_extra_images(&self, images: &[ImagePart]) -> Vec<String> {
        let mut urls = Vec::new();
        for image in images {
            if image.filename.is_empty() || !has_allowed_extension(&image.filename) {
                continue;
            }
            match self
                .uploader
                .upload(&image.filename, &image.content_type, image.data.clone())
                .await
            {
                Ok(uploaded) => urls.push(uploaded.url),
                Err(e) => {
                    tracing::warn!(filename = %image.filename, error = %e, "Skipping extra image");
                }
            }
        }
        urls
    }

    /// Partially update a product.
    ///
    /// Supplied text fields overwrite verbatim and the discount range is
    /// not re-checked; creation and update are intentionally asymmetric.
    #[instrument(skip(self, form))]
    pub async fn update_product(&self, id: &str, form: ProductForm) -> CatalogResult<Product> {
        let mut product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        if let Some(image) = &form.image {
            if !image.filename.is_empty() {
                if !has_allowed_extension(&image.filename) {
                    return Err(CatalogError::Validation(
                        "Invalid file type for image update".to_string(),
                    ));
                }
                let uploaded = self
                    .uploader
                    .upload(&image.filename, &image.content_type, image.data.clone())
                    .await?;
                product.image = uploaded.url;
            }
        }

        let patch = ProductPatch::from_form(&form.fields)?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(discount) = patch.discount {
            product.discount = discount;
        }

        self.repository.update(product).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> CatalogResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(CatalogError::NotFound(id.to_string()))
        }
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// List products ordered by upload time descending
    #[instrument(skip(self))]
    pub async fn list_products(&self, limit: u64, offset: u64) -> CatalogResult<Vec<Product>> {
        self.repository.list(limit, offset).await
    }

    /// Products in a category, matched case-insensitively. An unknown
    /// category yields an empty list, never an error.
    #[instrument(skip(self))]
    pub async fn get_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        self.repository.find_by_category(category).await
    }

    /// Distinct non-empty categories across the catalog
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CatalogResult<Vec<String>> {
        self.repository.distinct_categories().await
    }

    /// Top products by likes, reduced projection
    #[instrument(skip(self))]
    pub async fn get_trending(&self) -> CatalogResult<Vec<TrendingProduct>> {
        let products = self.repository.trending(TRENDING_LIMIT).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Increment the like counter and return the new count.
    ///
    /// Read-modify-write within the request; coordination beyond the
    /// store's single-statement semantics is out of scope.
    #[instrument(skip(self))]
    pub async fn like_product(&self, id: &str) -> CatalogResult<i64> {
        let mut product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        product.likes += 1;
        let updated = self.repository.update(product).await?;
        Ok(updated.likes)
    }
}

impl<R: CatalogRepository, U: ImageUploader> Clone for CatalogService<R, U> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            uploader: Arc::clone(&self.uploader),
        }
    }
}

fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();
    for (field, errs) in errors.field_errors() {
        for err in errs {
            match &err.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("invalid value for '{}'", field)),
            }
        }
    }
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCatalogRepository;
    use crate::upload::{MockImageUploader, UploadError, UploadedImage};
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};

    fn image(filename: &str) -> ImagePart {
        ImagePart {
            filename: filename.to_string(),
            content_type: "image/png".to_string(),
            data: vec![0u8; 8],
        }
    }

    fn valid_fields() -> HashMap<String, String> {
        [
            ("name", "Runner Pro"),
            ("category", "Shoes"),
            ("subcategory", "Sneakers"),
            ("gender", "Men"),
            ("price", "59.99"),
            ("discount", "0.2"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn stored_product(id: &str, likes: i64) -> Product {
        Product {
            id: id.to_string(),
            name: "Runner Pro".to_string(),
            description: Some("A shoe".to_string()),
            category: "shoes".to_string(),
            sub_category: "sneakers".to_string(),
            gender: "men".to_string(),
            price: 59.99,
            discount: 0.2,
            image: "https://i.ibb.co/abc/main.png".to_string(),
            more_images: vec![],
            uploaded_at: Utc::now(),
            likes,
        }
    }

    fn uploader_returning(url: &'static str) -> MockImageUploader {
        let mut uploader = MockImageUploader::new();
        uploader.expect_upload().returning(move |_, _, _| {
            Ok(UploadedImage {
                url: url.to_string(),
                raw: serde_json::json!({ "success": true }),
            })
        });
        uploader
    }

    #[tokio::test]
    async fn test_create_product_happy_path() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert().returning(|product| Ok(product));

        let service = CatalogService::new(repo, uploader_returning("https://i.ibb.co/x/a.png"));

        let form = ProductForm {
            fields: valid_fields(),
            image: Some(image("main.png")),
            more_images: vec![],
        };

        let product = service.create_product(form).await.unwrap();
        assert_eq!(product.name, "Runner Pro");
        assert_eq!(product.category, "shoes");
        assert_eq!(product.image, "https://i.ibb.co/x/a.png");
        assert_eq!(product.likes, 0);
        assert!(!product.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_product_requires_image() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert().never();
        let mut uploader = MockImageUploader::new();
        uploader.expect_upload().never();

        let service = CatalogService::new(repo, uploader);
        let form = ProductForm {
            fields: valid_fields(),
            image: None,
            more_images: vec![],
        };

        let err = service.create_product(form).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(err.to_string().contains("No image file provided"));
    }

    #[tokio::test]
    async fn test_create_product_rejects_empty_filename() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert().never();
        let mut uploader = MockImageUploader::new();
        uploader.expect_upload().never();

        let service = CatalogService::new(repo, uploader);
        let form = ProductForm {
            fields: valid_fields(),
            image: Some(image("")),
            more_images: vec![],
        };

        let err = service.create_product(form).await.unwrap_err();
        assert!(err.to_string().contains("No selected image file"));
    }

    #[tokio::test]
    async fn test_create_product_rejects_disallowed_extension() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert().never();
        let mut uploader = MockImageUploader::new();
        uploader.expect_upload().never();

        let service = CatalogService::new(repo, uploader);
        let form = ProductForm {
            fields: valid_fields(),
            image: Some(image("photo.bmp")),
            more_images: vec![],
        };

        let err = service.create_product(form).await.unwrap_err();
        assert!(err.to_string().contains("Invalid file type"));
    }

    #[tokio::test]
    async fn test_create_product_rejects_bad_discount_without_insert() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert().never();

        let service = CatalogService::new(repo, uploader_returning("https://i.ibb.co/x/a.png"));

        let mut fields = valid_fields();
        fields.insert("discount".to_string(), "1.5".to_string());
        let form = ProductForm {
            fields,
            image: Some(image("main.png")),
            more_images: vec![],
        };

        let err = service.create_product(form).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(err.to_string().contains("discount"));
    }

    #[tokio::test]
    async fn test_create_product_upload_failure_aborts() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert().never();
        let mut uploader = MockImageUploader::new();
        uploader.expect_upload().returning(|_, _, _| {
            Err(UploadError::rejected(
                "Failed to upload image to ImgBB",
                Some(serde_json::json!({ "code": 100 })),
            ))
        });

        let service = CatalogService::new(repo, uploader);
        let form = ProductForm {
            fields: valid_fields(),
            image: Some(image("main.png")),
            more_images: vec![],
        };

        let err = service.create_product(form).await.unwrap_err();
        assert!(matches!(err, CatalogError::Upload(_)));
    }

    #[tokio::test]
    async fn test_create_product_skips_failed_extra_images() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert().returning(|product| Ok(product));

        let mut uploader = MockImageUploader::new();
        uploader.expect_upload().returning(|filename, _, _| {
            if filename == "bad.png" {
                Err(UploadError::transport("connection reset"))
            } else {
                Ok(UploadedImage {
                    url: format!("https://i.ibb.co/x/{}", filename),
                    raw: serde_json::json!({ "success": true }),
                })
            }
        });

        let service = CatalogService::new(repo, uploader);
        let form = ProductForm {
            fields: valid_fields(),
            image: Some(image("main.png")),
            more_images: vec![
                image("one.png"),
                image("bad.png"),
                image("ignored.bmp"),
                image("two.png"),
            ],
        };

        let product = service.create_product(form).await.unwrap();
        // Failures and wrong types are dropped, order preserved
        assert_eq!(
            product.more_images,
            vec![
                "https://i.ibb.co/x/one.png".to_string(),
                "https://i.ibb.co/x/two.png".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_product_not_found() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        let uploader = MockImageUploader::new();

        let service = CatalogService::new(repo, uploader);
        let err = service
            .update_product("missing", ProductForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_product_price_only_keeps_other_fields() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(stored_product(id, 0))));
        repo.expect_update().returning(|product| Ok(product));
        let mut uploader = MockImageUploader::new();
        uploader.expect_upload().never();

        let service = CatalogService::new(repo, uploader);
        let mut form = ProductForm::default();
        form.fields.insert("price".to_string(), "42.5".to_string());

        let updated = service.update_product("p1", form).await.unwrap();
        assert_eq!(updated.price, 42.5);
        assert_eq!(updated.name, "Runner Pro");
        assert_eq!(updated.category, "shoes");
        assert_eq!(updated.image, "https://i.ibb.co/abc/main.png");
    }

    #[tokio::test]
    async fn test_update_product_accepts_out_of_range_discount() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(stored_product(id, 0))));
        repo.expect_update().returning(|product| Ok(product));

        let service = CatalogService::new(repo, MockImageUploader::new());
        let mut form = ProductForm::default();
        form.fields.insert("discount".to_string(), "2.0".to_string());

        let updated = service.update_product("p1", form).await.unwrap();
        assert_eq!(updated.discount, 2.0);
    }

    #[tokio::test]
    async fn test_update_product_new_image_replaces_url() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(stored_product(id, 0))));
        repo.expect_update().returning(|product| Ok(product));

        let service =
            CatalogService::new(repo, uploader_returning("https://i.ibb.co/x/new.png"));
        let mut form = ProductForm::default();
        form.image = Some(image("new.png"));

        let updated = service.update_product("p1", form).await.unwrap();
        assert_eq!(updated.image, "https://i.ibb.co/x/new.png");
    }

    #[tokio::test]
    async fn test_delete_product_unknown_id() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = CatalogService::new(repo, MockImageUploader::new());
        let err = service.delete_product("missing").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_like_product_sequential_increments() {
        let likes = std::sync::Arc::new(AtomicI64::new(0));

        let mut repo = MockCatalogRepository::new();
        let get_likes = likes.clone();
        repo.expect_get_by_id()
            .returning(move |id| Ok(Some(stored_product(id, get_likes.load(Ordering::SeqCst)))));
        let set_likes = likes.clone();
        repo.expect_update().returning(move |product| {
            set_likes.store(product.likes, Ordering::SeqCst);
            Ok(product)
        });

        let service = CatalogService::new(repo, MockImageUploader::new());
        for expected in 1..=5 {
            let count = service.like_product("p1").await.unwrap();
            assert_eq!(count, expected);
        }
    }

    #[tokio::test]
    async fn test_like_product_not_found() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = CatalogService::new(repo, MockImageUploader::new());
        let err = service.like_product("missing").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_trending_projection() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_trending().returning(|_| {
            Ok(vec![stored_product("p1", 12), stored_product("p2", 7)])
        });

        let service = CatalogService::new(repo, MockImageUploader::new());
        let trending = service.get_trending().await.unwrap();
        assert_eq!(trending.len(), 2);
        assert_eq!(trending[0].id, "p1");
        assert_eq!(trending[0].likes, 12);
        assert_eq!(trending[1].likes, 7);
    }

    #[tokio::test]
    async fn test_get_by_category_empty_is_ok() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_by_category()
            .withf(|category| category == "Shoes")
            .returning(|_| Ok(vec![]));

        let service = CatalogService::new(repo, MockImageUploader::new());
        let products = service.get_by_category("Shoes").await.unwrap();
        assert!(products.is_empty());
    }
}
