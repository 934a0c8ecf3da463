use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};

/// File extensions accepted for product imagery, matched
/// case-insensitively on the substring after the last '.'.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "jfif"];

/// Whether a filename carries an allowed image extension
pub fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned at creation and immutable
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Lower-cased at creation; overwritten verbatim on update
    pub category: String,
    pub sub_category: String,
    pub gender: String,
    pub price: f64,
    /// Fraction in [0, 1] (e.g. 0.2 for 20%)
    pub discount: f64,
    /// Public URL of the primary image on the image host
    pub image: String,
    /// Extra image URLs in submission order
    pub more_images: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
    pub likes: i64,
}

/// Reduced projection returned by the trending endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrendingProduct {
    pub name: String,
    pub id: String,
    pub price: f64,
    pub image: String,
    pub likes: i64,
}

impl From<Product> for TrendingProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            id: product.id,
            price: product.price,
            image: product.image,
            likes: product.likes,
        }
    }
}

/// One uploaded file from a multipart request
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// A parsed multipart product submission: text fields plus the primary
/// image and any number of extra images, in submission order.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub fields: HashMap<String, String>,
    pub image: Option<ImagePart>,
    pub more_images: Vec<ImagePart>,
}

/// Validated DTO for creating a product, built from the text fields of
/// a multipart submission.
#[derive(Debug, Clone, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub sub_category: String,
    pub gender: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(range(
        min = 0.0,
        max = 1.0,
        message = "discount must be between 0 and 1 (e.g. 0.2 for 20%)"
    ))]
    pub discount: f64,
}

impl NewProduct {
    /// Parse the creation fields, applying the trim/lower-case rules.
    ///
    /// Missing required fields and non-numeric price/discount are
    /// reported before any value-range validation runs.
    pub fn from_form(fields: &HashMap<String, String>) -> CatalogResult<Self> {
        let required = |name: &str| -> CatalogResult<&String> {
            fields
                .get(name)
                .ok_or_else(|| CatalogError::Validation(format!("Missing field: '{}'", name)))
        };
        let number = |name: &str, value: &str| -> CatalogResult<f64> {
            value
                .trim()
                .parse()
                .map_err(|_| CatalogError::Validation(format!("Invalid number: '{}'", name)))
        };

        let name = required("name")?.trim().to_string();
        let description = fields
            .get("description")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let category = required("category")?.trim().to_lowercase();
        let sub_category = required("subcategory")?.trim().to_lowercase();
        let gender = required("gender")?.trim().to_lowercase();
        let price = number("price", required("price")?)?;
        let discount = match fields.get("discount") {
            Some(raw) => number("discount", raw)?,
            None => 0.0,
        };

        Ok(Self {
            name,
            description,
            category,
            sub_category,
            gender,
            price,
            discount,
        })
    }
}

/// Partial update parsed from an update submission. Text fields
/// overwrite verbatim; numbers must parse but are not range-checked.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub discount: Option<f64>,
}

impl ProductPatch {
    pub fn from_form(fields: &HashMap<String, String>) -> CatalogResult<Self> {
        let price = fields
            .get("price")
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|_| CatalogError::Validation("Invalid price format".to_string()))
            })
            .transpose()?;
        let discount = fields
            .get("discount")
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|_| CatalogError::Validation("Invalid discount format".to_string()))
            })
            .transpose()?;

        Ok(Self {
            name: fields.get("name").cloned(),
            description: fields.get("description").cloned(),
            category: fields.get("category").cloned(),
            price,
            discount,
        })
    }
}

/// Pagination window for product listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Maximum number of results (no upper bound enforced)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    20
}

/// Response wrapper for create/update operations
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

/// Plain acknowledgment response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for the like endpoint, carrying the new count
#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub message: String,
    pub likes: i64,
}

/// Response for the category listing
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_allowed_extensions_case_insensitive() {
        assert!(has_allowed_extension("photo.png"));
        assert!(has_allowed_extension("photo.JPG"));
        assert!(has_allowed_extension("archive.tar.jpeg"));
        assert!(has_allowed_extension("scan.JFIF"));
        assert!(!has_allowed_extension("photo.bmp"));
        assert!(!has_allowed_extension("noextension"));
        assert!(!has_allowed_extension(""));
    }

    #[test]
    fn test_new_product_trims_and_lowercases() {
        let fields = form(&[
            ("name", "  Runner Pro  "),
            ("category", " Shoes "),
            ("subcategory", "SNEAKERS"),
            ("gender", " Men"),
            ("price", "59.99"),
        ]);
        let input = NewProduct::from_form(&fields).unwrap();
        assert_eq!(input.name, "Runner Pro");
        assert_eq!(input.category, "shoes");
        assert_eq!(input.sub_category, "sneakers");
        assert_eq!(input.gender, "men");
        assert_eq!(input.price, 59.99);
        assert_eq!(input.discount, 0.0);
        assert!(input.description.is_none());
    }

    #[test]
    fn test_new_product_missing_field() {
        let fields = form(&[("name", "Runner"), ("category", "shoes")]);
        let err = NewProduct::from_form(&fields).unwrap_err();
        assert!(err.to_string().contains("Missing field"));
    }

    #[test]
    fn test_new_product_invalid_price() {
        let fields = form(&[
            ("name", "Runner"),
            ("category", "shoes"),
            ("subcategory", "sneakers"),
            ("gender", "men"),
            ("price", "cheap"),
        ]);
        let err = NewProduct::from_form(&fields).unwrap_err();
        assert!(err.to_string().contains("Invalid number"));
    }

    #[test]
    fn test_new_product_discount_out_of_range_fails_validation() {
        let fields = form(&[
            ("name", "Runner"),
            ("category", "shoes"),
            ("subcategory", "sneakers"),
            ("gender", "men"),
            ("price", "59.99"),
            ("discount", "1.5"),
        ]);
        let input = NewProduct::from_form(&fields).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_new_product_discount_bounds_are_inclusive() {
        for discount in ["0", "1", "0.2"] {
            let fields = form(&[
                ("name", "Runner"),
                ("category", "shoes"),
                ("subcategory", "sneakers"),
                ("gender", "men"),
                ("price", "59.99"),
                ("discount", discount),
            ]);
            let input = NewProduct::from_form(&fields).unwrap();
            assert!(input.validate().is_ok(), "discount {} should pass", discount);
        }
    }

    #[test]
    fn test_patch_preserves_verbatim_text() {
        let fields = form(&[("name", "  Raw Name "), ("category", "SHOES")]);
        let patch = ProductPatch::from_form(&fields).unwrap();
        // Update intentionally skips the trim/lower-case rules
        assert_eq!(patch.name.as_deref(), Some("  Raw Name "));
        assert_eq!(patch.category.as_deref(), Some("SHOES"));
        assert!(patch.price.is_none());
    }

    #[test]
    fn test_patch_rejects_non_numeric_price() {
        let fields = form(&[("price", "free")]);
        let err = ProductPatch::from_form(&fields).unwrap_err();
        assert!(err.to_string().contains("Invalid price format"));
    }

    #[test]
    fn test_patch_allows_out_of_range_discount() {
        // Range re-validation is deliberately absent on update
        let fields = form(&[("discount", "3.5")]);
        let patch = ProductPatch::from_form(&fields).unwrap();
        assert_eq!(patch.discount, Some(3.5));
    }
}
