//! Product entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Price;
use crate::domain::foundation::{ProductId, ValidationError};

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub platform: String,
    pub price: Option<Price>,
    pub discount: Option<i32>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub stock: Option<i32>,
    pub tags: Option<String>,
}

impl Product {
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            title: new.title,
            platform: new.platform,
            price: new.price,
            discount: new.discount,
            image_url: new.image_url,
            description: new.description,
            release_date: new.release_date,
            publisher: new.publisher,
            stock: new.stock,
            tags: new.tags,
        }
    }
}

/// A product that has not been assigned an id yet.
///
/// Field names follow the camelCase layout of the seed file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub platform: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub discount: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub tags: Option<String>,
}

impl NewProduct {
    /// Checks the columns the catalog cannot do without.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.platform.trim().is_empty() {
            return Err(ValidationError::empty_field("platform"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_parses_camel_case_seed_entry() {
        let json = r#"{
            "title": "Hollow Knight",
            "platform": "PC",
            "price": 14.99,
            "imageUrl": "https://img.example.com/hk.png",
            "releaseDate": "2017-02-24",
            "stock": 12
        }"#;
        let product: NewProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.title, "Hollow Knight");
        assert_eq!(product.price.unwrap().cents(), 1499);
        assert_eq!(product.release_date, NaiveDate::from_ymd_opt(2017, 2, 24));
        assert!(product.publisher.is_none());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn blank_platform_fails_validation() {
        let product = NewProduct {
            title: "Celeste".into(),
            platform: " ".into(),
            price: None,
            discount: None,
            image_url: None,
            description: None,
            release_date: None,
            publisher: None,
            stock: None,
            tags: None,
        };
        assert_eq!(
            product.validate(),
            Err(ValidationError::empty_field("platform"))
        );
    }

    #[test]
    fn product_serializes_camel_case() {
        let new: NewProduct =
            serde_json::from_str(r#"{"title":"Celeste","platform":"Switch","imageUrl":"x"}"#)
                .unwrap();
        let product = Product::from_new(ProductId::new(3), new);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["imageUrl"], "x");
        assert!(json.get("image_url").is_none());
    }
}
