use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/replace payload. Missing fields bind to zero/blank values so an
/// update overwrites every column (full-replace semantics).
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "title must be at most 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: String,
    #[serde(default)]
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_fields_bind_to_zero_values() {
        let req: ProductRequest = serde_json::from_str(r#"{"title":"Keyboard"}"#).unwrap();

        assert_eq!(req.title, "Keyboard");
        assert_eq!(req.price, Decimal::ZERO);
        assert_eq!(req.description, "");
        assert_eq!(req.category_id, 0);
    }

    #[test]
    fn test_price_binds_from_json_number() {
        let req: ProductRequest = serde_json::from_str(r#"{"price":19.99}"#).unwrap();
        assert_eq!(req.price.to_string(), "19.99");
    }

    #[test]
    fn test_title_over_255_characters_is_rejected() {
        let req = ProductRequest {
            title: "x".repeat(256),
            price: Decimal::ZERO,
            description: String::new(),
            category_id: 1,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_description_over_255_characters_is_rejected() {
        let req = ProductRequest {
            title: "ok".to_string(),
            price: Decimal::ZERO,
            description: "x".repeat(256),
            category_id: 1,
        };
        assert!(req.validate().is_err());
    }
}
