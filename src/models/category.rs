use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Product;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category plus its owned products, used by the read endpoints.
#[derive(Debug, Serialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<Product>,
}

/// Create/replace payload. Missing fields bind to blank values so an update
/// overwrites every column (full-replace semantics).
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_fields_bind_to_blank_values() {
        let req: CategoryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.name, "");
    }

    #[test]
    fn test_name_over_255_characters_is_rejected() {
        let req = CategoryRequest {
            name: "x".repeat(256),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_name_at_255_characters_is_accepted() {
        let req = CategoryRequest {
            name: "x".repeat(255),
        };
        assert!(req.validate().is_ok());
    }
}
