//! Request DTOs for the catalog server API
//!
//! Defines the structure of incoming query strings and HTTP request bodies.

use serde::Deserialize;

/// Query parameters for the listing endpoint (GET /api/items)
///
/// # Fields
/// - `page`: 1-based page number (default 1)
/// - `limit`: page size (default from configuration)
/// - `q`: optional case-insensitive substring filter on item name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<u32>,
    /// Maximum items per page
    pub limit: Option<u32>,
    /// Substring to match against item names, case-insensitively
    pub q: Option<String>,
}

/// Request body for the create operation (POST /api/items)
///
/// The id is never client-supplied; the server assigns it on create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    /// Display name of the new item
    pub name: String,
    /// Category label
    pub category: String,
    /// Unit price
    pub price: f64,
}

impl CreateItemRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Some("Category cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_deserialize_full() {
        let query: ListQuery =
            serde_json::from_str(r#"{"page": 2, "limit": 5, "q": "wid"}"#).unwrap();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, Some(5));
        assert_eq!(query.q.as_deref(), Some("wid"));
    }

    #[test]
    fn test_list_query_all_optional() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert!(query.page.is_none());
        assert!(query.limit.is_none());
        assert!(query.q.is_none());
    }

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"name": "Widget", "category": "Tools", "price": 9.99}"#;
        let req: CreateItemRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Widget");
        assert_eq!(req.category, "Tools");
        assert_eq!(req.price, 9.99);
    }

    #[test]
    fn test_create_request_rejects_missing_price() {
        let json = r#"{"name": "Widget", "category": "Tools"}"#;
        assert!(serde_json::from_str::<CreateItemRequest>(json).is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        let req = CreateItemRequest {
            name: "   ".to_string(),
            category: "Tools".to_string(),
            price: 1.0,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_empty_category() {
        let req = CreateItemRequest {
            name: "Widget".to_string(),
            category: "".to_string(),
            price: 1.0,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_negative_price() {
        let req = CreateItemRequest {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: -1.0,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_nan_price() {
        let req = CreateItemRequest {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: f64::NAN,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = CreateItemRequest {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: 9.99,
        };
        assert!(req.validate().is_none());
    }
}
