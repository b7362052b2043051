//! Catalog item record
//!
//! The persisted shape of a single catalog entry. The backing store is a
//! flat JSON file holding an array of these records.

use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Ids are assigned from the creation timestamp in milliseconds, so they are
/// monotonically increasing but only coarsely unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier
    pub id: i64,
    /// Display name, the field searched by listing queries
    pub name: String,
    /// Free-form category label
    pub category: String,
    /// Unit price
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_roundtrip() {
        let json = r#"{"id":1,"name":"Apple","category":"Fruit","price":1.5}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Apple");
        assert_eq!(item.category, "Fruit");
        assert_eq!(item.price, 1.5);

        let back = serde_json::to_string(&item).unwrap();
        assert!(back.contains("\"Apple\""));
    }

    #[test]
    fn test_item_rejects_missing_fields() {
        let json = r#"{"id":1,"name":"Apple"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
