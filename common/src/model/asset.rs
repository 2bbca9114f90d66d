use serde::{Deserialize, Serialize};

use super::scalar_string;

/// An asset as returned by the API.
///
/// The field set is expected to match the category schema but is never
/// checked against it: missing entries render blank and extra ones are shown
/// as they come.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub fields: Vec<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
}

impl Asset {
    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.id.as_str())
    }

    /// Category name for display, `"Unknown"` when the reference is missing or blank.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }
}

/// Snapshot of the referenced category taken when the asset was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One concrete value on an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    #[serde(default)]
    pub id: String,
    pub field_name: String,
    #[serde(default)]
    pub field_label: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub value: String,
}

impl FieldValue {
    /// Label for display, falling back to the key when the label is blank.
    pub fn display_label(&self) -> &str {
        if self.field_label.is_empty() {
            &self.field_name
        } else {
            &self.field_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_scalar_values_to_strings() {
        let asset: Asset = serde_json::from_value(json!({
            "id": "a1",
            "name": "Widget",
            "category": {"id": "c1", "name": "Gadgets", "fields": []},
            "vendor_name": "acme",
            "fields": [
                {"id": "v1", "field_name": "count", "field_label": "Count", "value": 5},
                {"id": "v2", "field_name": "active", "field_label": "", "value": true},
                {"id": "v3", "field_name": "notes", "field_label": "Notes", "value": null},
                {"id": "v4", "field_name": "color", "field_label": "Color"}
            ]
        }))
        .unwrap();

        let values: Vec<&str> = asset.fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["5", "true", "", ""]);
        assert_eq!(asset.fields[1].display_label(), "active");
        assert_eq!(asset.category_id(), Some("c1"));
        assert_eq!(asset.category_name(), "Gadgets");
    }

    #[test]
    fn missing_category_displays_unknown() {
        let asset: Asset = serde_json::from_value(json!({"id": "a1", "name": "Orphan"})).unwrap();
        assert_eq!(asset.category_id(), None);
        assert_eq!(asset.category_name(), "Unknown");
        assert!(asset.fields.is_empty());
    }
}
