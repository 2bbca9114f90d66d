use serde::{Deserialize, Serialize};

/// A named schema: the ordered set of fields every asset of this category carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Category {
    /// Fields in rendering order (`order` ascending, ties keep their wire position).
    pub fn ordered_fields(&self) -> Vec<&Field> {
        let mut fields: Vec<&Field> = self.fields.iter().collect();
        fields.sort_by_key(|f| f.order);
        fields
    }
}

/// Wire name of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Select,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Date,
        FieldType::Select,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Select => "select",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::Select => "Select",
        }
    }

    /// Inverse of [`FieldType::as_str`]; used by `<select>` change handlers.
    pub fn parse(value: &str) -> Option<FieldType> {
        FieldType::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Declared type of a field. Options only exist on `Select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Select(Vec<String>),
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text => FieldType::Text,
            FieldKind::Number => FieldType::Number,
            FieldKind::Date => FieldType::Date,
            FieldKind::Select(_) => FieldType::Select,
        }
    }
}

/// One declared attribute of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireField", into = "WireField")]
pub struct Field {
    pub id: String,
    /// Stable key, unique within the category.
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireField {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    label: String,
    #[serde(alias = "type")]
    field_type: FieldType,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    #[serde(default)]
    order: i32,
}

impl TryFrom<WireField> for Field {
    type Error = String;

    fn try_from(wire: WireField) -> Result<Self, Self::Error> {
        let kind = match (wire.field_type, wire.options) {
            (FieldType::Select, options) => FieldKind::Select(options.unwrap_or_default()),
            (other, Some(options)) if !options.is_empty() => {
                return Err(format!(
                    "field `{}` has options but is of type `{}`",
                    wire.name,
                    other.as_str()
                ));
            }
            (FieldType::Text, _) => FieldKind::Text,
            (FieldType::Number, _) => FieldKind::Number,
            (FieldType::Date, _) => FieldKind::Date,
        };

        Ok(Field {
            id: wire.id,
            name: wire.name,
            label: wire.label,
            kind,
            required: wire.required,
            order: wire.order,
        })
    }
}

impl From<Field> for WireField {
    fn from(field: Field) -> Self {
        let field_type = field.kind.field_type();
        let options = match field.kind {
            FieldKind::Select(options) => Some(options),
            _ => None,
        };
        WireField {
            id: field.id,
            name: field.name,
            label: field.label,
            field_type,
            required: field.required,
            options,
            order: field.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_api_category() {
        let category: Category = serde_json::from_value(json!({
            "id": "c1",
            "name": "Laptops",
            "created_at": "2024-01-01T00:00:00Z",
            "fields": [
                {"id": "f2", "name": "bought", "label": "Bought", "field_type": "date", "required": false, "order": 1},
                {"id": "f1", "name": "serial", "label": "Serial", "field_type": "text", "required": true, "order": 0}
            ]
        }))
        .unwrap();

        assert_eq!(category.fields.len(), 2);
        assert_eq!(category.fields[0].kind, FieldKind::Date);
        let names: Vec<&str> = category
            .ordered_fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["serial", "bought"]);
    }

    #[test]
    fn accepts_type_alias_and_select_options() {
        let field: Field = serde_json::from_value(json!({
            "id": "f1", "name": "color", "label": "Color",
            "type": "select", "options": ["red", "blue"], "required": true
        }))
        .unwrap();

        assert_eq!(
            field.kind,
            FieldKind::Select(vec!["red".to_string(), "blue".to_string()])
        );
        assert!(field.required);
        assert_eq!(field.order, 0);
    }

    #[test]
    fn select_without_options_is_accepted() {
        let field: Field = serde_json::from_value(json!({
            "name": "size", "label": "Size", "field_type": "select"
        }))
        .unwrap();
        assert_eq!(field.kind, FieldKind::Select(Vec::new()));
    }

    #[test]
    fn rejects_unknown_type() {
        let result = serde_json::from_value::<Field>(json!({
            "name": "x", "label": "X", "field_type": "checkbox"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_options_on_non_select() {
        let result = serde_json::from_value::<Field>(json!({
            "name": "x", "label": "X", "field_type": "text", "options": ["a"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let field = Field {
            id: "f1".into(),
            name: "color".into(),
            label: "Color".into(),
            kind: FieldKind::Select(vec!["red".into()]),
            required: true,
            order: 2,
        };
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({
                "id": "f1", "name": "color", "label": "Color",
                "field_type": "select", "required": true,
                "options": ["red"], "order": 2
            })
        );
    }

    #[test]
    fn field_type_parse_round_trips_labels() {
        for t in FieldType::ALL {
            assert_eq!(FieldType::parse(t.as_str()), Some(t));
        }
        assert_eq!(FieldType::parse("checkbox"), None);
    }
}
