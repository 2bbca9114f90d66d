use crate::model::category::{Category, FieldKind, FieldType};
use crate::requests::{CategorySubmission, FieldDefinition};

/// Editable state of the category (schema) form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
    editing: Option<String>,
}

impl CategoryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_category(category: &Category) -> Self {
        let fields = category
            .ordered_fields()
            .into_iter()
            .map(|field| FieldDefinition {
                name: field.name.clone(),
                label: field.label.clone(),
                field_type: field.kind.field_type(),
                required: field.required,
                order: field.order,
                options: match &field.kind {
                    FieldKind::Select(options) => options.clone(),
                    _ => Vec::new(),
                },
            })
            .collect();

        Self {
            name: category.name.clone(),
            fields,
            editing: Some(category.id.clone()),
        }
    }

    pub fn category_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn add_field(&mut self) {
        let order = i32::try_from(self.fields.len()).unwrap_or(i32::MAX);
        self.fields.push(FieldDefinition::blank(order));
    }

    pub fn remove_field(&mut self, index: usize) {
        if index < self.fields.len() {
            self.fields.remove(index);
        }
    }

    pub fn set_field_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.name = name.into();
        }
    }

    pub fn set_field_label(&mut self, index: usize, label: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.label = label.into();
        }
    }

    /// Options only survive on `select` fields.
    pub fn set_field_type(&mut self, index: usize, field_type: FieldType) {
        if let Some(field) = self.fields.get_mut(index) {
            field.field_type = field_type;
            if field_type != FieldType::Select {
                field.options.clear();
            }
        }
    }

    pub fn set_field_required(&mut self, index: usize, required: bool) {
        if let Some(field) = self.fields.get_mut(index) {
            field.required = required;
        }
    }

    /// Sets options from comma-separated input, dropping blanks.
    pub fn set_field_options(&mut self, index: usize, raw: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            if field.field_type == FieldType::Select {
                field.options = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }
    }

    /// Submission body with every `order` rewritten to the field's position.
    pub fn serialize(&self) -> CategorySubmission {
        let fields = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| FieldDefinition {
                order: i32::try_from(index).unwrap_or(i32::MAX),
                ..field.clone()
            })
            .collect();

        CategorySubmission {
            name: self.name.clone(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn edits_and_serializes_with_positional_order() {
        let mut draft = CategoryDraft::new();
        draft.set_name("Vehicles");
        draft.add_field();
        draft.add_field();
        draft.add_field();
        draft.set_field_name(0, "plate");
        draft.set_field_label(0, "Plate");
        draft.set_field_required(0, true);
        draft.set_field_name(1, "gone");
        draft.set_field_name(2, "fuel");
        draft.set_field_label(2, "Fuel");
        draft.set_field_type(2, FieldType::Select);
        draft.set_field_options(2, "petrol, diesel, ,electric");
        draft.remove_field(1);
        draft.remove_field(9);

        assert_eq!(
            serde_json::to_value(draft.serialize()).unwrap(),
            json!({
                "name": "Vehicles",
                "fields": [
                    {"name": "plate", "label": "Plate", "field_type": "text", "required": true, "order": 0},
                    {"name": "fuel", "label": "Fuel", "field_type": "select", "required": false, "order": 1,
                     "options": ["petrol", "diesel", "electric"]}
                ]
            })
        );
    }

    #[test]
    fn leaving_select_drops_options() {
        let mut draft = CategoryDraft::new();
        draft.add_field();
        draft.set_field_type(0, FieldType::Select);
        draft.set_field_options(0, "a,b");
        draft.set_field_type(0, FieldType::Number);
        assert!(draft.fields[0].options.is_empty());

        draft.set_field_options(0, "c");
        assert!(draft.fields[0].options.is_empty());
    }

    #[test]
    fn loads_existing_category_in_declared_order() {
        let category: Category = serde_json::from_value(json!({
            "id": "c9",
            "name": "Paint",
            "fields": [
                {"id": "f2", "name": "finish", "label": "Finish", "field_type": "text", "order": 5},
                {"id": "f1", "name": "color", "label": "Color", "field_type": "select",
                 "options": ["red"], "required": true, "order": 1}
            ]
        }))
        .unwrap();

        let draft = CategoryDraft::from_category(&category);
        assert_eq!(draft.category_id(), Some("c9"));
        assert_eq!(draft.fields[0].name, "color");
        assert_eq!(draft.fields[0].options, vec!["red".to_string()]);

        let orders: Vec<i32> = draft.serialize().fields.iter().map(|f| f.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }
}
