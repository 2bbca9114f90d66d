use indexmap::IndexMap;

use crate::error::AppError;
use crate::model::asset::Asset;
use crate::model::category::{Category, Field, FieldKind};
use crate::requests::{AssetSubmission, FieldSubmission};

/// Editable state of the asset form.
///
/// Values are kept in insertion order. `serialize` emits them in that order,
/// not in the category's declared field order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetDraft {
    name: String,
    category: Option<String>,
    /// Id of the asset being edited. `Some` locks the category.
    editing: Option<String>,
    fields: IndexMap<String, Option<String>>,
}

impl AssetDraft {
    /// Blank draft for creating a new asset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the draft for `existing`, or a blank one when creating.
    ///
    /// Values are folded in wire order, so a duplicated `field_name` keeps
    /// its last value.
    pub fn render(existing: Option<&Asset>) -> Self {
        let Some(asset) = existing else {
            return Self::new();
        };

        let mut fields = IndexMap::new();
        for value in &asset.fields {
            fields.insert(value.field_name.clone(), Some(value.value.clone()));
        }

        Self {
            name: asset.name.clone(),
            category: asset.category_id().map(str::to_string),
            editing: Some(asset.id.clone()),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn asset_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// True when the category control must be disabled.
    pub fn category_locked(&self) -> bool {
        self.is_editing()
    }

    /// Switches the schema while creating. Entered values are dropped since
    /// they belonged to the previous schema.
    ///
    /// Returns `false` and leaves the draft untouched in edit mode.
    pub fn select_category(&mut self, category_id: impl Into<String>) -> bool {
        if self.category_locked() {
            return false;
        }
        let category_id = category_id.into();
        self.category = (!category_id.is_empty()).then_some(category_id);
        self.fields.clear();
        true
    }

    /// Looks the selected category up in the currently known set.
    pub fn selected_category<'c>(&self, categories: &'c [Category]) -> Option<&'c Category> {
        let id = self.category.as_deref()?;
        categories.iter().find(|c| c.id == id)
    }

    pub fn update_field(&mut self, field_name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field_name.into(), Some(value.into()));
    }

    /// Marks a value as absent without forgetting its position.
    pub fn clear_field(&mut self, field_name: &str) {
        if let Some(value) = self.fields.get_mut(field_name) {
            *value = None;
        }
    }

    /// Applies what the user typed into a control. Emptying a control clears
    /// its value rather than storing an empty string.
    pub fn input(&mut self, field_name: &str, value: String) {
        if value.is_empty() {
            self.clear_field(field_name);
        } else {
            self.update_field(field_name, value);
        }
    }

    /// Current value of `field_name`, empty when unset.
    pub fn value(&self, field_name: &str) -> &str {
        self.fields
            .get(field_name)
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// One control per field of the selected category, in declared order.
    ///
    /// Empty when no category is selected or the selected one is not in
    /// `categories`; the form then simply shows no dependent fields.
    pub fn controls(&self, categories: &[Category]) -> Vec<FieldControl> {
        let Some(category) = self.selected_category(categories) else {
            return Vec::new();
        };
        category
            .ordered_fields()
            .into_iter()
            .map(|field| FieldControl::for_field(field, self.value(&field.name)))
            .collect()
    }

    /// Only the category is checked here. Required fields are enforced by
    /// the input controls themselves (`FieldControl::required`).
    pub fn validate(&self) -> Result<(), AppError> {
        match self.category.as_deref() {
            Some(id) if !id.is_empty() => Ok(()),
            _ => Err(AppError::MissingCategory),
        }
    }

    pub fn serialize(&self) -> Result<AssetSubmission, AppError> {
        self.validate()?;
        let category = self.category.clone().unwrap_or_default();

        let fields = self
            .fields
            .iter()
            .map(|(name, value)| FieldSubmission {
                name: name.clone(),
                value: value.clone().unwrap_or_default(),
            })
            .collect();

        Ok(AssetSubmission {
            name: self.name.clone(),
            category,
            fields,
        })
    }
}

/// Input widget for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Text,
    Number,
    Date,
    /// Closed choice between the listed options.
    Choice(Vec<String>),
}

impl Widget {
    pub fn for_kind(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Text => Widget::Text,
            FieldKind::Number => Widget::Number,
            FieldKind::Date => Widget::Date,
            FieldKind::Select(options) if !options.is_empty() => Widget::Choice(options.clone()),
            FieldKind::Select(_) => Widget::Text,
        }
    }

    /// HTML `type` attribute for non-choice widgets.
    pub fn input_type(&self) -> &'static str {
        match self {
            Widget::Text | Widget::Choice(_) => "text",
            Widget::Number => "number",
            Widget::Date => "date",
        }
    }
}

/// Everything the view needs to draw one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldControl {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub widget: Widget,
    pub value: String,
}

impl FieldControl {
    fn for_field(field: &Field, value: &str) -> Self {
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            required: field.required,
            widget: Widget::for_kind(&field.kind),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::asset::{CategoryRef, FieldValue};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn color_category() -> Category {
        serde_json::from_value(json!({
            "id": "c1",
            "name": "Paint",
            "fields": [{
                "id": "f1", "name": "color", "label": "Color",
                "type": "select", "options": ["red", "blue"], "required": true
            }]
        }))
        .unwrap()
    }

    fn laptop_category() -> Category {
        serde_json::from_value(json!({
            "id": "c2",
            "name": "Laptops",
            "fields": [
                {"id": "f3", "name": "bought", "label": "Bought", "field_type": "date", "order": 2},
                {"id": "f1", "name": "serial", "label": "Serial", "field_type": "text", "required": true, "order": 0},
                {"id": "f2", "name": "ram", "label": "RAM", "field_type": "number", "order": 1}
            ]
        }))
        .unwrap()
    }

    fn value(name: &str, value: &str) -> FieldValue {
        FieldValue {
            id: format!("v-{name}"),
            field_name: name.to_string(),
            field_label: name.to_uppercase(),
            value: value.to_string(),
        }
    }

    fn laptop(fields: Vec<FieldValue>) -> Asset {
        Asset {
            id: "a1".into(),
            name: "ThinkPad".into(),
            category: Some(CategoryRef {
                id: "c2".into(),
                name: "Laptops".into(),
            }),
            fields,
            vendor_name: None,
        }
    }

    #[test]
    fn render_existing_copies_every_value() {
        let asset = laptop(vec![value("serial", "X1"), value("ram", "16")]);
        let draft = AssetDraft::render(Some(&asset));

        let values: Vec<(&str, Option<&str>)> = draft.values().collect();
        assert_eq!(values, vec![("serial", Some("X1")), ("ram", Some("16"))]);
        assert_eq!(draft.name(), "ThinkPad");
        assert_eq!(draft.category_id(), Some("c2"));
        assert_eq!(draft.asset_id(), Some("a1"));
    }

    #[test]
    fn render_duplicate_field_keeps_last_value() {
        let asset = laptop(vec![
            value("serial", "old"),
            value("ram", "8"),
            value("serial", "new"),
        ]);
        let draft = AssetDraft::render(Some(&asset));

        assert_eq!(draft.value("serial"), "new");
        assert_eq!(draft.values().count(), 2);
    }

    #[test]
    fn render_without_existing_is_blank() {
        let draft = AssetDraft::render(None);
        assert_eq!(draft, AssetDraft::new());
        assert!(!draft.is_editing());
        assert_eq!(draft.category_id(), None);
    }

    #[test]
    fn switching_category_while_creating_clears_values() {
        let mut draft = AssetDraft::new();
        assert!(draft.select_category("c1"));
        draft.update_field("color", "red");
        draft.update_field("extra", "x");

        assert!(draft.select_category("c2"));
        assert_eq!(draft.values().count(), 0);
        assert_eq!(draft.category_id(), Some("c2"));

        // Re-selecting the same category still starts over.
        draft.update_field("serial", "S");
        assert!(draft.select_category("c2"));
        assert_eq!(draft.values().count(), 0);
    }

    #[test]
    fn category_is_locked_while_editing() {
        let asset = laptop(vec![value("serial", "X1")]);
        let mut draft = AssetDraft::render(Some(&asset));

        assert!(draft.category_locked());
        assert!(!draft.select_category("c1"));
        draft.update_field("serial", "X2");
        draft.set_name("Renamed");

        assert_eq!(draft.category_id(), Some("c2"));
        assert_eq!(draft.value("serial"), "X2");
    }

    #[test]
    fn controls_follow_declared_order_and_types() {
        let categories = vec![color_category(), laptop_category()];
        let mut draft = AssetDraft::new();
        draft.select_category("c2");
        draft.update_field("ram", "16");

        let controls = draft.controls(&categories);
        let summary: Vec<(&str, &Widget, &str, bool)> = controls
            .iter()
            .map(|c| (c.name.as_str(), &c.widget, c.value.as_str(), c.required))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("serial", &Widget::Text, "", true),
                ("ram", &Widget::Number, "16", false),
                ("bought", &Widget::Date, "", false),
            ]
        );
    }

    #[test]
    fn select_with_options_becomes_choice() {
        let categories = vec![color_category()];
        let mut draft = AssetDraft::new();
        draft.select_category("c1");

        let controls = draft.controls(&categories);
        assert_eq!(
            controls[0].widget,
            Widget::Choice(vec!["red".to_string(), "blue".to_string()])
        );
        assert!(controls[0].required);
    }

    #[test]
    fn select_without_options_falls_back_to_text() {
        let kind = FieldKind::Select(Vec::new());
        assert_eq!(Widget::for_kind(&kind), Widget::Text);
        assert_eq!(Widget::for_kind(&kind).input_type(), "text");
        assert_eq!(Widget::Date.input_type(), "date");
    }

    #[test]
    fn unknown_category_renders_no_fields() {
        let mut asset = laptop(vec![value("serial", "X1")]);
        asset.category = Some(CategoryRef {
            id: "gone".into(),
            name: "Deleted".into(),
        });
        let draft = AssetDraft::render(Some(&asset));

        assert!(draft.selected_category(&[laptop_category()]).is_none());
        assert!(draft.controls(&[laptop_category()]).is_empty());
        // The draft itself survives; it can still be submitted.
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn validate_requires_category() {
        let mut draft = AssetDraft::new();
        draft.set_name("Widget");
        assert_eq!(draft.validate(), Err(AppError::MissingCategory));
        assert_eq!(draft.serialize(), Err(AppError::MissingCategory));

        assert!(draft.select_category(""));
        assert_eq!(draft.validate(), Err(AppError::MissingCategory));
    }

    #[test]
    fn serialize_keeps_top_level_keys_and_coerces_values() {
        let mut draft = AssetDraft::new();
        draft.select_category("c2");
        draft.update_field("ram", 5.to_string());
        draft.update_field("serial", "S1");
        draft.clear_field("serial");

        let submission = draft.serialize().unwrap();
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "name": "",
                "category": "c2",
                "fields": [
                    {"name": "ram", "value": "5"},
                    {"name": "serial", "value": ""}
                ]
            })
        );
    }

    #[test]
    fn emptied_input_clears_value_in_place() {
        let mut draft = AssetDraft::new();
        draft.select_category("c2");
        draft.input("serial", "S1".to_string());
        draft.input("ram", "8".to_string());
        draft.input("serial", String::new());
        draft.input("bought", String::new());

        let values: Vec<(&str, Option<&str>)> = draft.values().collect();
        assert_eq!(values, vec![("serial", None), ("ram", Some("8"))]);
        assert_eq!(draft.value("serial"), "");
    }

    #[test]
    fn serialize_uses_insertion_order() {
        let mut draft = AssetDraft::new();
        draft.select_category("c2");
        draft.update_field("bought", "2024-05-01");
        draft.update_field("serial", "S1");
        draft.update_field("bought", "2024-06-01");

        let names: Vec<String> = draft
            .serialize()
            .unwrap()
            .fields
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["bought", "serial"]);
    }

    #[test]
    fn create_widget_scenario() {
        let categories = vec![color_category()];
        let mut draft = AssetDraft::render(None);
        draft.select_category("c1");
        draft.set_name("Widget");
        draft.update_field("color", "red");

        assert_eq!(draft.controls(&categories)[0].value, "red");
        assert_eq!(
            draft.serialize().unwrap(),
            AssetSubmission {
                name: "Widget".into(),
                category: "c1".into(),
                fields: vec![FieldSubmission {
                    name: "color".into(),
                    value: "red".into(),
                }],
            }
        );
    }
}
