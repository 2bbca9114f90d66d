//! One view's fetched snapshot of a collection.
//!
//! Mutations are applied locally as soon as the API call that caused them
//! succeeds, and the snapshot is reconciled on the next fetch. Two views of
//! the same collection may disagree until then.

use crate::error::AppError;
use crate::model::asset::Asset;
use crate::model::category::Category;
use crate::model::user::User;

/// Records addressable by id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Asset {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Category {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the snapshot with a fresh fetch.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Replaces the item with the same key in place, or appends it.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|i| i.key() == item.key()) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
    }

    /// Drops the item after the server confirmed its deletion.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key() != key);
        self.items.len() != before
    }
}

/// A category may only be deleted once no asset references it.
pub fn guard_category_delete(referencing_assets: usize) -> Result<(), AppError> {
    match referencing_assets {
        0 => Ok(()),
        count => Err(AppError::ConflictOnDelete { count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(id: &str, name: &str) -> Category {
        serde_json::from_value(json!({"id": id, "name": name, "fields": []})).unwrap()
    }

    #[test]
    fn upsert_replaces_in_place_or_appends() {
        let mut categories = Collection::new(vec![category("c1", "A"), category("c2", "B")]);
        categories.upsert(category("c1", "A2"));
        categories.upsert(category("c3", "C"));

        let names: Vec<&str> = categories.items().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A2", "B", "C"]);
    }

    #[test]
    fn delete_guard_blocks_referenced_category() {
        let err = guard_category_delete(2).unwrap_err();
        assert_eq!(err, AppError::ConflictOnDelete { count: 2 });
        assert!(err.to_string().contains("has 2 assets"));
    }

    #[test]
    fn unreferenced_category_is_removed_locally() {
        let mut categories = Collection::new(vec![category("c1", "A"), category("c2", "B")]);

        assert!(guard_category_delete(0).is_ok());
        assert!(categories.remove("c1"));
        assert!(!categories.remove("c1"));
        let ids: Vec<&str> = categories.items().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c2"]);
    }
}
