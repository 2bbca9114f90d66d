//! Schema-driven form state.
//!
//! - [`asset::AssetDraft`]: the asset editor. Renders any category schema into
//!   a list of [`asset::FieldControl`]s, tracks the values typed so far and
//!   produces the [`AssetSubmission`](crate::requests::AssetSubmission) body.
//! - [`category::CategoryDraft`]: the admin editor for the schema itself.
//!
//! Drafts are transient. They are never persisted and never treated as the
//! source of truth for the records they were built from.

pub mod asset;
pub mod category;

pub use asset::{AssetDraft, FieldControl, Widget};
pub use category::CategoryDraft;
