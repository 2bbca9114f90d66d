//! Asset pages: the collection view, its card list and the schema-driven form.

pub mod form;
pub mod list;
pub mod page;

pub use page::{AssetScope, AssetsPage};
