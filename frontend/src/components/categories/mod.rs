//! Category pages. Admins and vendors may browse, only admins may change.

pub mod form;
pub mod page;

pub use page::CategoriesPage;
