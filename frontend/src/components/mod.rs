//! Pages and their building blocks.
//!
//! Every page receives the session explicitly through its props (usually
//! [`PageProps`]) rather than reading it from an ambient context.

use yew::{Callback, Properties};

use common::session::SessionState;

pub mod assets;
pub mod categories;
pub mod home;
pub mod login;
pub mod navigation;
pub mod users;

#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub session: SessionState,
    /// Raised when the API answers 401; the root view clears the session.
    pub on_unauthorized: Callback<()>,
}
