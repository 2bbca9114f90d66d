//! Shared types for the asset administration frontend and its static host.
//!
//! Everything in this crate is plain data plus pure state transitions, so it
//! compiles for both the browser (`frontend`) and the native host (`backend`)
//! and can be unit-tested without a browser.

pub mod api;
pub mod collection;
pub mod error;
pub mod form;
pub mod model;
pub mod requests;
pub mod routes;
pub mod session;
