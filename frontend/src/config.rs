//! Build-time configuration.

/// Base URL of the asset API, taken from `ASSET_API_URL` when the frontend is compiled.
pub const API_URL: &str = match option_env!("ASSET_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};
