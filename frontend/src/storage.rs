//! Browser persistence for credentials.
//!
//! Tokens live in `localStorage` for the views and are mirrored into cookies
//! so the static host can redirect anonymous page loads to the login page.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

use common::session::{CredentialStore, Credentials};

const TOKEN_KEY: &str = "token";
const REFRESH_KEY: &str = "refreshToken";

const TOKEN_MAX_AGE: u32 = 24 * 60 * 60;
const REFRESH_MAX_AGE: u32 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl BrowserStore {
    /// Re-issues the token cookie for a token restored from `localStorage`.
    pub fn touch_cookie(&self, token: &str) {
        set_cookie(TOKEN_KEY, token, TOKEN_MAX_AGE);
    }
}

impl CredentialStore for BrowserStore {
    fn access_token(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&mut self, credentials: &Credentials) {
        if let Some(storage) = local_storage() {
            storage.set_item(TOKEN_KEY, &credentials.access).ok();
            if let Some(refresh) = &credentials.refresh {
                storage.set_item(REFRESH_KEY, refresh).ok();
            }
        }
        set_cookie(TOKEN_KEY, &credentials.access, TOKEN_MAX_AGE);
        if let Some(refresh) = &credentials.refresh {
            set_cookie(REFRESH_KEY, refresh, REFRESH_MAX_AGE);
        }
    }

    fn clear(&mut self) {
        if let Some(storage) = local_storage() {
            storage.remove_item(TOKEN_KEY).ok();
            storage.remove_item(REFRESH_KEY).ok();
        }
        set_cookie(TOKEN_KEY, "", 0);
        set_cookie(REFRESH_KEY, "", 0);
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn set_cookie(name: &str, value: &str, max_age: u32) {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok());
    if let Some(document) = document {
        document
            .set_cookie(&format!("{name}={value}; max-age={max_age}; path=/; SameSite=Lax"))
            .ok();
    }
}
