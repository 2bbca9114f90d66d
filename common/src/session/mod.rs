//! Signed-in identity and what it may see.
//!
//! The session is a plain value owned by the root view and handed to every
//! page. It changes only on login, logout, initialization and on a 401 from
//! the API. Role checks here decide what gets rendered; the API enforces
//! the actual permissions.

mod capabilities;

pub use capabilities::Capabilities;

use crate::model::user::User;

/// Tokens issued by `POST /api/login/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access: String,
    pub refresh: Option<String>,
}

/// Where credentials survive a page reload.
pub trait CredentialStore {
    /// Access token from a previous visit, if any.
    fn access_token(&self) -> Option<String>;

    fn save(&mut self, credentials: &Credentials);

    /// Removes every persisted credential.
    fn clear(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    token: Option<String>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh state before initialization: anonymous and still loading.
    pub fn new() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_user(self.user.as_ref())
    }

    /// Starts initialization from persisted credentials.
    ///
    /// Returns the token whose identity must be looked up; the caller then
    /// reports back through [`identity_resolved`](Self::identity_resolved) or
    /// [`identity_rejected`](Self::identity_rejected). With nothing persisted
    /// initialization is already finished.
    pub fn begin(&mut self, store: &impl CredentialStore) -> Option<String> {
        match store.access_token().filter(|t| !t.is_empty()) {
            Some(token) => {
                self.token = Some(token.clone());
                Some(token)
            }
            None => {
                self.finish_loading();
                None
            }
        }
    }

    /// Records the identity looked up for `token`.
    ///
    /// Ignored (returns `false`) when `token` is no longer the session's
    /// token, e.g. the user logged out or in again while the lookup ran.
    pub fn identity_resolved(&mut self, token: &str, user: User) -> bool {
        if !self.holds(token) {
            return false;
        }
        self.user = Some(user);
        self.finish_loading();
        true
    }

    /// `token` turned out expired or invalid: forget everything.
    ///
    /// Same staleness rule as [`identity_resolved`](Self::identity_resolved).
    pub fn identity_rejected(&mut self, token: &str, store: &mut impl CredentialStore) -> bool {
        if !self.holds(token) {
            return false;
        }
        self.reset(store);
        self.finish_loading();
        true
    }

    /// Persists fresh credentials; the identity lookup follows.
    pub fn login(&mut self, credentials: &Credentials, store: &mut impl CredentialStore) {
        store.save(credentials);
        self.token = Some(credentials.access.clone());
        self.user = None;
    }

    pub fn logout(&mut self, store: &mut impl CredentialStore) {
        self.reset(store);
        self.finish_loading();
    }

    /// The API answered 401 to some request.
    pub fn unauthorized(&mut self, store: &mut impl CredentialStore) {
        self.reset(store);
        self.finish_loading();
    }

    fn holds(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token)
    }

    fn reset(&mut self, store: &mut impl CredentialStore) {
        store.clear();
        self.user = None;
        self.token = None;
    }

    fn finish_loading(&mut self) {
        self.loading = false;
    }
}

/// Credential store backed by plain memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub credentials: Option<Credentials>,
}

impl CredentialStore for MemoryStore {
    fn access_token(&self) -> Option<String> {
        self.credentials.as_ref().map(|c| c.access.clone())
    }

    fn save(&mut self, credentials: &Credentials) {
        self.credentials = Some(credentials.clone());
    }

    fn clear(&mut self) {
        self.credentials = None;
    }
}
