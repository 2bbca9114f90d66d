//! Client-side routes and their guards.

use crate::session::{Capabilities, SessionState};

/// Paths reachable without a session. Shared with the static host, which
/// redirects everything else to the login page when no token cookie is sent.
pub const PUBLIC_PATHS: &[&str] = &["/login", "/register"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Assets,
    MyAssets,
    Categories,
    Users,
}

/// What the root view should do for the requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Identity lookup still running.
    Wait,
    Render(Route),
    Redirect(Route),
}

impl Route {
    /// Unknown paths land on `Home`.
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/assets" => Route::Assets,
            "/my-assets" => Route::MyAssets,
            "/categories" => Route::Categories,
            "/users" => Route::Users,
            _ => Route::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Assets => "/assets",
            Route::MyAssets => "/my-assets",
            Route::Categories => "/categories",
            Route::Users => "/users",
        }
    }

    pub fn is_public(self) -> bool {
        PUBLIC_PATHS.contains(&self.path())
    }

    pub fn permitted(self, capabilities: &Capabilities) -> bool {
        match self {
            Route::Home | Route::Login | Route::Assets => true,
            Route::MyAssets => capabilities.view_my_assets,
            Route::Categories => capabilities.view_categories,
            Route::Users => capabilities.manage_users,
        }
    }

    pub fn resolve(self, session: &SessionState) -> Resolution {
        if session.is_loading() {
            return Resolution::Wait;
        }
        if !session.is_authenticated() {
            return match self {
                Route::Home | Route::Login => Resolution::Render(self),
                _ => Resolution::Redirect(Route::Login),
            };
        }
        if self == Route::Login || !self.permitted(&session.capabilities()) {
            return Resolution::Redirect(Route::Home);
        }
        Resolution::Render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::{Role, User};
    use crate::session::{Credentials, MemoryStore};

    fn signed_in(role: Role) -> SessionState {
        let store = MemoryStore {
            credentials: Some(Credentials {
                access: "t".into(),
                refresh: None,
            }),
        };
        let mut session = SessionState::new();
        session.begin(&store);
        session.identity_resolved("t", User {
            id: "1".into(),
            username: "u".into(),
            role,
            company_name: None,
        });
        session
    }

    fn anonymous() -> SessionState {
        let mut session = SessionState::new();
        session.begin(&MemoryStore::default());
        session
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Assets,
            Route::MyAssets,
            Route::Categories,
            Route::Users,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/assets/"), Route::Assets);
        assert_eq!(Route::from_path("/nowhere"), Route::Home);
        assert!(Route::Login.is_public());
        assert!(!Route::Assets.is_public());
    }

    #[test]
    fn waits_while_loading() {
        assert_eq!(Route::Assets.resolve(&SessionState::new()), Resolution::Wait);
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        let session = anonymous();
        assert_eq!(
            Route::Categories.resolve(&session),
            Resolution::Redirect(Route::Login)
        );
        assert_eq!(Route::Login.resolve(&session), Resolution::Render(Route::Login));
        assert_eq!(Route::Home.resolve(&session), Resolution::Render(Route::Home));
    }

    #[test]
    fn role_guards() {
        let user = signed_in(Role::User);
        assert_eq!(Route::Assets.resolve(&user), Resolution::Render(Route::Assets));
        assert_eq!(
            Route::Categories.resolve(&user),
            Resolution::Redirect(Route::Home)
        );

        let vendor = signed_in(Role::Vendor);
        assert_eq!(
            Route::MyAssets.resolve(&vendor),
            Resolution::Render(Route::MyAssets)
        );
        assert_eq!(Route::Users.resolve(&vendor), Resolution::Redirect(Route::Home));

        let admin = signed_in(Role::Admin);
        assert_eq!(Route::Users.resolve(&admin), Resolution::Render(Route::Users));
        assert_eq!(Route::Login.resolve(&admin), Resolution::Redirect(Route::Home));
    }
}
