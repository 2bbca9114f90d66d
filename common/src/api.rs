//! Endpoint table of the asset API.

/// Every endpoint the views call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Login,
    Me,
    Categories,
    Category(&'a str),
    Assets,
    /// Assets referencing the given category id.
    AssetsInCategory(&'a str),
    MyAssets,
    Asset(&'a str),
    Users,
    User(&'a str),
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/api/login/".to_string(),
            Endpoint::Me => "/api/me/".to_string(),
            Endpoint::Categories => "/api/categories/".to_string(),
            Endpoint::Category(id) => format!("/api/categories/{id}/"),
            Endpoint::Assets | Endpoint::AssetsInCategory(_) => "/api/assets/".to_string(),
            Endpoint::MyAssets => "/api/assets/my_assets/".to_string(),
            Endpoint::Asset(id) => format!("/api/assets/{id}/"),
            Endpoint::Users => "/api/users/".to_string(),
            Endpoint::User(id) => format!("/api/users/{id}/"),
        }
    }

    /// Query parameters appended to [`path`](Self::path).
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        match self {
            Endpoint::AssetsInCategory(id) => vec![("category", *id)],
            _ => Vec::new(),
        }
    }

    /// Only login goes out without a bearer token.
    pub fn authenticated(&self) -> bool {
        !matches!(self, Endpoint::Login)
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Endpoint::Category("c1").path(), "/api/categories/c1/");
        assert_eq!(Endpoint::MyAssets.path(), "/api/assets/my_assets/");
        assert_eq!(Endpoint::AssetsInCategory("c1").path(), "/api/assets/");
        assert_eq!(Endpoint::AssetsInCategory("c1").query(), vec![("category", "c1")]);
        assert!(Endpoint::Assets.query().is_empty());
        assert!(!Endpoint::Login.authenticated());
        assert!(Endpoint::Me.authenticated());
        assert_eq!(
            Endpoint::User("7").url("http://localhost:8000/"),
            "http://localhost:8000/api/users/7/"
        );
    }
}
