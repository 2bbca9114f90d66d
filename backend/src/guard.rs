//! Login redirect for page loads without a session cookie.

use common::routes::PUBLIC_PATHS;

/// Cookie the frontend mirrors the access token into.
pub const TOKEN_COOKIE: &str = "token";

/// Where to send a request for `path`, or `None` to serve it.
///
/// Files (anything whose last segment has an extension) and public pages
/// are always served. Other paths need a non-empty token cookie.
pub fn login_redirect(path: &str, token: Option<&str>) -> Option<String> {
    if PUBLIC_PATHS.contains(&path) || is_file(path) {
        return None;
    }
    if token.is_some_and(|t| !t.is_empty()) {
        return None;
    }
    Some(format!("/login?from={}", urlencoding::encode(path)))
}

fn is_file(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_page_load_redirects_with_origin() {
        assert_eq!(
            login_redirect("/assets", None).as_deref(),
            Some("/login?from=%2Fassets")
        );
        assert_eq!(login_redirect("/", None).as_deref(), Some("/login?from=%2F"));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        assert!(login_redirect("/categories", Some("")).is_some());
    }

    #[test]
    fn token_lets_the_request_through() {
        assert_eq!(login_redirect("/users", Some("abc")), None);
    }

    #[test]
    fn public_pages_and_files_are_served() {
        assert_eq!(login_redirect("/login", None), None);
        assert_eq!(login_redirect("/register", None), None);
        assert_eq!(login_redirect("/frontend-1a2b.wasm", None), None);
        assert_eq!(login_redirect("/styles.css", None), None);
    }
}
