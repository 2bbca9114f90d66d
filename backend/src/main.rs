mod config;
mod guard;

use crate::config::ServerConfig;
use actix_web::http::header;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let token = req.cookie(guard::TOKEN_COOKIE);
    if let Some(location) = guard::login_redirect(req.path(), token.as_ref().map(|c| c.value())) {
        return HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish();
    }

    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open browser: {err}");
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn anonymous_page_load_is_redirected_to_login() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let req = test::TestRequest::get().uri("/categories").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/login?from=%2Fcategories")
        );
    }

    #[actix_web::test]
    async fn token_cookie_skips_the_redirect() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let req = test::TestRequest::get()
            .uri("/categories")
            .cookie(Cookie::new("token", "abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_ne!(resp.status(), StatusCode::FOUND);
    }

    #[actix_web::test]
    async fn login_page_is_public() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let req = test::TestRequest::get().uri("/login").to_request();
        let resp = test::call_service(&app, req).await;

        assert_ne!(resp.status(), StatusCode::FOUND);
    }
}
