//! HTTP client for the asset API.
//!
//! Every call returns `Result<_, AppError>`: a 401 becomes
//! `AppError::Unauthorized` so the caller can tear the session down, and
//! anything else that goes wrong becomes `AppError::NetworkOrServerFailure`.
//! Nothing is retried, de-duplicated or cancelled.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::api::Endpoint;
use common::error::AppError;
use common::model::asset::Asset;
use common::model::category::Category;
use common::model::user::User;
use common::requests::{AssetSubmission, CategorySubmission, LoginRequest, LoginResponse};
use common::session::SessionState;

use crate::config::API_URL;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl ApiClient {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            base_url: API_URL.to_string(),
            token: token.map(str::to_string),
        }
    }

    /// Client carrying the session's bearer token.
    pub fn for_session(session: &SessionState) -> Self {
        Self::new(session.token())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.send_json(Method::Post, Endpoint::Login, &body)
            .await?
            .json()
            .await
            .map_err(AppError::network)
    }

    pub async fn me(&self) -> Result<User, AppError> {
        self.fetch(Endpoint::Me).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, AppError> {
        self.fetch(Endpoint::Categories).await
    }

    pub async fn create_category(&self, body: &CategorySubmission) -> Result<Category, AppError> {
        self.send_json(Method::Post, Endpoint::Categories, body)
            .await?
            .json()
            .await
            .map_err(AppError::network)
    }

    pub async fn update_category(
        &self,
        id: &str,
        body: &CategorySubmission,
    ) -> Result<Category, AppError> {
        self.send_json(Method::Put, Endpoint::Category(id), body)
            .await?
            .json()
            .await
            .map_err(AppError::network)
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), AppError> {
        self.send(Method::Delete, Endpoint::Category(id)).await.map(drop)
    }

    pub async fn assets(&self) -> Result<Vec<Asset>, AppError> {
        self.fetch(Endpoint::Assets).await
    }

    pub async fn my_assets(&self) -> Result<Vec<Asset>, AppError> {
        self.fetch(Endpoint::MyAssets).await
    }

    pub async fn assets_in_category(&self, category_id: &str) -> Result<Vec<Asset>, AppError> {
        self.fetch(Endpoint::AssetsInCategory(category_id)).await
    }

    /// The response body is ignored; the list view re-fetches afterwards.
    pub async fn create_asset(&self, body: &AssetSubmission) -> Result<(), AppError> {
        self.send_json(Method::Post, Endpoint::Assets, body)
            .await
            .map(drop)
    }

    pub async fn update_asset(&self, id: &str, body: &AssetSubmission) -> Result<(), AppError> {
        self.send_json(Method::Put, Endpoint::Asset(id), body)
            .await
            .map(drop)
    }

    pub async fn delete_asset(&self, id: &str) -> Result<(), AppError> {
        self.send(Method::Delete, Endpoint::Asset(id)).await.map(drop)
    }

    pub async fn users(&self) -> Result<Vec<User>, AppError> {
        self.fetch(Endpoint::Users).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.send(Method::Delete, Endpoint::User(id)).await.map(drop)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, AppError> {
        self.send(Method::Get, endpoint)
            .await?
            .json()
            .await
            .map_err(AppError::network)
    }

    async fn send(&self, method: Method, endpoint: Endpoint<'_>) -> Result<Response, AppError> {
        let request = self.builder(method, endpoint).build();
        dispatch(request).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<Response, AppError> {
        let request = self.builder(method, endpoint).json(body);
        dispatch(request).await
    }

    fn builder(&self, method: Method, endpoint: Endpoint<'_>) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json")
        .query(endpoint.query());

        match (&self.token, endpoint.authenticated()) {
            (Some(token), true) => builder.header("Authorization", &format!("Bearer {token}")),
            _ => builder,
        }
    }
}

async fn dispatch(request: Result<Request, gloo_net::Error>) -> Result<Response, AppError> {
    let response = request
        .map_err(AppError::network)?
        .send()
        .await
        .map_err(AppError::network)?;
    AppError::from_status(response.status())?;
    Ok(response)
}
