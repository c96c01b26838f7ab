#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use quill_api::config::{ServerConfig, StoreBackend};
use quill_api::flash;
use quill_api::router::build_app_router;
use quill_api::state::AppState;
use quill_db::models::article::{Article, CreateArticle};
use quill_db::{ArticleStore, MemoryArticleStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
    }
}

/// A router over a fresh in-memory store, plus a handle on that store.
///
/// The router is cheap to clone; every clone shares the same store.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryArticleStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryArticleStore::new());
        let dyn_store: Arc<dyn ArticleStore> = store.clone();
        let config = test_config();
        let router = build_app_router(AppState::new(dyn_store, config.clone()), &config);
        Self { router, store }
    }

    /// Insert an article directly through the store.
    pub async fn seed(&self, title: &str, description: &str) -> Article {
        self.store
            .create(&CreateArticle {
                title: title.to_string(),
                description: Some(description.to_string()),
            })
            .await
            .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        self.send(
            Request::get(uri)
                .header(COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.send(json_request(Method::POST, uri, body)).await
    }

    pub async fn patch_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.send(json_request(Method::PATCH, uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.send(json_request(Method::PUT, uri, body)).await
    }

    /// Send a JSON body while presenting a `Cookie` header.
    pub async fn json_with_cookie(
        &self,
        method: Method,
        uri: &str,
        body: serde_json::Value,
        cookie: &str,
    ) -> Response {
        let mut request = json_request(method, uri, body);
        request
            .headers_mut()
            .insert(COOKIE, cookie.parse().unwrap());
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.send(
            Request::delete(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .unwrap()
}

/// The flash notice set by a response, if any.
pub fn flash_notice(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(flash::notice_from_set_cookie)
}

/// The raw flash `Set-Cookie` value, reduced to a `Cookie` request header.
pub fn flash_cookie(response: &Response) -> String {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(flash::FLASH_COOKIE))
        .and_then(|value| value.split(';').next())
        .expect("response should set the flash cookie")
        .to_string()
}
