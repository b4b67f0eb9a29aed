#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use screenplay_api::config::ServerConfig;
use screenplay_api::router::build_app_router;
use screenplay_api::state::AppState;
use screenplay_llm::config::{LlmConfig, ProviderSettings};
use screenplay_llm::templates::TemplateLibrary;
use screenplay_llm::{
    Completion, CompletionError, CompletionGateway, CompletionProvider, ProviderRegistry,
};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The provider settings are never dialled;
/// tests inject stub providers instead.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        llm: LlmConfig {
            providers: vec![ProviderSettings {
                name: "stub".to_string(),
                base_url: "http://127.0.0.1:9".to_string(),
                api_key: None,
                model: "stub-model".to_string(),
                temperature: None,
                max_tokens: None,
            }],
            default_provider: "stub".to_string(),
            template_dir: None,
            request_timeout_secs: 5,
        },
    }
}

// ---------------------------------------------------------------------------
// Stub providers
// ---------------------------------------------------------------------------

/// Replies with a fixed text, recording nothing.
pub struct FixedReply {
    pub name: &'static str,
    pub text: &'static str,
}

#[async_trait]
impl CompletionProvider for FixedReply {
    fn name(&self) -> &str {
        self.name
    }

    async fn complete(&self, _prompt: &str) -> Result<Completion, CompletionError> {
        Ok(Completion {
            text: self.text.to_string(),
            tokens_used: Some(42),
        })
    }
}

/// Replies with the prompt it was given, so tests can see the rendered template.
pub struct EchoPrompt;

#[async_trait]
impl CompletionProvider for EchoPrompt {
    fn name(&self) -> &str {
        "echo"
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError> {
        Ok(Completion {
            text: prompt.to_string(),
            tokens_used: None,
        })
    }
}

/// Always fails the way an overloaded upstream does.
pub struct Unavailable;

#[async_trait]
impl CompletionProvider for Unavailable {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn complete(&self, _prompt: &str) -> Result<Completion, CompletionError> {
        Err(CompletionError::Api {
            status: 503,
            body: "upstream secret detail".to_string(),
        })
    }
}

/// Default registry: a single provider replying `"stub reply"`.
pub fn default_registry() -> ProviderRegistry {
    ProviderRegistry::new(Arc::new(FixedReply {
        name: "stub",
        text: "stub reply",
    }))
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with all middleware layers, using the
/// given database pool and the default stub provider.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, default_registry())
}

/// Same as [`build_test_app`] with a caller-supplied provider registry.
///
/// Uses the production `build_app_router`, so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app_with(pool: PgPool, providers: ProviderRegistry) -> Router {
    let config = test_config();
    let gateway = CompletionGateway::new(TemplateLibrary::builtin(), providers);

    let state = AppState {
        pool,
        gateway: Arc::new(gateway),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project and return its id as a string.
pub async fn create_project(pool: &PgPool, title: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        serde_json::json!({ "title": title }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}
