//! Axum router configuration with middleware.
//!
//! Chat routes are under `/api/chat/`.
//! Middleware: CORS (any origin), request tracing.
//!
//! When `SUPPORTCHAT_WEB_DIR` points at an existing directory (the built
//! chat widget), it is served as a fallback. API routes take priority.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Environment variable naming the widget's static directory.
pub const WEB_DIR_ENV: &str = "SUPPORTCHAT_WEB_DIR";

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let chat_routes = Router::new()
        .route("/message", post(handlers::chat::send_message))
        .route("/history/{session_id}", get(handlers::chat::get_history));

    let mut router = Router::new()
        .nest("/api/chat", chat_routes)
        .route("/", get(banner))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if let Ok(web_dir) = std::env::var(WEB_DIR_ENV) {
        if std::path::Path::new(&web_dir).is_dir() {
            let index_path = format!("{web_dir}/index.html");
            let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
            router = router.fallback_service(serve_dir);
            tracing::info!(path = %web_dir, "Widget static file serving enabled");
        } else {
            tracing::warn!(path = %web_dir, "Widget directory not found, serving API only");
        }
    }

    router
}

/// GET / - Plain-text liveness banner.
async fn banner() -> &'static str {
    "Spur Chat API is running 🚀"
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use secrecy::SecretString;
    use serde_json::{Value, json};
    use supportchat_infra::llm::gemini::GeminiProvider;
    use supportchat_infra::sqlite::conversation::SqliteConversationRepository;
    use supportchat_infra::sqlite::pool::DatabasePool;
    use supportchat_types::config::AppConfig;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct TestApp {
        router: Router,
        _server: MockServer,
        _dir: tempfile::TempDir,
    }

    async fn test_app(gemini: ResponseTemplate) -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("chat.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/v1beta/models/.+:generateContent$"))
            .respond_with(gemini)
            .mount(&server)
            .await;

        let provider = GeminiProvider::new(
            SecretString::from("test-key".to_string()),
            "gemini-2.5-flash".to_string(),
        )
        .unwrap()
        .with_base_url(server.uri());

        let state = AppState::new(
            SqliteConversationRepository::new(pool),
            provider,
            &AppConfig::default(),
        );

        TestApp {
            router: build_router(state),
            _server: server,
            _dir: dir,
        }
    }

    fn gemini_reply(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        }))
    }

    async fn send(router: &Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat/message")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        call(router, request).await
    }

    async fn history(router: &Router, session_id: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(format!("/api/chat/history/{session_id}"))
            .body(Body::empty())
            .unwrap();
        call(router, request).await
    }

    async fn call(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn hello_then_history() {
        let app = test_app(gemini_reply("Hi! How can I help you today?")).await;

        let (status, body) = send(&app.router, r#"{"message": "Hello"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "Hi! How can I help you today?");
        let session_id = body["sessionId"].as_str().unwrap().to_string();
        assert!(!session_id.is_empty());

        let (status, body) = history(&app.router, &session_id).await;
        assert_eq!(status, StatusCode::OK);
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["text"], "Hello");
        assert_eq!(entries[0]["sender"], "user");
        assert_eq!(entries[1]["text"], "Hi! How can I help you today?");
        assert_eq!(entries[1]["sender"], "ai");
        assert!(entries[0]["id"].is_string());
    }

    #[tokio::test]
    async fn follow_up_appends_to_same_session() {
        let app = test_app(gemini_reply("Sure.")).await;

        let (_, body) = send(&app.router, r#"{"message": "Do you ship to Canada?"}"#).await;
        let session_id = body["sessionId"].as_str().unwrap().to_string();

        let follow_up = json!({"message": "How long?", "sessionId": session_id}).to_string();
        let (status, body) = send(&app.router, &follow_up).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sessionId"], session_id.as_str());

        let (_, body) = history(&app.router, &session_id).await;
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn empty_message_is_a_500() {
        let app = test_app(gemini_reply("unused")).await;

        let (status, body) = send(&app.router, r#"{"message": "   "}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Message cannot be empty");

        let (status, body) = send(&app.router, r#"{}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Message cannot be empty");
    }

    #[tokio::test]
    async fn malformed_body_is_a_500() {
        let app = test_app(gemini_reply("unused")).await;

        let (status, body) = send(&app.router, "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn unknown_session_on_send_is_a_500() {
        let app = test_app(gemini_reply("unused")).await;

        let (status, body) =
            send(&app.router, r#"{"message": "Hi", "sessionId": "no-such-session"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("persistence failure"));
    }

    #[tokio::test]
    async fn provider_failure_is_a_500() {
        let app = test_app(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "Backend exploded", "status": "INTERNAL"}
        })))
        .await;

        let (status, body) = send(&app.router, r#"{"message": "Hello"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("Backend exploded"));
    }

    #[tokio::test]
    async fn empty_provider_reply_uses_fallback() {
        let empty = ResponseTemplate::new(200).set_body_json(json!({"candidates": []}));
        let app = test_app(empty).await;

        let (status, body) = send(&app.router, r#"{"message": "Hello"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "I apologize, I couldn't generate a response.");
    }

    #[tokio::test]
    async fn unknown_history_is_empty() {
        let app = test_app(gemini_reply("unused")).await;

        let (status, body) = history(&app.router, "never-used").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn banner_and_health() {
        let app = test_app(gemini_reply("unused")).await;

        let response = app
            .router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).starts_with("Spur Chat API is running"));

        let (status, body) = call(
            &app.router,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = test_app(gemini_reply("unused")).await;

        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://widget.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
