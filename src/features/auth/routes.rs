use crate::core::middleware;
use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

/// Protected auth routes (require a session)
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/me", get(handlers::get_me))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::memory_store;
    use axum::http::{header, HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> TestServer {
        let service = Arc::new(AuthService::restore(memory_store()).await.unwrap());
        let app = Router::new()
            .merge(public_routes(Arc::clone(&service)))
            .merge(protected_routes(Arc::clone(&service)).route_layer(
                axum::middleware::from_fn_with_state(service, middleware::session_middleware),
            ));
        TestServer::new(app).unwrap()
    }

    fn bearer(token: &str) -> (HeaderName, HeaderValue) {
        (
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_login_me_logout_flow() {
        let server = server().await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "username": "admin", "password": "password123" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["tokenType"], "Bearer");
        assert_eq!(body["data"]["user"]["role"], "super_admin");
        assert!(body["data"]["user"].get("password").is_none());
        let token = body["data"]["accessToken"].as_str().unwrap().to_string();

        let (name, value) = bearer(&token);
        let me = server.get("/api/auth/me").add_header(name, value).await;
        me.assert_status_ok();
        assert_eq!(me.json::<Value>()["data"]["user"]["id"], "u1");

        let (name, value) = bearer(&token);
        server
            .post("/api/auth/logout")
            .add_header(name, value)
            .await
            .assert_status_ok();

        let (name, value) = bearer(&token);
        server
            .get("/api/auth/me")
            .add_header(name, value)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_failure_is_localized() {
        let server = server().await;

        let response = server
            .post("/api/auth/login")
            .add_query_param("lang", "zh")
            .json(&json!({ "username": "admin", "password": "wrong" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>()["message"], "用户名或密码错误");
    }

    #[tokio::test]
    async fn test_protected_routes_require_bearer_token() {
        let server = server().await;

        server
            .get("/api/auth/me")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get("/api/auth/me")
            .add_header(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
