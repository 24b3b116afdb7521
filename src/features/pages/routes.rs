use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::pages::handlers;
use crate::features::pages::services::PageService;

pub fn routes(service: Arc<PageService>) -> Router {
    Router::new()
        .route("/api/pages/{slug}", get(handlers::get_page))
        .with_state(service)
}

/// Page editing routes (require a session)
pub fn admin_routes(service: Arc<PageService>) -> Router {
    Router::new()
        .route("/api/admin/pages", get(handlers::list_pages))
        .route("/api/admin/pages/{slug}", put(handlers::save_page))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{memory_store, with_admin_session};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let service = Arc::new(PageService::new(memory_store()));
        let app = routes(Arc::clone(&service)).merge(with_admin_session(admin_routes(service)));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_edit_then_read_page() {
        let server = server();

        server
            .put("/api/admin/pages/about")
            .json(&json!({
                "title": { "en": "Who we are", "zh": "我们是谁" },
                "content": { "en": "Since 2024.", "zh": "" }
            }))
            .await
            .assert_status_ok();

        let page: Value = server.get("/api/pages/about").await.json();
        assert_eq!(page["data"]["title"]["en"], "Who we are");

        let list: Value = server.get("/api/admin/pages").await.json();
        assert_eq!(list["meta"]["total"], 3);
    }

    #[tokio::test]
    async fn test_invalid_slug_is_rejected() {
        server()
            .put("/api/admin/pages/Terms_Of_Use")
            .json(&json!({ "title": { "en": "Terms" } }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_page_is_404() {
        server()
            .get("/api/pages/careers")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
