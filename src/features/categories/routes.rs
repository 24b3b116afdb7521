use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create public routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{id}", get(handlers::get_category))
        .with_state(service)
}

/// Category editing routes (require a session)
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/admin/categories", post(handlers::create_category))
        .route(
            "/api/admin/categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
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
        let service = Arc::new(CategoryService::new(memory_store()));
        let app = routes(Arc::clone(&service)).merge(with_admin_session(admin_routes(service)));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_list_flat_and_tree() {
        let server = server();

        let flat: Value = server.get("/api/categories").await.json();
        assert_eq!(flat["meta"]["total"], 5);
        assert_eq!(flat["data"][2]["parentId"], "c1");

        let tree: Value = server
            .get("/api/categories")
            .add_query_param("tree", "true")
            .await
            .json();
        assert_eq!(tree["data"].as_array().unwrap().len(), 2);
        assert_eq!(tree["data"][0]["children"][1]["id"], "c4");
    }

    #[tokio::test]
    async fn test_get_unknown_category_is_404() {
        server()
            .get("/api/categories/nope")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let server = server();

        let response = server
            .post("/api/admin/categories")
            .json(&json!({ "parentId": "c2", "name": { "en": "Cloud", "zh": "云服务" } }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let id = response.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        server
            .put(&format!("/api/admin/categories/{}", id))
            .json(&json!({ "parentId": null, "name": { "en": "Cloud", "zh": "" } }))
            .await
            .assert_status_ok();

        let fetched: Value = server.get(&format!("/api/categories/{}", id)).await.json();
        assert!(fetched["data"]["parentId"].is_null());

        server
            .delete(&format!("/api/admin/categories/{}", id))
            .await
            .assert_status_ok();
        server
            .delete(&format!("/api/admin/categories/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        server()
            .post("/api/admin/categories")
            .json(&json!({ "name": { "en": "", "zh": "" } }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
