use crate::features::users::handlers::user_handler;
use crate::features::users::services::UserService;
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

/// Account management routes; every handler requires a super admin session
pub fn admin_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/admin/users",
            get(user_handler::list_users).post(user_handler::create_user),
        )
        .route(
            "/api/admin/users/{id}",
            put(user_handler::update_user).delete(user_handler::delete_user),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{memory_store, with_admin_session, with_super_admin_session};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use fake::{faker::internet::en::Username, Fake};
    use serde_json::{json, Value};

    fn service() -> Arc<UserService> {
        Arc::new(UserService::new(memory_store()))
    }

    #[tokio::test]
    async fn test_super_admin_creates_and_lists_users() {
        let server = TestServer::new(with_super_admin_session(admin_routes(service()))).unwrap();
        let username: String = Username().fake();

        let response = server
            .post("/api/admin/users")
            .json(&json!({ "username": username, "password": "secret" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["data"]["role"], "admin");
        assert!(created["data"].get("password").is_none());

        let list: Value = server.get("/api/admin/users").await.json();
        assert_eq!(list["meta"]["total"], 2);
    }

    #[tokio::test]
    async fn test_plain_admin_is_forbidden() {
        let server = TestServer::new(with_admin_session(admin_routes(service()))).unwrap();

        server
            .get("/api/admin/users")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let server = TestServer::new(with_super_admin_session(admin_routes(service()))).unwrap();

        let response = server
            .post("/api/admin/users")
            .json(&json!({ "username": "admin", "password": "x" }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["message"], "Username already taken.");
    }

    #[tokio::test]
    async fn test_cannot_delete_yourself() {
        let server = TestServer::new(with_super_admin_session(admin_routes(service()))).unwrap();

        let response = server
            .delete("/api/admin/users/u1")
            .add_query_param("lang", "zh")
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
        assert_eq!(response.json::<Value>()["message"], "不能删除自己。");

        server
            .delete("/api/admin/users/missing")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reset_password_via_put() {
        let server = TestServer::new(with_super_admin_session(admin_routes(service()))).unwrap();

        let response = server
            .put("/api/admin/users/u1")
            .json(&json!({ "username": "root", "password": "", "role": "super_admin" }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["username"], "root");
    }
}
