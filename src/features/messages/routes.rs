use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::messages::handlers;
use crate::features::messages::services::MessageService;

/// Create routes for the contact form
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<MessageService>) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::send_message))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::memory_store;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let service = Arc::new(MessageService::new(memory_store()));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_send_message_localized_confirmation() {
        let email: String = SafeEmail().fake();

        let response = server()
            .post("/api/contact")
            .add_query_param("lang", "zh")
            .json(&json!({ "name": "李雷", "email": email, "message": "请联系我" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "留言发送成功！");
        assert_eq!(body["data"]["email"], email);
        assert!(body["data"]["date"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_submissions_are_rejected() {
        let server = server();

        server
            .post("/api/contact")
            .json(&json!({ "name": "Ann", "email": "not-an-email", "message": "hi" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/api/contact")
            .json(&json!({ "name": "", "email": "ann@example.com", "message": "hi" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/api/contact")
            .json(&json!({ "name": "Ann", "email": "ann@example.com" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
