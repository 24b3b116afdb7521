use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::site::handlers;
use crate::features::site::services::SiteService;

/// Create routes for the localized public views
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<SiteService>) -> Router {
    Router::new()
        .route("/api/site/home", get(handlers::home))
        .route("/api/site/about", get(handlers::about))
        .route("/api/site/contact", get(handlers::contact))
        .route("/api/site/products", get(handlers::products))
        .route("/api/site/products/{id}", get(handlers::product))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::memory_store;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(SiteService::new(memory_store())))).unwrap()
    }

    #[tokio::test]
    async fn test_language_defaults_to_english() {
        let home: Value = server().get("/api/site/home").await.json();

        assert_eq!(home["data"]["lang"], "en");
        assert_eq!(home["data"]["page"]["title"], "Welcome to FutureCorp");
        assert_eq!(home["data"]["featured"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_chinese_views() {
        let server = server();

        let about: Value = server
            .get("/api/site/about")
            .add_query_param("lang", "zh")
            .await
            .json();
        assert_eq!(about["data"]["title"], "关于我们");

        let contact: Value = server
            .get("/api/site/contact")
            .add_query_param("lang", "zh")
            .await
            .json();
        assert_eq!(contact["data"]["title"], "联系我们");
    }

    #[tokio::test]
    async fn test_catalog_filter_and_tree() {
        let catalog: Value = server()
            .get("/api/site/products")
            .add_query_param("lang", "zh")
            .add_query_param("category", "c1")
            .await
            .json();

        assert_eq!(catalog["data"]["heading"], "电子产品");
        assert_eq!(catalog["data"]["selectedCategory"], "c1");
        assert_eq!(catalog["meta"]["total"], 2);
        assert_eq!(catalog["data"]["categories"][0]["children"][0]["name"], "计算机");
    }

    #[tokio::test]
    async fn test_product_detail_and_missing() {
        let server = server();

        let detail: Value = server.get("/api/site/products/p1").await.json();
        assert_eq!(detail["data"]["category"]["name"], "Computers");
        assert_eq!(detail["data"]["price"], "$2,999");

        server
            .get("/api/site/products/p42")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_language_is_rejected() {
        server()
            .get("/api/site/home")
            .add_query_param("lang", "fr")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
