use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Public catalog routes
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/{id}", get(handlers::get_product))
        .with_state(service)
}

/// Product editing routes (require a session)
pub fn admin_routes(service: Arc<ProductService>) -> Router {
    // Upload cap follows the per-image limit, not the global body limit
    let upload_body_limit = service.upload_body_limit();

    Router::new()
        .route(
            "/api/admin/products",
            get(handlers::admin_list_products).post(handlers::create_product),
        )
        .route(
            "/api/admin/products/{id}",
            put(handlers::update_product).delete(handlers::delete_product),
        )
        .route(
            "/api/admin/products/{id}/images",
            post(handlers::upload_images).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .route(
            "/api/admin/products/{id}/images/{index}",
            delete(handlers::remove_image),
        )
        .with_state(service)
}
