#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use crate::features::auth::model::SessionUser;
#[cfg(test)]
use crate::features::users::models::UserRole;
#[cfg(test)]
use crate::modules::storage::{ContentStore, MemoryBackend};

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

/// Fresh in-memory store with no artificial latency
#[cfg(test)]
pub fn memory_store() -> Arc<ContentStore> {
    Arc::new(ContentStore::new(
        Arc::new(MemoryBackend::new()),
        Duration::ZERO,
    ))
}

#[cfg(test)]
pub fn session_user(id: &str, role: UserRole) -> SessionUser {
    SessionUser {
        id: id.to_string(),
        username: format!("user-{}", id),
        role,
        created_at: chrono::Utc::now(),
    }
}

#[cfg(test)]
async fn inject_super_admin_middleware(mut request: Request, next: Next) -> Response {
    request
        .extensions_mut()
        .insert(session_user("u1", UserRole::SuperAdmin));
    next.run(request).await
}

#[cfg(test)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request
        .extensions_mut()
        .insert(session_user("editor", UserRole::Admin));
    next.run(request).await
}

/// Routes behave as if the seeded super admin (u1) were logged in
#[cfg(test)]
pub fn with_super_admin_session(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_super_admin_middleware))
}

/// Routes behave as if a plain admin were logged in
#[cfg(test)]
pub fn with_admin_session(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}
