//! Role-based authorization guards for the CMS.
//!
//! Every logged-in account is an editor; `super_admin` additionally manages
//! other accounts. Plain session access is covered by extracting
//! [`SessionUser`] directly.

use crate::core::error::AppError;
use crate::features::auth::model::SessionUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if user is super admin.
///
/// Only allows users with the "super_admin" role.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireSuperAdmin(user): RequireSuperAdmin) { ... }
/// ```
pub struct RequireSuperAdmin(pub SessionUser);

impl<S> FromRequestParts<S> for RequireSuperAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<SessionUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_super_admin() {
            return Err(AppError::Forbidden(
                "Super admin access required".to_string(),
            ));
        }

        Ok(RequireSuperAdmin(user.clone()))
    }
}
