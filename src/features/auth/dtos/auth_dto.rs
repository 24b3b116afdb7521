use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::model::{Session, SessionUser};

/// Request DTO for CMS login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for a successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    /// Bearer token for the admin endpoints
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    pub user: SessionUser,
}

impl From<Session> for LoginResponseDto {
    fn from(session: Session) -> Self {
        Self {
            access_token: session.token,
            token_type: "Bearer".to_string(),
            user: session.user,
        }
    }
}

/// DTO for /auth/me response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseDto {
    pub user: SessionUser,
    pub logged_in_at: DateTime<Utc>,
}

impl From<Session> for MeResponseDto {
    fn from(session: Session) -> Self {
        Self {
            user: session.user,
            logged_in_at: session.logged_in_at,
        }
    }
}
