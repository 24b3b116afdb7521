use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::storage::Record;
use crate::shared::constants::{KEY_USERS, ROLE_ADMIN, ROLE_SUPER_ADMIN};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::SuperAdmin => ROLE_SUPER_ADMIN,
        }
    }
}

/// Stored CMS account. The password is plaintext; `None` only occurs for
/// accounts written without one and can never log in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_deref() == Some(candidate)
    }
}

impl Record for User {
    const COLLECTION: &'static str = KEY_USERS;

    fn record_key(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        vec![User {
            id: "u1".to_string(),
            username: "admin".to_string(),
            password: Some("password123".to_string()),
            role: UserRole::SuperAdmin,
            created_at: Utc::now(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_format_is_camel_case() {
        let user = &User::seed()[0];
        let value = serde_json::to_value(user).unwrap();

        assert_eq!(value["role"], "super_admin");
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["password"], "password123");
    }

    #[test]
    fn test_password_matches_requires_stored_password() {
        let mut user = User::seed().remove(0);
        assert!(user.password_matches("password123"));
        assert!(!user.password_matches("Password123"));

        user.password = None;
        assert!(!user.password_matches(""));
    }
}
