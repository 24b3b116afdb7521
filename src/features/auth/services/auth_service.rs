use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::LoginRequestDto;
use crate::features::auth::model::{Session, SessionUser};
use crate::features::users::models::User;
use crate::modules::storage::ContentStore;
use crate::shared::constants::KEY_CURRENT_USER;
use crate::shared::localized::{pick, LanguageCode};

/// Plaintext username/password login with a single current session.
///
/// The session is held in memory and mirrored under `currentUser` in
/// storage, so it survives a restart over the same data file. A new login
/// replaces whatever session existed before.
pub struct AuthService {
    store: Arc<ContentStore>,
    current: RwLock<Option<Session>>,
}

impl AuthService {
    /// Create the service, picking up a session persisted by a previous run
    pub async fn restore(store: Arc<ContentStore>) -> Result<Self> {
        let current: Option<Session> = store.get_value(KEY_CURRENT_USER).await?;

        if let Some(session) = &current {
            tracing::info!("Restored session for '{}'", session.user.username);
        }

        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    /// Verify credentials and start a new session
    pub async fn login(&self, dto: LoginRequestDto, lang: LanguageCode) -> Result<Session> {
        let users: Vec<User> = self.store.get_all().await?;

        let user = users
            .into_iter()
            .find(|u| u.username == dto.username)
            .filter(|u| u.password_matches(&dto.password))
            .ok_or_else(|| {
                tracing::warn!("Failed login attempt for '{}'", dto.username);
                AppError::Auth(pick(lang, "Invalid credentials", "用户名或密码错误"))
            })?;

        let session = Session {
            token: Uuid::new_v4().to_string(),
            user: SessionUser::from(user),
            logged_in_at: Utc::now(),
        };

        let mut current = self.current.write().await;
        self.store.save(KEY_CURRENT_USER, &session).await?;
        *current = Some(session.clone());

        tracing::info!(
            "User '{}' logged in (role={})",
            session.user.username,
            session.user.role.as_str()
        );

        Ok(session)
    }

    /// End the current session
    pub async fn logout(&self) -> Result<()> {
        let mut current = self.current.write().await;
        self.store.remove(KEY_CURRENT_USER).await?;

        if let Some(session) = current.take() {
            tracing::info!("User '{}' logged out", session.user.username);
        }
        Ok(())
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Resolve a bearer token to the logged-in user
    pub async fn authenticate(&self, token: &str) -> Result<SessionUser> {
        match self.current.read().await.as_ref() {
            Some(session) if session.token == token => Ok(session.user.clone()),
            Some(_) => Err(AppError::Unauthorized(
                "Session expired or replaced by another login".to_string(),
            )),
            None => Err(AppError::Unauthorized("Not logged in".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserRole;
    use crate::shared::test_helpers::memory_store;

    fn credentials(username: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_with_seeded_admin() {
        let store = memory_store();
        let service = AuthService::restore(store.clone()).await.unwrap();

        let session = service
            .login(credentials("admin", "password123"), LanguageCode::En)
            .await
            .unwrap();

        assert_eq!(session.user.id, "u1");
        assert_eq!(session.user.role, UserRole::SuperAdmin);
        assert_eq!(service.current().await, Some(session.clone()));

        // Persisted identity carries no password
        let raw: serde_json::Value = store.get_value(KEY_CURRENT_USER).await.unwrap().unwrap();
        assert!(raw["user"].get("password").is_none());
        assert_eq!(raw["user"]["username"], "admin");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_and_unknown_user() {
        let service = AuthService::restore(memory_store()).await.unwrap();

        let err = service
            .login(credentials("admin", "nope"), LanguageCode::Zh)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(ref msg) if msg == "用户名或密码错误"));

        let err = service
            .login(credentials("ghost", "password123"), LanguageCode::En)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
        assert!(service.current().await.is_none());
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let store = memory_store();
        let first = AuthService::restore(store.clone()).await.unwrap();
        let session = first
            .login(credentials("admin", "password123"), LanguageCode::En)
            .await
            .unwrap();

        let second = AuthService::restore(store).await.unwrap();
        let user = second.authenticate(&session.token).await.unwrap();
        assert_eq!(user.username, "admin");
    }

    #[tokio::test]
    async fn test_new_login_replaces_previous_token() {
        let service = AuthService::restore(memory_store()).await.unwrap();
        let old = service
            .login(credentials("admin", "password123"), LanguageCode::En)
            .await
            .unwrap();
        let new = service
            .login(credentials("admin", "password123"), LanguageCode::En)
            .await
            .unwrap();

        assert!(service.authenticate(&old.token).await.is_err());
        assert!(service.authenticate(&new.token).await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_storage() {
        let store = memory_store();
        let service = AuthService::restore(store.clone()).await.unwrap();
        let session = service
            .login(credentials("admin", "password123"), LanguageCode::En)
            .await
            .unwrap();

        tokio_test::assert_ok!(service.logout().await);

        assert!(service.current().await.is_none());
        let stored: Option<Session> = store.get_value(KEY_CURRENT_USER).await.unwrap();
        assert!(stored.is_none());
        tokio_test::assert_err!(service.authenticate(&session.token).await);
    }
}
