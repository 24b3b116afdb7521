use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::SessionUser;
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::User;
use crate::modules::storage::{new_record_id, ContentStore};
use crate::shared::localized::{pick, LanguageCode};

/// Service for CMS account management
pub struct UserService {
    store: Arc<ContentStore>,
}

impl UserService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    /// List all users (passwords stripped)
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users: Vec<User> = self.store.get_all().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Create a new user
    pub async fn create(&self, dto: CreateUserDto, lang: LanguageCode) -> Result<UserResponseDto> {
        let user = User {
            id: new_record_id(),
            username: dto.username,
            password: Some(dto.password),
            role: dto.role,
            created_at: Utc::now(),
        };

        let user = self
            .store
            .save_one_checked(
                user,
                |users, incoming| ensure_username_free(users, incoming, lang),
                |_, incoming| incoming,
            )
            .await?;
        tracing::info!("User created: id={}, username={}", user.id, user.username);

        Ok(user.into())
    }

    /// Save the user at `id`, appending when it does not exist yet.
    ///
    /// An empty password keeps the stored one; `createdAt` is preserved.
    /// Both checks run against the collection as it is at write time.
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateUserDto,
        lang: LanguageCode,
    ) -> Result<UserResponseDto> {
        let user = User {
            id: id.to_string(),
            username: dto.username.clone(),
            password: dto.new_password(),
            role: dto.role,
            created_at: Utc::now(),
        };

        let user = self
            .store
            .save_one_checked(
                user,
                |users, incoming| {
                    let exists = users.iter().any(|u| u.id == incoming.id);
                    if !exists && incoming.password.is_none() {
                        return Err(AppError::Validation(
                            "Password is required for new users".to_string(),
                        ));
                    }
                    ensure_username_free(users, incoming, lang)
                },
                |current, mut incoming| {
                    if incoming.password.is_none() {
                        incoming.password = current.password.clone();
                    }
                    incoming.created_at = current.created_at;
                    incoming
                },
            )
            .await?;

        tracing::info!(
            "User saved: id={}, username={}, role={}",
            user.id,
            user.username,
            user.role.as_str()
        );

        Ok(user.into())
    }

    /// Delete a user; the logged-in user cannot delete themselves
    pub async fn delete(&self, id: &str, current: &SessionUser, lang: LanguageCode) -> Result<()> {
        if id == current.id {
            return Err(AppError::Forbidden(pick(
                lang,
                "You cannot delete yourself.",
                "不能删除自己。",
            )));
        }

        if !self.store.delete_one::<User>(id).await? {
            return Err(AppError::NotFound(format!("User '{}' not found", id)));
        }

        tracing::info!("User deleted: id={} by {}", id, current.username);
        Ok(())
    }
}

/// Usernames are unique across ids
fn ensure_username_free(users: &[User], incoming: &User, lang: LanguageCode) -> Result<()> {
    if users
        .iter()
        .any(|u| u.username == incoming.username && u.id != incoming.id)
    {
        return Err(AppError::Conflict(pick(
            lang,
            "Username already taken.",
            "用户名已存在。",
        )));
    }
    Ok(())
}
