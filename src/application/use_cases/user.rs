use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::user::User;

/// Fields accepted by registration. Every field is optional; missing ones are
/// simply not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn insert(&self, user: NewUser) -> AppResult<User>;
    /// First user whose email equals `email` exactly (no case folding).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

#[derive(Clone)]
pub struct AuthUseCases {
    repo: Arc<dyn UserRepo>,
}

impl AuthUseCases {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    /// Duplicate emails are allowed and produce separate records.
    #[instrument(skip(self, new_user), fields(email = ?new_user.email))]
    pub async fn register(&self, new_user: NewUser) -> AppResult<User> {
        let user = self.repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, email = ?user.email, "User registered");
        Ok(user)
    }

    /// Checks the submitted credentials. Nothing is issued on success; the
    /// caller only learns whether the pair matched.
    ///
    /// Passwords are compared as plain strings.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: Option<&str>, password: Option<&str>) -> AppResult<User> {
        let Some(email) = email else {
            return Err(AppError::UserNotFound);
        };

        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if user.password.as_deref() != password {
            return Err(AppError::InvalidPassword);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }
}
