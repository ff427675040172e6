use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::newsletter_subscriber::NewsletterSubscriber;

#[async_trait]
pub trait NewsletterRepo: Send + Sync {
    /// Must fail with `AppError::Duplicate` when `email` is already subscribed.
    async fn insert(&self, email: &str) -> AppResult<NewsletterSubscriber>;
}

#[derive(Clone)]
pub struct NewsletterUseCases {
    repo: Arc<dyn NewsletterRepo>,
}

impl NewsletterUseCases {
    pub fn new(repo: Arc<dyn NewsletterRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn subscribe(&self, email: Option<&str>) -> AppResult<NewsletterSubscriber> {
        let email = email.map(str::trim).unwrap_or_default();
        if email.is_empty() {
            return Err(AppError::InvalidInput("email is required".into()));
        }

        let subscriber = self.repo.insert(email).await?;
        tracing::info!(subscriber_id = %subscriber.id, email = %subscriber.email, "Email subscribed");
        Ok(subscriber)
    }
}
