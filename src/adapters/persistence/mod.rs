use std::sync::Arc;

use mongodb::{
    Collection, Database, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};
use tokio::sync::OnceCell;

use crate::app_error::AppError;

pub mod newsletter;
pub mod reservation;
pub mod user;

pub const USERS: &str = "users";
pub const RESERVATIONS: &str = "reservations";
pub const NEWSLETTERS: &str = "newsletters";

/// MongoDB server code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoPersistence {
    db: Database,
    /// Set once the newsletter email index exists. Left unset on failure so
    /// the next subscription tries again.
    indexes_ready: Arc<OnceCell<()>>,
}

impl MongoPersistence {
    pub fn new(db: Database) -> Self {
        MongoPersistence {
            db,
            indexes_ready: Arc::new(OnceCell::new()),
        }
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Creates the unique index backing newsletter subscriptions, at most once
    /// per process.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        self.indexes_ready
            .get_or_try_init(|| async {
                let index = IndexModel::builder()
                    .keys(doc! { "email": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build();
                self.collection::<newsletter::NewsletterDoc>(NEWSLETTERS)
                    .create_index(index)
                    .await?;
                tracing::info!(collection = NEWSLETTERS, "Unique email index ready");
                Ok::<_, AppError>(())
            })
            .await?;
        Ok(())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_err))
                if write_err.code == DUPLICATE_KEY =>
            {
                AppError::Duplicate(write_err.message.clone())
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}
