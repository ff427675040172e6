use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unique index violation reported by the store. Holds the store's message.
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Business-rule rejections, as opposed to infrastructure failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AppError::Database(_))
    }

    /// The underlying message without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::Duplicate(msg) | AppError::Database(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
