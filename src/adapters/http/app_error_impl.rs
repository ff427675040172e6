use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_error::AppError;

/// The form a failed request was submitted from. The same `AppError` renders
/// differently depending on where it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Register,
    Login,
    Reservation,
    Subscribe,
}

impl FormAction {
    pub fn failure_message(self) -> &'static str {
        match self {
            FormAction::Register => "Error registering user",
            FormAction::Login => "Error during login",
            FormAction::Reservation => "Error submitting reservation",
            FormAction::Subscribe => "Error subscribing email",
        }
    }
}

#[derive(Debug)]
pub struct FormError {
    pub action: FormAction,
    pub error: AppError,
}

pub trait FormResultExt<T> {
    fn during(self, action: FormAction) -> Result<T, FormError>;
}

impl<T> FormResultExt<T> for Result<T, AppError> {
    fn during(self, action: FormAction) -> Result<T, FormError> {
        self.map_err(|error| FormError { action, error })
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let FormError { action, error } = self;

        if error.is_validation() {
            tracing::warn!(?action, error = %error, "Request rejected");
        } else {
            tracing::error!(?action, error = %error, "Request failed");
        }

        // Subscription failures are always a 400 and carry the store's message.
        if action == FormAction::Subscribe {
            let body = format!("{}: {}", action.failure_message(), error.detail());
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        match error {
            AppError::UserNotFound | AppError::InvalidPassword => {
                (StatusCode::BAD_REQUEST, error.to_string()).into_response()
            }
            // Malformed fields fail the same way a rejected insert does; the
            // detail only goes to the log above.
            AppError::InvalidInput(_) | AppError::Duplicate(_) | AppError::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, action.failure_message()).into_response()
            }
        }
    }
}
