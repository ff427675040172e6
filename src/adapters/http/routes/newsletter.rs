use axum::{Form, extract::State, response::Response};
use serde::Deserialize;

use super::found;
use crate::adapters::http::{
    app_error_impl::{FormAction, FormError, FormResultExt},
    app_state::AppState,
};

#[derive(Deserialize)]
pub(super) struct SubscribeForm {
    email: Option<String>,
}

/// POST /subscribe
/// Every failure, duplicates included, is a 400 carrying the underlying error text.
pub(super) async fn subscribe(
    State(app_state): State<AppState>,
    Form(form): Form<SubscribeForm>,
) -> Result<Response, FormError> {
    app_state
        .newsletter_use_cases
        .subscribe(form.email.as_deref())
        .await
        .during(FormAction::Subscribe)?;

    Ok(found("/index"))
}
