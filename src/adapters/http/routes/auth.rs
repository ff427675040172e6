use axum::{Form, extract::State, response::Response};
use serde::Deserialize;

use super::found;
use crate::{
    adapters::http::{
        app_error_impl::{FormAction, FormError, FormResultExt},
        app_state::AppState,
    },
    use_cases::user::NewUser,
};

#[derive(Deserialize)]
pub(super) struct RegisterForm {
    #[serde(rename = "Name")]
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct LoginForm {
    email: Option<String>,
    password: Option<String>,
}

/// POST /register
pub(super) async fn register(
    State(app_state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, FormError> {
    app_state
        .auth_use_cases
        .register(NewUser {
            name: form.name,
            email: form.email,
            password: form.password,
        })
        .await
        .during(FormAction::Register)?;

    Ok(found("/"))
}

/// POST /login
/// Redirects to the landing page when the credentials match. No session is created.
pub(super) async fn login(
    State(app_state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, FormError> {
    app_state
        .auth_use_cases
        .login(form.email.as_deref(), form.password.as_deref())
        .await
        .during(FormAction::Login)?;

    Ok(found("/index"))
}
