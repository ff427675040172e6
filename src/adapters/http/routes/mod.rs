mod auth;
mod newsletter;
mod pages;
mod reservation;

use std::path::Path;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tower_http::services::ServeDir;

use crate::adapters::http::app_state::AppState;

use pages::page;

/// Page routes serve files from `public_dir`; any other path falls through to
/// the same directory for stylesheets and images.
pub fn router(public_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", page(public_dir, "login.html"))
        .route("/register", page(public_dir, "register.html").post(auth::register))
        .route("/index", page(public_dir, "index.html"))
        .route("/reservation", page(public_dir, "reservation.html"))
        .route(
            "/subscribe",
            page(public_dir, "subscribe.html").post(newsletter::subscribe),
        )
        .route("/login", post(auth::login))
        .route("/submit-reservation", post(reservation::submit))
        .fallback_service(ServeDir::new(public_dir))
}

/// Plain 302 with an empty body.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
