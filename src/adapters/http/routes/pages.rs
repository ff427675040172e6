//! Static HTML pages.

use std::path::Path;

use axum::routing::{MethodRouter, get_service};
use tower_http::services::ServeFile;

use crate::adapters::http::app_state::AppState;

/// GET route for one file under `public_dir`. A missing file is left to
/// `ServeFile`, which answers 404.
pub(super) fn page(public_dir: &Path, file: &str) -> MethodRouter<AppState> {
    get_service(ServeFile::new(public_dir.join(file)))
}
