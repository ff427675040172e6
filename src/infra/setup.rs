use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, mongo_persistence},
    use_cases::{
        newsletter::{NewsletterRepo, NewsletterUseCases},
        reservation::{ReservationRepo, ReservationUseCases},
        user::{AuthUseCases, UserRepo},
    },
};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    init_tracing(config.log_file.as_deref());

    let mongo_arc =
        Arc::new(mongo_persistence(&config.mongodb_uri, &config.mongodb_database).await?);

    let auth_use_cases = AuthUseCases::new(mongo_arc.clone() as Arc<dyn UserRepo>);
    let reservation_use_cases =
        ReservationUseCases::new(mongo_arc.clone() as Arc<dyn ReservationRepo>);
    let newsletter_use_cases = NewsletterUseCases::new(mongo_arc as Arc<dyn NewsletterRepo>);

    Ok(AppState {
        config: Arc::new(config),
        auth_use_cases: Arc::new(auth_use_cases),
        reservation_use_cases: Arc::new(reservation_use_cases),
        newsletter_use_cases: Arc::new(newsletter_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "restaurant_site=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let (json_layer, file_error) = match log_file.map(File::create) {
        Some(Ok(file)) => (
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            ),
            None,
        ),
        Some(Err(err)) => (None, Some(err)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if let (Some(path), Some(err)) = (log_file, file_error) {
        tracing::warn!(path = %path.display(), error = %err, "Cannot create log file");
    }
}
