use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{
        newsletter::NewsletterUseCases, reservation::ReservationUseCases, user::AuthUseCases,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth_use_cases: Arc<AuthUseCases>,
    pub reservation_use_cases: Arc<ReservationUseCases>,
    pub newsletter_use_cases: Arc<NewsletterUseCases>,
}
