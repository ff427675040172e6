//! Test data factories. Use the closure parameter to override specific fields.

use std::{net::SocketAddr, path::PathBuf};

use mongodb::bson::oid::ObjectId;
use secrecy::SecretString;

use crate::{
    domain::entities::user::User, infra::config::AppConfig,
    use_cases::reservation::NewReservation,
};

/// Create a stored user: Ann, ann@example.com, password "secret".
pub fn create_test_user(overrides: impl FnOnce(&mut User)) -> User {
    let mut user = User {
        id: ObjectId::new().to_hex(),
        name: Some("Ann".to_string()),
        email: Some("ann@example.com".to_string()),
        password: Some("secret".to_string()),
    };
    overrides(&mut user);
    user
}

/// Create a reservation submission for four guests.
pub fn new_test_reservation(overrides: impl FnOnce(&mut NewReservation)) -> NewReservation {
    let mut reservation = NewReservation {
        name: Some("Ann".to_string()),
        email: Some("ann@example.com".to_string()),
        phone: Some("555-0101".to_string()),
        date: Some("2026-11-02".to_string()),
        time: Some("19:30".to_string()),
        guests: Some(4),
        message: None,
    };
    overrides(&mut reservation);
    reservation
}

/// Config pointing at the repository's `public/` pages.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:3019".parse::<SocketAddr>().unwrap(),
        mongodb_uri: SecretString::new("mongodb://127.0.0.1:27017".into()),
        mongodb_database: "Customer".to_string(),
        public_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"),
        log_file: None,
    }
}
