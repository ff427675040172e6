pub mod newsletter_subscriber;
pub mod reservation;
pub mod user;
