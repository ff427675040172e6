pub mod newsletter;
pub mod reservation;
pub mod user;
