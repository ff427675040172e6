//! Test utilities.
//!
//! - In-memory repositories standing in for the MongoDB collections
//! - Factories with override closures
//! - `TestAppStateBuilder` for HTTP-level tests

mod app_state_builder;
mod factories;

pub use app_state_builder::*;
pub use factories::*;
pub use repo_mocks::*;
