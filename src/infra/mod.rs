use crate::{adapters::persistence::MongoPersistence, infra::db::init_db};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

/// The newsletter index is created on first subscription, not here, so an
/// unreachable server at startup does not leave it missing for good.
pub async fn mongo_persistence(
    uri: &secrecy::SecretString,
    database: &str,
) -> Result<MongoPersistence, error::InfraError> {
    let db = init_db(uri, database).await?;
    Ok(MongoPersistence::new(db))
}
