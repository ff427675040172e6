use mongodb::{Client, Database, bson::doc};
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info};

use crate::infra::error::InfraError;

/// Opens the process-wide client and selects `database`.
///
/// Only a malformed URI is fatal. An unreachable server is logged and the
/// handle is returned anyway, so requests fail individually until it comes back.
pub async fn init_db(uri: &SecretString, database: &str) -> Result<Database, InfraError> {
    let client = Client::with_uri_str(uri.expose_secret())
        .await
        .map_err(InfraError::DatabaseConfig)?;

    let db = client.database(database);
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => info!(database = %database, "MongoDB connection successful"),
        Err(err) => error!(database = %database, error = %err, "MongoDB connection error"),
    }

    Ok(db)
}
