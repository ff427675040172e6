use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include the connection string; the `#[source]`
/// chain might, so log with `%e` rather than `?e`.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Invalid MongoDB connection string. Check MONGODB_URI.")]
    DatabaseConfig(#[source] mongodb::error::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
