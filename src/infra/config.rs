use std::{net::SocketAddr, path::PathBuf};

use env_helpers::get_env_default;
use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// May embed credentials.
    pub mongodb_uri: SecretString,
    pub mongodb_database: String,
    /// Directory holding the HTML pages and their static assets.
    pub public_dir: PathBuf,
    /// When set, logs are also written there as JSON lines.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3019)));
        let mongodb_uri = SecretString::new(
            get_env_default("MONGODB_URI", String::from("mongodb://127.0.0.1:27017")).into(),
        );
        let mongodb_database: String = get_env_default("MONGODB_DATABASE", "Customer".to_string());
        let public_dir: PathBuf = get_env_default("PUBLIC_DIR", PathBuf::from("public"));
        let log_file: Option<PathBuf> = std::env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            bind_addr,
            mongodb_uri,
            mongodb_database,
            public_dir,
            log_file,
        }
    }
}
