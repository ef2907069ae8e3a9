use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_LOG_DIRECTORY: &str = "logs";
const DEFAULT_LOG_FILENAME: &str = "digital-tickets.log";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_DB_CONNECTION_STRING: &str = "mongodb://localhost:27017/digital_tickets";
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3001";

pub const DEFAULT_DB_NAME: &str = "digital_tickets";

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    /// When not set, database from the connection string is used
    pub db_name: Option<String>,

    pub cors_allowed_origin: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        Self::parse_with(|name| std::env::var(name).ok())
    }

    fn parse_with(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let env_var_or = |name: &str, default: &str| {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        let log_directory = env_var_or("DIGITAL_TICKETS_LOG_DIRECTORY", DEFAULT_LOG_DIRECTORY);
        let log_filename = env_var_or("DIGITAL_TICKETS_LOG_FILENAME", DEFAULT_LOG_FILENAME);
        let bind_address = env_var_or("DIGITAL_TICKETS_BIND_ADDRESS", DEFAULT_BIND_ADDRESS)
            .parse::<SocketAddr>()
            .context("DIGITAL_TICKETS_BIND_ADDRESS is not a valid socket address")?;
        let db_connection_string = env_var_or(
            "DIGITAL_TICKETS_DB_CONNECTION_STRING",
            DEFAULT_DB_CONNECTION_STRING,
        );
        let db_name = lookup("DIGITAL_TICKETS_DB_NAME");
        let cors_allowed_origin = env_var_or(
            "DIGITAL_TICKETS_CORS_ALLOWED_ORIGIN",
            DEFAULT_CORS_ALLOWED_ORIGIN,
        );

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            cors_allowed_origin,
        })
    }
}
