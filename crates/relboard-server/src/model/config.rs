//! Configuration management for the Relboard server
//!
//! Values are layered: the YAML file first, then `RELBOARD__*` environment
//! variables, then command line flags.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use relboard_tracker::service::DEFAULT_MAX_SEARCH_RESULTS;

use super::constants::*;
use crate::startup::{LogRotation, LoggingConfig};

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command(name = "relboard-server", version, about)]
struct Cli {
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    config_file: String,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "search-dir")]
    search_dir: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> anyhow::Result<Self> {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;

        let mut builder = Config::builder()
            .add_source(config::File::with_name(&cli.config_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );

        if let Some(v) = cli.database_url {
            builder = builder.set_override(DB_URL, v)?;
        }
        if let Some(v) = cli.port {
            builder = builder.set_override(SERVER_PORT, i64::from(v))?;
        }
        if let Some(v) = cli.search_dir {
            builder = builder.set_override(SEARCH_DIR, v)?;
        }

        Ok(Configuration {
            config: builder.build()?,
        })
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT)
            .ok()
            .and_then(|port| u16::try_from(port).ok())
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    /// Path prefix for every API route, normalized to start with `/` and
    /// carry no trailing slash. The root path becomes an empty prefix.
    pub fn server_context_path(&self) -> String {
        let path = self
            .config
            .get_string(SERVER_CONTEXT_PATH)
            .unwrap_or(DEFAULT_CONTEXT_PATH.to_string());
        let trimmed = path.trim().trim_matches('/');

        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }

    // ========================================================================
    // Database Configuration
    // ========================================================================

    pub fn database_url(&self) -> String {
        self.config
            .get_string(DB_URL)
            .unwrap_or(DEFAULT_DB_URL.to_string())
    }

    pub fn db_migrate(&self) -> bool {
        self.config.get_bool(DB_MIGRATE).unwrap_or(true)
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let max_connections = self.config.get_int(DB_POOL_MAX_CONNECTIONS).unwrap_or(10) as u32;
        let min_connections = self.config.get_int(DB_POOL_MIN_CONNECTIONS).unwrap_or(1) as u32;
        let connect_timeout = self.config.get_int(DB_POOL_CONNECT_TIMEOUT).unwrap_or(30) as u64;
        let acquire_timeout = self.config.get_int(DB_POOL_ACQUIRE_TIMEOUT).unwrap_or(8) as u64;
        let idle_timeout = self.config.get_int(DB_POOL_IDLE_TIMEOUT).unwrap_or(600) as u64;
        let max_lifetime = self.config.get_int(DB_POOL_MAX_LIFETIME).unwrap_or(1800) as u64;
        let sqlx_logging = self.config.get_bool(DB_POOL_SQLX_LOGGING).unwrap_or(false);

        let mut opt = ConnectOptions::new(self.database_url());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        tracing::info!(
            max_connections,
            min_connections,
            connect_timeout,
            idle_timeout,
            max_lifetime,
            sqlx_logging,
            "Database connection pool configured"
        );

        opt
    }

    pub async fn database_connection(&self) -> anyhow::Result<DatabaseConnection> {
        Ok(Database::connect(self.connect_options()).await?)
    }

    // ========================================================================
    // Search Configuration
    // ========================================================================

    /// Directory of the on-disk search index. `None` keeps the index in memory.
    pub fn search_dir(&self) -> Option<PathBuf> {
        self.config
            .get_string(SEARCH_DIR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn search_max_results(&self) -> usize {
        self.config
            .get_int(SEARCH_MAX_RESULTS)
            .ok()
            .and_then(|max| usize::try_from(max).ok())
            .filter(|max| *max > 0)
            .unwrap_or(DEFAULT_MAX_SEARCH_RESULTS)
    }

    pub fn reindex_on_startup(&self) -> bool {
        self.config.get_bool(SEARCH_REINDEX_ON_STARTUP).unwrap_or(true)
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        let mut logging = LoggingConfig::from_env();

        if let Ok(dir) = self.config.get_string(LOGGING_DIR) {
            logging.log_dir = PathBuf::from(dir);
        }
        if let Ok(console) = self.config.get_bool(LOGGING_CONSOLE) {
            logging.console_output = console;
        }
        if let Ok(file) = self.config.get_bool(LOGGING_FILE) {
            logging.file_logging = file;
        }
        if let Some(level) = self
            .config
            .get_string(LOGGING_LEVEL)
            .ok()
            .and_then(|level| level.parse().ok())
        {
            logging.console_level = level;
            logging.file_level = level;
        }
        if let Some(rotation) = self
            .config
            .get_string(LOGGING_ROTATION)
            .ok()
            .and_then(|rotation| rotation.parse::<LogRotation>().ok())
        {
            logging.rotation = rotation;
        }

        logging
    }
}
