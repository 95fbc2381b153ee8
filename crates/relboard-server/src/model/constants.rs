// Configuration keys and their defaults

pub const DEFAULT_CONFIG_FILE: &str = "conf/application.yml";
pub const ENV_PREFIX: &str = "RELBOARD";
pub const ENV_SEPARATOR: &str = "__";

pub const SERVER_ADDRESS: &str = "server.address";
pub const SERVER_PORT: &str = "server.port";
pub const SERVER_CONTEXT_PATH: &str = "server.contextPath";

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_CONTEXT_PATH: &str = "/api";

pub const DB_URL: &str = "db.url";
pub const DB_MIGRATE: &str = "db.migrate";
pub const DB_POOL_MAX_CONNECTIONS: &str = "db.pool.maxConnections";
pub const DB_POOL_MIN_CONNECTIONS: &str = "db.pool.minConnections";
pub const DB_POOL_CONNECT_TIMEOUT: &str = "db.pool.connectTimeout";
pub const DB_POOL_ACQUIRE_TIMEOUT: &str = "db.pool.acquireTimeout";
pub const DB_POOL_IDLE_TIMEOUT: &str = "db.pool.idleTimeout";
pub const DB_POOL_MAX_LIFETIME: &str = "db.pool.maxLifetime";
pub const DB_POOL_SQLX_LOGGING: &str = "db.pool.sqlxLogging";

pub const DEFAULT_DB_URL: &str = "sqlite://relboard.db?mode=rwc";

pub const SEARCH_DIR: &str = "search.dir";
pub const SEARCH_MAX_RESULTS: &str = "search.maxResults";
pub const SEARCH_REINDEX_ON_STARTUP: &str = "search.reindexOnStartup";

pub const LOGGING_DIR: &str = "logging.dir";
pub const LOGGING_LEVEL: &str = "logging.level";
pub const LOGGING_CONSOLE: &str = "logging.console";
pub const LOGGING_FILE: &str = "logging.file";
pub const LOGGING_ROTATION: &str = "logging.rotation";
