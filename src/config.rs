// src/config.rs
use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Deployment profile. Selects the default table name and a few
/// host/TLS defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Prod,
    Test,
    TestProd,
    Dev,
    DockerTest,
}

impl Environment {
    fn default_table(self) -> &'static str {
        match self {
            Self::Prod => "articles",
            Self::Test | Self::TestProd => "test_articles",
            Self::Dev => "dev_articles",
            Self::DockerTest => "docker_articles",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" => Ok(Self::Prod),
            "test" => Ok(Self::Test),
            "test_prod" => Ok(Self::TestProd),
            "dev" => Ok(Self::Dev),
            "docker_test" => Ok(Self::DockerTest),
            other => Err(ConfigError::Invalid(format!("unknown APP_ENV `{other}`"))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Prod => "prod",
            Self::Test => "test",
            Self::TestProd => "test_prod",
            Self::Dev => "dev",
            Self::DockerTest => "docker_test",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Redis,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "sql" => Ok(Self::Postgres),
            "redis" | "nosql" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid(format!(
                "unknown STORAGE_BACKEND `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    host: String,
    port: u16,
    user: String,
    password: String,
    name: String,
    require_tls: bool,
}

impl DatabaseConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn require_tls(&self) -> bool {
        self.require_tls
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    environment: Environment,
    listen_addr: String,
    backend: StorageBackend,
    database: DatabaseConfig,
    article_table: String,
    redis_url: String,
    logger_url: Option<String>,
    log_dir: Option<String>,
    allowed_origins: Vec<String>,
    connect_retries: u32,
    connect_retry_delay: Duration,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8001".into()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379/0".into()
}

const DEFAULT_CONNECT_RETRIES: u32 = 3;
const DEFAULT_CONNECT_RETRY_DELAY_SECS: u64 = 5;

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = non_empty("APP_ENV")
            .map(|v| v.parse::<Environment>())
            .transpose()?
            .unwrap_or(Environment::Dev);

        let backend = non_empty("STORAGE_BACKEND")
            .map(|v| v.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or(StorageBackend::Postgres);

        let listen_addr = non_empty("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let host = if environment == Environment::Dev {
            "localhost".to_string()
        } else {
            non_empty("POSTGRES_HOST").unwrap_or_else(|| "localhost".into())
        };
        let port = match non_empty("POSTGRES_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("POSTGRES_PORT `{raw}` is not a port")))?,
            None => 5432,
        };

        let password = match lookup("POSTGRES_PASSWORD") {
            Some(password) => password,
            None if environment == Environment::Prod => {
                return Err(ConfigError::Missing("POSTGRES_PASSWORD"));
            }
            None => "postgres".into(),
        };

        let database = DatabaseConfig {
            host,
            port,
            user: non_empty("POSTGRES_USER").unwrap_or_else(|| "postgres".into()),
            password,
            name: non_empty("POSTGRES_DB").unwrap_or_else(|| "articles".into()),
            require_tls: environment == Environment::Prod,
        };

        let article_table = non_empty("ARTICLE_TABLE")
            .unwrap_or_else(|| environment.default_table().to_string());
        if !is_valid_identifier(&article_table) {
            return Err(ConfigError::Invalid(format!(
                "ARTICLE_TABLE `{article_table}` must be a plain identifier"
            )));
        }

        let connect_retries = non_empty("DB_CONNECT_RETRIES")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_CONNECT_RETRIES);
        let connect_retry_delay = non_empty("DB_CONNECT_RETRY_DELAY_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_CONNECT_RETRY_DELAY_SECS);

        let allowed_origins = non_empty("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            environment,
            listen_addr,
            backend,
            database,
            article_table,
            redis_url: non_empty("REDIS_URL").unwrap_or_else(default_redis_url),
            logger_url: non_empty("LOGGER_URL"),
            log_dir: non_empty("LOG_DIR"),
            allowed_origins,
            connect_retries,
            connect_retry_delay: Duration::from_secs(connect_retry_delay),
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    /// Table name for the SQL backend, key prefix for Redis.
    pub fn article_table(&self) -> &str {
        &self.article_table
    }

    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    pub fn logger_url(&self) -> Option<&str> {
        self.logger_url.as_deref()
    }

    pub fn log_dir(&self) -> Option<&str> {
        self.log_dir.as_deref()
    }

    /// Return the allowed CORS origins; `*` means any.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Additional connection attempts after the first one fails.
    pub fn connect_retries(&self) -> u32 {
        self.connect_retries
    }

    pub fn connect_retry_delay(&self) -> Duration {
        self.connect_retry_delay
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, at most 63 bytes (the PostgreSQL limit).
pub fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    value.len() <= 63
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
