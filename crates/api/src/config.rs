/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for the database pool to close on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Maximum concurrent item inserts per batch; `0` removes the cap (default: `16`).
    pub batch_insert_concurrency: usize,
    /// Timeout for fetching a remote logo in seconds (default: `10`).
    pub logo_fetch_timeout_secs: u64,
    /// Largest accepted logo payload in bytes (default: 5 MiB).
    pub max_logo_bytes: usize,
    /// Database pool size (default: `20`).
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | `30`                       |
    /// | `BATCH_INSERT_CONCURRENCY` | `16`                       |
    /// | `LOGO_FETCH_TIMEOUT_SECS`  | `10`                       |
    /// | `MAX_LOGO_BYTES`           | `5242880`                  |
    /// | `DB_MAX_CONNECTIONS`       | `20`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port: parse_env("PORT", 3000),
            cors_origins,
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: parse_env("SHUTDOWN_TIMEOUT_SECS", 30),
            batch_insert_concurrency: parse_env(
                "BATCH_INSERT_CONCURRENCY",
                qrgen_core::batch::DEFAULT_INSERT_CONCURRENCY,
            ),
            logo_fetch_timeout_secs: parse_env("LOGO_FETCH_TIMEOUT_SECS", 10),
            max_logo_bytes: parse_env("MAX_LOGO_BYTES", qrgen_core::logo::DEFAULT_MAX_LOGO_BYTES),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 20),
        }
    }
}

/// Read and parse an env var, falling back to `default` when unset.
///
/// Panics on an unparseable value so misconfiguration fails at startup.
fn parse_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid {}: {e}", std::any::type_name::<T>())),
        Err(_) => default,
    }
}
