/// Server configuration loaded from environment variables.
///
/// All fields except the admin password have defaults suitable for local
/// development. In production, override via environment variables.
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
    /// Admin console gate configuration.
    pub admin: AdminConfig,
}

/// Admin gate configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Shared admin password from `ADMIN_PASSWORD`. `None` when unset or
    /// blank; login then fails with a configuration error rather than the
    /// server refusing to start, since the rest of the service does not
    /// need it.
    pub password: Option<String>,
    /// Whether the admin cookie carries the `Secure` attribute. On when
    /// `APP_ENV=production`.
    pub secure_cookies: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_PASSWORD`       | unset                      |
    /// | `APP_ENV`              | `development`              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.trim().is_empty());

        let secure_cookies =
            std::env::var("APP_ENV").as_deref().unwrap_or("development") == "production";

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin: AdminConfig {
                password,
                secure_cookies,
            },
        }
    }
}
