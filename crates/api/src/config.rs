use crate::auth::jwt::JwtConfig;

/// Which record store backend the server talks to.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Hosted PostgREST-style endpoint.
    Rest {
        url: String,
        api_key: String,
        timeout_secs: u64,
    },
    /// Direct PostgreSQL connection.
    Postgres { database_url: String },
    /// In-process tables, lost on restart. Local development only.
    Memory,
}

impl StoreConfig {
    /// Load store settings from environment variables.
    ///
    /// | Env Var              | Used by    | Default |
    /// |----------------------|------------|---------|
    /// | `STORE_BACKEND`      | all        | `rest`  |
    /// | `STORE_URL`          | `rest`     | --      |
    /// | `STORE_API_KEY`      | `rest`     | --      |
    /// | `STORE_TIMEOUT_SECS` | `rest`     | `10`    |
    /// | `DATABASE_URL`       | `postgres` | --      |
    ///
    /// # Panics
    ///
    /// Panics on an unknown backend or a missing variable the backend needs.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "rest".into());

        match backend.as_str() {
            "rest" => {
                let url = std::env::var("STORE_URL").expect("STORE_URL must be set");
                let api_key = std::env::var("STORE_API_KEY").expect("STORE_API_KEY must be set");
                let timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".into())
                    .parse()
                    .expect("STORE_TIMEOUT_SECS must be a valid u64");
                StoreConfig::Rest {
                    url,
                    api_key,
                    timeout_secs,
                }
            }
            "postgres" => StoreConfig::Postgres {
                database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            },
            "memory" => StoreConfig::Memory,
            other => panic!("Unknown STORE_BACKEND '{other}' (expected rest, postgres or memory)"),
        }
    }

    /// Short name for logging.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Rest { .. } => "rest",
            StoreConfig::Postgres { .. } => "postgres",
            StoreConfig::Memory => "memory",
        }
    }
}

/// The single operator allowed into `/admin`.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl AdminCredentials {
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `ADMIN_USERNAME`      | no       | `admin` |
    /// | `ADMIN_PASSWORD_HASH` | **yes**  | --      |
    pub fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
        let password_hash =
            std::env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH must be set");
        assert!(
            password_hash.starts_with("$argon2"),
            "ADMIN_PASSWORD_HASH must be an Argon2 PHC string"
        );
        Self {
            username,
            password_hash,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All optional fields have defaults suitable for local development.
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
    /// Directory served under `/static` (default: `static`).
    pub static_dir: String,
    pub store: StoreConfig,
    pub admin: AdminCredentials,
    /// JWT session configuration.
    pub jwt: JwtConfig,
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
    /// | `STATIC_DIR`           | `static`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            store: StoreConfig::from_env(),
            admin: AdminCredentials::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn backend_names() {
        assert_eq!(StoreConfig::Memory.backend_name(), "memory");
        assert_eq!(
            StoreConfig::Postgres {
                database_url: "postgres://x".into()
            }
            .backend_name(),
            "postgres"
        );
    }
}
