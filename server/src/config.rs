//! Server configuration
//!
//! Configuration is loaded from environment variables. See `.env.example` for documentation.

use std::env;

/// Main server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Spatial store configuration
    pub database: DatabaseConfig,
}

/// Spatial store connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database user
    pub user: String,
    /// Database host
    pub host: String,
    /// Database name
    pub name: String,
    /// Database password
    pub password: String,
    /// Database port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: "postgres".to_string(),
            host: "localhost".to_string(),
            name: "geoview".to_string(),
            password: String::new(),
            port: 5432,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Server config
        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT")
            && let Ok(p) = port.parse()
        {
            config.port = p;
        }

        // Database config
        if let Ok(user) = env::var("DB_USER") {
            config.database.user = user;
        }
        if let Ok(host) = env::var("DB_HOST") {
            config.database.host = host;
        }
        if let Ok(name) = env::var("DB_NAME") {
            config.database.name = name;
        }
        if let Ok(password) = env::var("DB_PASSWORD") {
            config.database.password = password;
        }
        if let Ok(port) = env::var("DB_PORT")
            && let Ok(p) = port.parse()
        {
            config.database.port = p;
        }

        config
    }
}

impl DatabaseConfig {
    /// Postgres connection URL for the pool
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
