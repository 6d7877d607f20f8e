//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_PATH="/var/lib/yields/summary.db"
//! export TEMPLATE_DIR="./templates"
//! export PUBLIC_DIR="./public"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `DATABASE_PATH` - SQLite file (default: `summary.db`). A relative path is
//!   resolved against the directory of the running executable.
//! - `PUBLIC_DIR` - Static asset directory (default: `./public`)
//! - `TEMPLATE_DIR` - HTML template directory (default: `./templates`)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 4, min: 1)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_DATABASE_FILE: &str = "summary.db";
pub const DEFAULT_PUBLIC_DIR: &str = "./public";
pub const DEFAULT_TEMPLATE_DIR: &str = "./templates";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Absolute (or already resolved) path of the SQLite database.
    pub database_path: PathBuf,
    pub public_dir: PathBuf,
    pub template_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of pooled SQLite connections (`DB_MAX_CONNECTIONS`, default: 4).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `DB_MAX_CONNECTIONS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let database_path = Self::load_database_path();

        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR));
        let template_dir = env::var("TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATE_DIR));

        let db_max_connections: u32 = match env::var("DB_MAX_CONNECTIONS") {
            Ok(v) => v.parse().map_err(|_| {
                anyhow::anyhow!("DB_MAX_CONNECTIONS must be a positive integer, got '{v}'")
            })?,
            Err(_) => 4,
        };

        Ok(Self {
            listen_addr,
            database_path,
            public_dir,
            template_dir,
            log_level,
            log_format,
            db_max_connections,
        })
    }

    /// Resolves `DATABASE_PATH` (or the default file name) against the
    /// executable's directory.
    fn load_database_path() -> PathBuf {
        let raw = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_FILE.to_string());
        resolve_database_path(Path::new(&raw), &application_dir())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `db_max_connections` is zero
    /// - `template_dir` or `public_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.template_dir.as_os_str().is_empty() {
            anyhow::bail!("TEMPLATE_DIR must not be empty");
        }

        if self.public_dir.as_os_str().is_empty() {
            anyhow::bail!("PUBLIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_path.display());
        tracing::info!("  Templates: {}", self.template_dir.display());
        tracing::info!("  Public dir: {}", self.public_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  DB max connections: {}", self.db_max_connections);
    }
}

/// Directory containing the running executable, or the working directory if
/// that cannot be determined.
pub fn application_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Joins a relative `raw` path onto `base`; absolute paths are kept.
pub fn resolve_database_path(raw: &Path, base: &Path) -> PathBuf {
    if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        base.join(raw)
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: DEFAULT_LISTEN.to_string(),
            database_path: PathBuf::from("/tmp/summary.db"),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 4,
        }
    }

    #[test]
    fn test_resolve_database_path() {
        let base = Path::new("/opt/yields/bin");

        assert_eq!(
            resolve_database_path(Path::new("summary.db"), base),
            PathBuf::from("/opt/yields/bin/summary.db")
        );
        assert_eq!(
            resolve_database_path(Path::new("data/summary.db"), base),
            PathBuf::from("/opt/yields/bin/data/summary.db")
        );
        assert_eq!(
            resolve_database_path(Path::new("/srv/summary.db"), base),
            PathBuf::from("/srv/summary.db")
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = DEFAULT_LISTEN.to_string();
        config.db_max_connections = 0;
        assert!(config.validate().is_err());

        config.db_max_connections = 1;
        config.template_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("DATABASE_PATH");
            env::remove_var("PUBLIC_DIR");
            env::remove_var("TEMPLATE_DIR");
            env::remove_var("DB_MAX_CONNECTIONS");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, DEFAULT_LISTEN);
        assert_eq!(config.public_dir, PathBuf::from(DEFAULT_PUBLIC_DIR));
        assert_eq!(config.template_dir, PathBuf::from(DEFAULT_TEMPLATE_DIR));
        assert_eq!(config.db_max_connections, 4);
        assert_eq!(config.log_format, "text");
        assert!(config.database_path.is_absolute() || config.database_path.starts_with("."));
        assert!(config.database_path.ends_with(DEFAULT_DATABASE_FILE));
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("DATABASE_PATH", "/data/yields.db");
            env::set_var("TEMPLATE_DIR", "/srv/templates");
            env::set_var("DB_MAX_CONNECTIONS", "2");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.database_path, PathBuf::from("/data/yields.db"));
        assert_eq!(config.template_dir, PathBuf::from("/srv/templates"));
        assert_eq!(config.db_max_connections, 2);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("DATABASE_PATH");
            env::remove_var("TEMPLATE_DIR");
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_max_connections() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_MAX_CONNECTIONS", "many");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }
}
