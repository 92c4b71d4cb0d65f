use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::sqlite::SqliteConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            database: SqliteConfig::from_env()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(["APP_ENV", "DATABASE_URL", "HOST", "PORT"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "catalog_api");
            assert_eq!(config.database.url, "sqlite://catalog.db?mode=rwc");
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.environment, Environment::Development);
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("DATABASE_URL", Some("sqlite:///var/lib/catalog/catalog.db")),
                ("PORT", Some("5050")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.database.url, "sqlite:///var/lib/catalog/catalog.db");
                assert_eq!(config.server.port, 5050);
            },
        );
    }

    #[test]
    fn test_invalid_port_fails() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
