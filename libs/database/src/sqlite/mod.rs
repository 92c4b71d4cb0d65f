//! SQLite connectivity via SeaORM

mod config;
mod connector;
mod health;

pub use config::SqliteConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    run_migrations,
};
pub use health::check_health;
