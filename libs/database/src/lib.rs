//! Database connectivity for the catalog service.
//!
//! # Features
//!
//! - `config` - load [`sqlite::SqliteConfig`] through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect("sqlite://catalog.db?mode=rwc").await?;
//! sqlite::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

pub mod common;
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
