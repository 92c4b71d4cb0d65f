//! Categories Domain
//!
//! CRUD over the `categorias` table. Deleting a category removes its products.
//!
//! ```text
//! handlers → CategoryService → CategoryRepository → SqliteCategoryRepository → entity
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_categories::{handlers, CategoryService, SqliteCategoryRepository};
//!
//! let service = CategoryService::new(SqliteCategoryRepository::new(db));
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

pub use error::{CategoryError, CategoryResult};
pub use models::{Category, CategoryDetail, CreateCategory, ProductSummary, UpdateCategory};
pub use repository::CategoryRepository;
pub use service::CategoryService;
pub use sqlite::SqliteCategoryRepository;
