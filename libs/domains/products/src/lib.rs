//! Products Domain
//!
//! CRUD over the `produtos` table. Every product belongs to a category from
//! [`domain_categories`], which is embedded in each response.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /produtos endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← category existence, id checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + SQLite implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_products::{handlers, ProductService, SqliteProductRepository};
//!
//! let service = ProductService::new(SqliteProductRepository::new(db));
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

pub use error::{ProductError, ProductResult};
pub use models::{CreateProduct, Product, ProductFilter, UpdateProduct};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use sqlite::SqliteProductRepository;
