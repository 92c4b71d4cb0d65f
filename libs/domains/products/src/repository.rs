use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Persistence for products. Every returned [`Product`] carries its category.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products matching `filter`, ordered by id
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace the mutable fields of `id`. `None` when no such product exists.
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// `false` when no such product exists
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    async fn category_exists(&self, categoria_id: i32) -> ProductResult<bool>;
}
