use async_trait::async_trait;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory, ProductSummary, UpdateCategory};

/// Persistence for categories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id
    async fn list(&self) -> CategoryResult<Vec<Category>>;

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>>;

    /// Products belonging to category `id`, ordered by id
    async fn list_products(&self, id: i32) -> CategoryResult<Vec<ProductSummary>>;

    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// Replace the mutable fields of `id`. `None` when no such category exists.
    async fn update(&self, id: i32, input: UpdateCategory) -> CategoryResult<Option<Category>>;

    /// Delete `id` together with its products. `false` when no such category exists.
    async fn delete(&self, id: i32) -> CategoryResult<bool>;
}
