use std::sync::Arc;
use tracing::instrument;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryDetail, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// Business rules for categories. Input is validated by the HTTP layer.
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.list().await
    }

    /// Category with its products
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: i32) -> CategoryResult<CategoryDetail> {
        let category = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;
        let produtos = self.repository.list_products(id).await?;

        Ok(CategoryDetail::new(category, produtos))
    }

    #[instrument(skip(self, input), fields(nome = %input.nome))]
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<Category> {
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_category(&self, id: i32, input: UpdateCategory) -> CategoryResult<()> {
        if let Some(body) = input.id.filter(|body| *body != id) {
            return Err(CategoryError::IdMismatch { path: id, body });
        }

        self.repository
            .update(id, input)
            .await?
            .ok_or(CategoryError::NotFound(id))?;
        Ok(())
    }

    /// Delete a category and every product in it
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i32) -> CategoryResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }
}
