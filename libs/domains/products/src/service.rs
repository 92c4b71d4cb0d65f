use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Business rules for products. Input is validated by the HTTP layer.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a product in an existing category
    #[instrument(skip(self, input), fields(nome = %input.nome, categoria_id = input.categoria_id))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.ensure_category(input.categoria_id).await?;
        self.repository.create(input).await
    }

    #[instrument(skip(self, input), fields(categoria_id = input.categoria_id))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<()> {
        if let Some(body) = input.id.filter(|body| *body != id) {
            return Err(ProductError::IdMismatch { path: id, body });
        }

        self.ensure_category(input.categoria_id).await?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    async fn ensure_category(&self, categoria_id: i32) -> ProductResult<()> {
        if self.repository.category_exists(categoria_id).await? {
            Ok(())
        } else {
            Err(ProductError::CategoryNotFound(categoria_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn teclado(id: i32) -> Product {
        Product {
            id,
            nome: "Teclado".to_string(),
            preco: 199.9,
            categoria_id: 1,
            categoria: None,
        }
    }

    fn create_input(categoria_id: i32) -> CreateProduct {
        CreateProduct {
            nome: "Teclado".to_string(),
            preco: 199.9,
            categoria_id,
        }
    }

    fn update_input(id: Option<i32>) -> UpdateProduct {
        UpdateProduct {
            id,
            nome: "Teclado sem fio".to_string(),
            preco: 249.9,
            categoria_id: 1,
        }
    }

    #[tokio::test]
    async fn test_create_in_existing_category() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_category_exists()
            .with(eq(1))
            .returning(|_| Ok(true));
        mock_repo.expect_create().times(1).returning(|_| Ok(teclado(5)));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(create_input(1)).await.unwrap();

        assert_eq!(product.id, 5);
    }

    #[tokio::test]
    async fn test_create_in_missing_category_is_rejected() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_category_exists().returning(|_| Ok(false));
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let result = service.create_product(create_input(9)).await;

        assert!(matches!(result, Err(ProductError::CategoryNotFound(9))));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().with(eq(4)).returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);

        assert!(matches!(
            service.get_product(4).await,
            Err(ProductError::NotFound(4))
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_mismatched_body_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_category_exists().never();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service.update_product(1, update_input(Some(2))).await;

        assert!(matches!(
            result,
            Err(ProductError::IdMismatch { path: 1, body: 2 })
        ));
    }

    #[tokio::test]
    async fn test_update_checks_category() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_category_exists().returning(|_| Ok(false));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service.update_product(1, update_input(Some(1))).await;

        assert!(matches!(result, Err(ProductError::CategoryNotFound(1))));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_category_exists().returning(|_| Ok(true));
        mock_repo
            .expect_update()
            .withf(|id, _| *id == 8)
            .returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.update_product(8, update_input(None)).await;

        assert!(matches!(result, Err(ProductError::NotFound(8))));
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(3)).returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);

        assert!(service.delete_product(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_passes_filter_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .withf(|filter| filter.categoria_id == Some(1))
            .returning(|_| Ok(vec![teclado(1), teclado(2)]));

        let service = ProductService::new(mock_repo);
        let products = service
            .list_products(ProductFilter {
                categoria_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
    }
}
