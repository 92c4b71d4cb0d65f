use async_trait::async_trait;
use domain_categories::entity as categoria;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product, ProductFilter, UpdateProduct},
    repository::ProductRepository,
};

pub struct SqliteProductRepository {
    db: DatabaseConnection,
}

impl SqliteProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_category(&self, model: entity::Model) -> ProductResult<Product> {
        let categoria = categoria::Entity::find_by_id(model.categoria_id)
            .one(&self.db)
            .await?;
        Ok(model.into_product(categoria))
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let mut query = entity::Entity::find().find_also_related(categoria::Entity);

        if let Some(categoria_id) = filter.categoria_id {
            query = query.filter(entity::Column::CategoriaId.eq(categoria_id));
        }

        let rows = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, categoria)| product.into_product(categoria))
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let row = entity::Entity::find_by_id(id)
            .find_also_related(categoria::Entity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(product, categoria)| product.into_product(categoria)))
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, categoria_id = model.categoria_id, "Created product");
        self.with_category(model).await
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        if entity::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(None);
        }

        let model = entity::ActiveModel::replacing(id, input)
            .update(&self.db)
            .await?;

        tracing::info!(product_id = id, "Updated product");
        self.with_category(model).await.map(Some)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn category_exists(&self, categoria_id: i32) -> ProductResult<bool> {
        let count = categoria::Entity::find_by_id(categoria_id)
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }
}
