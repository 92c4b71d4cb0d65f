use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    QueryOrder, TransactionTrait,
    sea_query::{Alias, Expr, ExprTrait, Order, Query},
};

use crate::{
    entity,
    error::CategoryResult,
    models::{Category, CreateCategory, ProductSummary, UpdateCategory},
    repository::CategoryRepository,
};

const PRODUTOS: &str = "produtos";
const CATEGORIA_ID: &str = "categoria_id";

#[derive(Debug, FromQueryResult)]
struct ProductRow {
    id: i32,
    nome: String,
    preco: f64,
    categoria_id: i32,
}

impl From<ProductRow> for ProductSummary {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            nome: row.nome,
            preco: row.preco,
            categoria_id: row.categoria_id,
        }
    }
}

pub struct SqliteCategoryRepository {
    db: DatabaseConnection,
}

impl SqliteCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Category::from))
    }

    async fn list_products(&self, id: i32) -> CategoryResult<Vec<ProductSummary>> {
        let query = Query::select()
            .columns([
                Alias::new("id"),
                Alias::new("nome"),
                Alias::new("preco"),
                Alias::new(CATEGORIA_ID),
            ])
            .from(Alias::new(PRODUTOS))
            .and_where(Expr::col(Alias::new(CATEGORIA_ID)).eq(id))
            .order_by(Alias::new("id"), Order::Asc)
            .to_owned();
        let stmt = self.db.get_database_backend().build(&query);

        let rows = ProductRow::find_by_statement(stmt).all(&self.db).await?;
        Ok(rows.into_iter().map(ProductSummary::from).collect())
    }

    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(category_id = model.id, "Created category");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: UpdateCategory) -> CategoryResult<Option<Category>> {
        if entity::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(None);
        }

        let model = entity::ActiveModel::replacing(id, input)
            .update(&self.db)
            .await?;

        tracing::info!(category_id = id, "Updated category");
        Ok(Some(model.into()))
    }

    async fn delete(&self, id: i32) -> CategoryResult<bool> {
        let txn = self.db.begin().await?;

        // Dependent products, then the category row
        let query = Query::delete()
            .from_table(Alias::new(PRODUTOS))
            .and_where(Expr::col(Alias::new(CATEGORIA_ID)).eq(id))
            .to_owned();
        let stmt = txn.get_database_backend().build(&query);
        let removed = txn.execute_raw(stmt).await?.rows_affected();

        let result = entity::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;
        tracing::info!(category_id = id, products_removed = removed, "Deleted category");
        Ok(true)
    }
}
