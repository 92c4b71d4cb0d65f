use domain_categories::{Category, entity as categoria};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{CreateProduct, Product, UpdateProduct};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "produtos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub preco: f64,
    pub categoria_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "domain_categories::entity::Entity",
        from = "Column::CategoriaId",
        to = "domain_categories::entity::Column::Id",
        on_delete = "Cascade"
    )]
    Categoria,
}

impl Related<categoria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categoria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "Produtos";

    /// Attach the owning category, as loaded by `find_also_related`.
    pub fn into_product(self, categoria: Option<categoria::Model>) -> Product {
        Product {
            id: self.id,
            nome: self.nome,
            preco: self.preco,
            categoria_id: self.categoria_id,
            categoria: categoria.map(Category::from),
        }
    }
}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        ActiveModel {
            id: NotSet,
            nome: Set(input.nome),
            preco: Set(input.preco),
            categoria_id: Set(input.categoria_id),
        }
    }
}

impl ActiveModel {
    /// Replace every mutable column of the row `id`.
    pub fn replacing(id: i32, input: UpdateProduct) -> Self {
        ActiveModel {
            id: Set(id),
            nome: Set(input.nome),
            preco: Set(input.preco),
            categoria_id: Set(input.categoria_id),
        }
    }
}
