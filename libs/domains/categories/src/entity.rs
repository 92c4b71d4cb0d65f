use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Category, CreateCategory, UpdateCategory};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categorias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "Categorias";
}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            descricao: model.descricao,
        }
    }
}

impl From<CreateCategory> for ActiveModel {
    fn from(input: CreateCategory) -> Self {
        ActiveModel {
            id: NotSet,
            nome: Set(input.nome),
            descricao: Set(input.descricao),
        }
    }
}

impl ActiveModel {
    /// Replace every mutable column of the row `id`.
    pub fn replacing(id: i32, input: UpdateCategory) -> Self {
        ActiveModel {
            id: Set(id),
            nome: Set(input.nome),
            descricao: Set(input.descricao),
        }
    }
}
