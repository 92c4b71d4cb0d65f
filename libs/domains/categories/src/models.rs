use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Field names follow the `categorias` columns; JSON uses camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    #[schema(example = "Periféricos")]
    pub nome: String,
    pub descricao: Option<String>,
}

/// A product as listed under its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: i32,
    pub nome: String,
    pub preco: f64,
    pub categoria_id: i32,
}

/// Category returned by `GET /categorias/{id}`, with every product it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub produtos: Vec<ProductSummary>,
}

impl CategoryDetail {
    pub fn new(category: Category, produtos: Vec<ProductSummary>) -> Self {
        Self {
            id: category.id,
            nome: category.nome,
            descricao: category.descricao,
            produtos,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Periféricos")]
    pub nome: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub descricao: Option<String>,
}

/// Full replacement of a category. `id`, when sent, must match the path.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub nome: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub descricao: Option<String>,
}
