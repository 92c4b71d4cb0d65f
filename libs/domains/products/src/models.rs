use domain_categories::Category;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A product with its category embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    #[schema(example = "Teclado mecânico")]
    pub nome: String,
    #[schema(example = 349.9)]
    pub preco: f64,
    pub categoria_id: i32,
    pub categoria: Option<Category>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Teclado mecânico")]
    pub nome: String,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 349.9)]
    pub preco: f64,
    pub categoria_id: i32,
}

/// Full replacement of a product. `id`, when sent, must match the path.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    #[validate(range(exclusive_min = 0.0))]
    pub preco: f64,
    pub categoria_id: i32,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Only products of this category
    pub categoria_id: Option<i32>,
}
