use axum::Router;
use domain_products::{ProductService, SqliteProductRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SqliteProductRepository::new(state.db.clone());
    handlers::router(ProductService::new(repository))
}
