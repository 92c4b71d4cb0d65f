use axum::Router;
use domain_categories::{CategoryService, SqliteCategoryRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SqliteCategoryRepository::new(state.db.clone());
    handlers::router(CategoryService::new(repository))
}
