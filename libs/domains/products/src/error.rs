use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Produto com ID {0} não encontrado.")]
    NotFound(i32),

    #[error("O ID do produto não corresponde.")]
    IdMismatch { path: i32, body: i32 },

    /// The referenced category does not exist
    #[error("Categoria com ID {0} não existe.")]
    CategoryNotFound(i32),

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::IdMismatch { .. } | ProductError::CategoryNotFound(_) => {
                AppError::BadRequest(err.to_string())
            }
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_missing_category_is_bad_request() {
        let response = ProductError::CategoryNotFound(9).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ProductError::NotFound(3).to_string(),
            "Produto com ID 3 não encontrado."
        );
        assert_eq!(
            ProductError::NotFound(3).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
