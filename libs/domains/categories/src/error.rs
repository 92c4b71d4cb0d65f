use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Categoria com ID {0} não encontrada.")]
    NotFound(i32),

    #[error("O ID da categoria não corresponde.")]
    IdMismatch { path: i32, body: i32 },

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => AppError::NotFound(err.to_string()),
            CategoryError::IdMismatch { .. } => AppError::BadRequest(err.to_string()),
            CategoryError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CategoryError::NotFound(3).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CategoryError::IdMismatch { path: 1, body: 2 }
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CategoryError::Database(DbErr::Custom("disk I/O error".into()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            CategoryError::NotFound(42).to_string(),
            "Categoria com ID 42 não encontrada."
        );
    }
}
