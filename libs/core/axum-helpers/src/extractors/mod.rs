//! Custom extractors for Axum handlers.
//!
//! Every extractor rejects with [`AppError`](crate::AppError), so every
//! malformed request gets the same JSON error body.

pub mod id_path;
pub mod query_params;
pub mod validated_json;

pub use id_path::IdPath;
pub use query_params::QueryParams;
pub use validated_json::ValidatedJson;
