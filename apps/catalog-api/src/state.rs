use sea_orm::DatabaseConnection;

/// Shared application state. Cloning only clones the pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
