//! SQLite test infrastructure
//!
//! Every [`TestDatabase`] is a fresh database file in the system temp
//! directory with all migrations applied. The file is removed on drop.

use migration::Migrator;
use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use uuid::Uuid;

pub struct TestDatabase {
    path: PathBuf,
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let path = std::env::temp_dir().join(format!("catalog-test-{}.db", Uuid::new_v4()));
        let connection_string = format!("sqlite://{}?mode=rwc", path.display());

        let connection = database::sqlite::connect(&connection_string)
            .await
            .expect("Failed to open test database");

        database::sqlite::run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to migrate test database");

        tracing::info!(path = %path.display(), "Test database ready (SQLite)");

        Self {
            path,
            connection,
            connection_string,
        }
    }

    /// Get a clone of the database connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}
