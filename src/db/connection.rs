use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;
use crate::errors::HardblameError;

/// SQLite handle shared between the pipeline and the API server. Every
/// statement runs under the one mutex and releases it when done.
pub struct Database {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(path: &str) -> Result<Self, HardblameError> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!(path = %path, "Opening sqlite database");
        let conn = Connection::open(path)
            .map_err(|e| HardblameError::Database(format!("Failed to open database: {}", e)))?;

        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| HardblameError::Database(format!("Failed to set pragmas: {}", e)))?;

        let db = Self { conn: Arc::new(Mutex::new(conn)) };
        db.initialize()?;
        Ok(db)
    }

    pub fn in_memory() -> Result<Self, HardblameError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| HardblameError::Database(format!("Failed to open in-memory db: {}", e)))?;
        let db = Self { conn: Arc::new(Mutex::new(conn)) };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&self) -> Result<(), HardblameError> {
        let conn = self.lock()?;
        conn.execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| HardblameError::Database(format!("Failed to create tables: {}", e)))?;
        Ok(())
    }

    /// Drop and recreate every table.
    pub fn reset(&self) -> Result<(), HardblameError> {
        {
            let conn = self.lock()?;
            conn.execute_batch(super::schema::DROP_TABLES)
                .map_err(|e| HardblameError::Database(format!("Failed to drop tables: {}", e)))?;
        }
        info!("Dropped tables");
        self.initialize()
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Connection>, HardblameError> {
        self.conn
            .lock()
            .map_err(|_| HardblameError::Database("Database mutex poisoned".into()))
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self { conn: self.conn.clone() }
    }
}
