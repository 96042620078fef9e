use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::Table;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    #[error("Error seeding {table}: {source}")]
    Step {
        table: Table,
        #[source]
        source: Box<SeedError>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read dataset {}: {source}", .path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {}: {source}", .path.display())]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SeedError {
    /// The table whose seeding step failed, if any.
    pub fn table(&self) -> Option<Table> {
        match self {
            SeedError::Step { table, .. } => Some(*table),
            _ => None,
        }
    }

    /// SQLSTATE code of the underlying database error, e.g. `23503` for a
    /// foreign-key violation.
    pub fn database_code(&self) -> Option<String> {
        match self {
            SeedError::Connect(e) | SeedError::Database(e) => e
                .as_database_error()
                .and_then(|db| db.code())
                .map(|code| code.into_owned()),
            SeedError::Step { source, .. } => source.database_code(),
            _ => None,
        }
    }
}
