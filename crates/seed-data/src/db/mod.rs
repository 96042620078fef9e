//! Database seeding.
//!
//! The [`Seeder`] creates the dashboard tables and inserts a [`Dataset`]
//! over a single connection; [`seed_database`] owns that connection for the
//! length of one run.

mod schema;
mod seeder;

pub use schema::{Table, TableSchema};
pub use seeder::{SeedReport, SeedRow, Seeder, TableReport};

use sqlx::{Connection, PgConnection};
use tracing::{error, info, warn};

use crate::config::DbConfig;
use crate::error::SeedError;
use crate::models::Dataset;

/// Connects, seeds every table and closes the connection.
///
/// The connection is closed before returning on both the success and the
/// failure path.
pub async fn seed_database(
    config: &DbConfig,
    seeder: &Seeder,
    dataset: &Dataset,
) -> Result<SeedReport, SeedError> {
    info!(
        host = config.host(),
        port = config.port(),
        database = config.database().unwrap_or_default(),
        user = config.user(),
        "Connecting to database"
    );

    let mut conn = PgConnection::connect_with(config.connect_options())
        .await
        .map_err(SeedError::Connect)?;

    let result = seeder.seed_all(&mut conn, dataset).await;

    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection: {e}");
    }

    match &result {
        Ok(_) => info!("Database seeding complete."),
        Err(e) => error!("An error occurred while attempting to seed the database: {e}"),
    }

    result
}
