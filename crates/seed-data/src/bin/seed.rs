//! Seeds the dashboard database.
//!
//! Run with:
//! ```
//! cargo run -p dashboard-seed --bin seed
//! ```
//!
//! Connection settings come from `DATABASE_URL` or the `DB_*` variables,
//! optionally loaded from a `.env` file.

use dashboard_seed::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;
    let seeder = Seeder::new(PasswordHashing::new(&config.hashing)?);

    let dataset = match &config.dataset_path {
        Some(path) => {
            tracing::info!("Loading dataset from {}", path.display());
            Dataset::from_json_file(path)?
        }
        None => placeholder::dataset(),
    };

    let report = seed_database(&config.database, &seeder, &dataset).await?;

    // Summary output
    for table in &report.tables {
        tracing::info!(
            "  {}: {} inserted, {} already present",
            table.table,
            table.inserted,
            table.skipped()
        );
    }

    Ok(())
}
