//! Seeds the dashboard database with placeholder data.
//!
//! Creates the `users`, `customers`, `invoices` and `revenue` tables if they
//! are missing and inserts a fixed dataset. Rows that already exist are left
//! alone, so running the seeder again is a no-op.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dashboard_seed::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let seeder = Seeder::new(PasswordHashing::new(&config.hashing)?);
//! let report = seed_database(&config.database, &seeder, &placeholder::dataset()).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod password;
pub mod placeholder;

pub use error::SeedError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, DbConfig, HashConfig, SeedConfig};
    pub use crate::db::{SeedReport, Seeder, Table, TableReport, seed_database};
    pub use crate::error::SeedError;
    pub use crate::models::{Customer, Dataset, Invoice, Revenue, User};
    pub use crate::password::PasswordHashing;
    pub use crate::placeholder;
}
