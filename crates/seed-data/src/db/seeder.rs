//! Idempotent table seeding.

use sqlx::PgConnection;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use tracing::{error, info};

use super::schema::Table;
use crate::error::SeedError;
use crate::models::{Customer, Dataset, Invoice, Revenue, User};
use crate::password::PasswordHashing;

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// A record that maps onto one row of a seeded table.
pub trait SeedRow {
    const TABLE: Table;

    /// Binds the record's values to the table's insert statement.
    fn bind<'q>(
        &'q self,
        query: PgQuery<'q>,
        hasher: &PasswordHashing,
    ) -> Result<PgQuery<'q>, SeedError>;
}

impl SeedRow for User {
    const TABLE: Table = Table::Users;

    fn bind<'q>(
        &'q self,
        query: PgQuery<'q>,
        hasher: &PasswordHashing,
    ) -> Result<PgQuery<'q>, SeedError> {
        let password_hash = hasher.hash(&self.password)?;
        Ok(query
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.email)
            .bind(password_hash))
    }
}

impl SeedRow for Customer {
    const TABLE: Table = Table::Customers;

    fn bind<'q>(
        &'q self,
        query: PgQuery<'q>,
        _hasher: &PasswordHashing,
    ) -> Result<PgQuery<'q>, SeedError> {
        Ok(query
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.image_url))
    }
}

impl SeedRow for Invoice {
    const TABLE: Table = Table::Invoices;

    fn bind<'q>(
        &'q self,
        query: PgQuery<'q>,
        _hasher: &PasswordHashing,
    ) -> Result<PgQuery<'q>, SeedError> {
        Ok(query
            .bind(self.customer_id)
            .bind(self.amount)
            .bind(&self.status)
            .bind(self.date))
    }
}

impl SeedRow for Revenue {
    const TABLE: Table = Table::Revenue;

    fn bind<'q>(
        &'q self,
        query: PgQuery<'q>,
        _hasher: &PasswordHashing,
    ) -> Result<PgQuery<'q>, SeedError> {
        Ok(query.bind(&self.month).bind(self.revenue))
    }
}

/// Outcome of seeding one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableReport {
    pub table: Table,
    /// Records in the input collection.
    pub attempted: usize,
    /// Rows actually written; the rest already existed.
    pub inserted: u64,
}

impl TableReport {
    pub fn skipped(&self) -> u64 {
        (self.attempted as u64).saturating_sub(self.inserted)
    }
}

/// Outcome of a full seeding run, in seeding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub tables: Vec<TableReport>,
}

impl SeedReport {
    pub fn get(&self, table: Table) -> Option<&TableReport> {
        self.tables.iter().find(|r| r.table == table)
    }

    pub fn total_inserted(&self) -> u64 {
        self.tables.iter().map(|r| r.inserted).sum()
    }
}

/// Creates the dashboard tables and fills them from a [`Dataset`].
///
/// The connection is passed into every call; the seeder itself only holds
/// the password hasher.
#[derive(Clone, Default)]
pub struct Seeder {
    hasher: PasswordHashing,
}

impl Seeder {
    pub fn new(hasher: PasswordHashing) -> Self {
        Self { hasher }
    }

    /// Seeds every table in order: users, customers, invoices, revenue.
    ///
    /// Stops at the first failing table. Rows written by earlier tables, and
    /// earlier rows of the failing table, stay in place.
    pub async fn seed_all(
        &self,
        conn: &mut PgConnection,
        dataset: &Dataset,
    ) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        report.tables.push(self.seed_users(conn, &dataset.users).await?);
        report
            .tables
            .push(self.seed_customers(conn, &dataset.customers).await?);
        report
            .tables
            .push(self.seed_invoices(conn, &dataset.invoices).await?);
        report
            .tables
            .push(self.seed_revenue(conn, &dataset.revenue).await?);

        Ok(report)
    }

    /// Seeds users, storing an Argon2id hash in place of each password.
    pub async fn seed_users(
        &self,
        conn: &mut PgConnection,
        users: &[User],
    ) -> Result<TableReport, SeedError> {
        self.seed_table(conn, users).await
    }

    pub async fn seed_customers(
        &self,
        conn: &mut PgConnection,
        customers: &[Customer],
    ) -> Result<TableReport, SeedError> {
        self.seed_table(conn, customers).await
    }

    /// Seeds invoices. The referenced customers must already exist.
    pub async fn seed_invoices(
        &self,
        conn: &mut PgConnection,
        invoices: &[Invoice],
    ) -> Result<TableReport, SeedError> {
        self.seed_table(conn, invoices).await
    }

    pub async fn seed_revenue(
        &self,
        conn: &mut PgConnection,
        revenue: &[Revenue],
    ) -> Result<TableReport, SeedError> {
        self.seed_table(conn, revenue).await
    }

    /// Ensures the table exists, then inserts each row in order, skipping
    /// rows that hit a uniqueness conflict.
    pub async fn seed_table<R: SeedRow + Sync>(
        &self,
        conn: &mut PgConnection,
        rows: &[R],
    ) -> Result<TableReport, SeedError> {
        let table = R::TABLE;

        match self.try_seed_table(conn, rows).await {
            Ok(report) => Ok(report),
            Err(e) => {
                error!(table = %table, error = %e, "Error seeding {table}");
                Err(SeedError::Step {
                    table,
                    source: Box::new(e),
                })
            }
        }
    }

    async fn try_seed_table<R: SeedRow + Sync>(
        &self,
        conn: &mut PgConnection,
        rows: &[R],
    ) -> Result<TableReport, SeedError> {
        let table = R::TABLE;
        let schema = table.schema();

        for &statement in schema.prerequisites {
            sqlx::query(statement).execute(&mut *conn).await?;
        }
        sqlx::query(schema.create).execute(&mut *conn).await?;
        info!("Created \"{table}\" table");

        let mut inserted = 0;
        for row in rows {
            let query = row.bind(sqlx::query(schema.insert), &self.hasher)?;
            inserted += query.execute(&mut *conn).await?.rows_affected();
        }

        let report = TableReport {
            table,
            attempted: rows.len(),
            inserted,
        };
        info!(
            table = %table,
            inserted = report.inserted,
            skipped = report.skipped(),
            "Seeded {table}"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_report_skipped() {
        let report = TableReport {
            table: Table::Customers,
            attempted: 6,
            inserted: 1,
        };
        assert_eq!(report.skipped(), 5);
    }

    #[test]
    fn test_seed_report_lookup_and_total() {
        let report = SeedReport {
            tables: vec![
                TableReport {
                    table: Table::Users,
                    attempted: 1,
                    inserted: 1,
                },
                TableReport {
                    table: Table::Revenue,
                    attempted: 12,
                    inserted: 12,
                },
            ],
        };

        assert_eq!(report.total_inserted(), 13);
        assert_eq!(report.get(Table::Revenue).map(|r| r.attempted), Some(12));
        assert!(report.get(Table::Invoices).is_none());
    }
}
