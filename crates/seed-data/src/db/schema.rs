//! Table definitions and insert statements for the seeded tables.

use std::fmt;

/// Provides `uuid_generate_v4()` for the generated primary keys.
const UUID_EXTENSION: &str = r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#;

/// A table written by the seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Customers,
    Invoices,
    Revenue,
}

/// SQL needed to create and fill one table.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    /// Statements that must run before the table is created.
    pub prerequisites: &'static [&'static str],
    pub create: &'static str,
    pub insert: &'static str,
}

impl Table {
    /// Seeding order. Customers must precede invoices.
    pub const SEED_ORDER: [Table; 4] = [
        Table::Users,
        Table::Customers,
        Table::Invoices,
        Table::Revenue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Customers => "customers",
            Table::Invoices => "invoices",
            Table::Revenue => "revenue",
        }
    }

    pub fn schema(&self) -> TableSchema {
        match self {
            Table::Users => TableSchema {
                prerequisites: &[UUID_EXTENSION],
                create: r#"
                CREATE TABLE IF NOT EXISTS users (
                    id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    password TEXT NOT NULL
                )
                "#,
                // No conflict target: a clash on either id or email skips the row.
                insert: r#"
                INSERT INTO users (id, name, email, password)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT DO NOTHING
                "#,
            },
            Table::Customers => TableSchema {
                prerequisites: &[UUID_EXTENSION],
                create: r#"
                CREATE TABLE IF NOT EXISTS customers (
                    id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    email VARCHAR(255) NOT NULL,
                    image_url VARCHAR(255) NOT NULL
                )
                "#,
                insert: r#"
                INSERT INTO customers (id, name, email, image_url)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            },
            Table::Invoices => TableSchema {
                prerequisites: &[UUID_EXTENSION],
                // Ids are generated, so duplicates are detected on the invoice contents.
                // Tables created elsewhere may lack the composite key, so the insert
                // checks for an existing row instead of relying on ON CONFLICT.
                create: r#"
                CREATE TABLE IF NOT EXISTS invoices (
                    id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                    customer_id UUID NOT NULL REFERENCES customers (id),
                    amount INT NOT NULL,
                    status VARCHAR(255) NOT NULL,
                    date DATE NOT NULL,
                    UNIQUE (customer_id, amount, status, date)
                )
                "#,
                insert: r#"
                INSERT INTO invoices (customer_id, amount, status, date)
                SELECT $1, $2, $3, $4
                WHERE NOT EXISTS (
                    SELECT 1 FROM invoices
                    WHERE customer_id = $1 AND amount = $2 AND status = $3 AND date = $4
                )
                "#,
            },
            Table::Revenue => TableSchema {
                prerequisites: &[],
                create: r#"
                CREATE TABLE IF NOT EXISTS revenue (
                    month VARCHAR(4) NOT NULL UNIQUE,
                    revenue INT NOT NULL
                )
                "#,
                insert: r#"
                INSERT INTO revenue (month, revenue)
                VALUES ($1, $2)
                ON CONFLICT (month) DO NOTHING
                "#,
            },
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
