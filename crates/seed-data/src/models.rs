//! Record types consumed by the seeder.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::error::SeedError;

/// A dashboard login. The password is plaintext input and is hashed before
/// it reaches the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// An invoice for a customer. The row id is generated by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: String,
    pub date: Date,
}

/// Revenue for one month, keyed by a short label such as `Jan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}

/// The four input collections written by a seeding run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub revenue: Vec<Revenue>,
}

impl Dataset {
    /// Loads a dataset from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| SeedError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| SeedError::DatasetParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_dataset_from_json() {
        let json = r#"{
            "customers": [
                {
                    "id": "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
                    "name": "Evil Rabbit",
                    "email": "evil@rabbit.com",
                    "image_url": "/customers/evil-rabbit.png"
                }
            ],
            "invoices": [
                {
                    "customer_id": "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
                    "amount": 15795,
                    "status": "pending",
                    "date": "2022-12-06"
                }
            ],
            "revenue": [{ "month": "Jan", "revenue": 2000 }]
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();

        assert!(dataset.users.is_empty());
        assert_eq!(dataset.customers.len(), 1);
        assert_eq!(dataset.invoices[0].customer_id, dataset.customers[0].id);
        assert_eq!(dataset.invoices[0].date, date!(2022 - 12 - 06));
        assert_eq!(dataset.revenue[0].month, "Jan");
    }

    #[test]
    fn test_dataset_missing_file() {
        let err = Dataset::from_json_file("/nonexistent/dataset.json").unwrap_err();
        assert!(matches!(err, SeedError::DatasetRead { .. }));
    }
}
