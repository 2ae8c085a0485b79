//! # PostgreSQL Schema Introspection
//!
//! Reads a table's columns from `information_schema` so presenter classes can
//! unwrap them, and loads single rows as [`Record`]s.
//!
//! ```rust,no_run
//! use gift_wrap::models::{AttributeMode, PgTableSchema};
//! use gift_wrap::{Configuration, PresenterClass};
//! use sqlx::PgPool;
//!
//! # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let users = PgTableSchema::load(pool, "users").await?;
//! let user_presenter = PresenterClass::builder("UserPresenter", &Configuration::default())
//!     .unwrap_columns_for(&users, AttributeMode::except(["encrypted_password"]))
//!     .build();
//!
//! if let Some(user) = users.find_record(pool, 1).await? {
//!     println!("{}", user_presenter.present(user).to_json()?);
//! }
//! # Ok(())
//! # }
//! ```

use super::{ModelDescriptor, Record};
use crate::error::{PresenterError, PresenterResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::debug;

/// One column as reported by `information_schema.columns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
}

/// Column layout of a table in the current schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PgTableSchema {
    table_name: String,
    columns: Vec<ColumnInfo>,
}

impl PgTableSchema {
    /// Load the columns of `table_name`, in ordinal position order
    pub async fn load(pool: &PgPool, table_name: &str) -> PresenterResult<Self> {
        let columns = sqlx::query_as::<_, ColumnInfo>(
            r#"
            SELECT column_name::text AS column_name,
                   data_type::text AS data_type,
                   (is_nullable = 'YES') AS is_nullable
            FROM information_schema.columns
            WHERE table_schema = current_schema()
              AND table_name = $1
            ORDER BY ordinal_position
            "#,
        )
        .bind(table_name)
        .fetch_all(pool)
        .await?;

        if columns.is_empty() {
            return Err(PresenterError::TableNotFound {
                table: table_name.to_string(),
            });
        }

        debug!(
            table = table_name,
            columns = columns.len(),
            "Loaded table schema"
        );

        Ok(Self {
            table_name: table_name.to_string(),
            columns,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// Load the row with primary key `id` as a record
    pub async fn find_record(&self, pool: &PgPool, id: i64) -> PresenterResult<Option<Record>> {
        // row_to_json keeps column order, jsonb would not
        let sql = format!(
            "SELECT row_to_json(t) FROM {} t WHERE t.id = $1",
            quote_identifier(&self.table_name)
        );

        let row: Option<Value> = sqlx::query_scalar::<_, Value>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        row.map(|row| Record::from_json(&self.table_name, row))
            .transpose()
    }
}

impl ModelDescriptor for PgTableSchema {
    fn model_name(&self) -> &str {
        &self.table_name
    }

    fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.column_name.clone())
            .collect()
    }
}

fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}
