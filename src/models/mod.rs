//! # Model Layer Adapters
//!
//! Stand-ins for the ORM side of a presenter: model descriptors that list
//! columns in schema order, and row-backed records that presenters wrap.
//!
//! - [`ModelDescriptor`] - ordered column names for a model
//! - [`StaticModel`] - in-memory descriptor
//! - [`Record`] - a model row usable as a wrapped object
//! - [`AttributeMode`] - which columns become attributes in
//!   [`PresenterClassBuilder::unwrap_columns_for`]
//! - `PgTableSchema` - PostgreSQL schema introspection (feature `postgres`)
//!
//! [`PresenterClassBuilder::unwrap_columns_for`]: crate::registry::PresenterClassBuilder::unwrap_columns_for

pub mod columns;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod record;

pub use columns::{AttributeMode, ColumnFilter};
#[cfg(feature = "postgres")]
pub use postgres::{ColumnInfo, PgTableSchema};
pub use record::{Record, RecordMethod};

/// Schema view of a model: its name and column names in schema order
pub trait ModelDescriptor {
    fn model_name(&self) -> &str;

    fn column_names(&self) -> Vec<String>;
}

/// Model descriptor with a fixed column list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticModel {
    name: String,
    columns: Vec<String>,
}

impl StaticModel {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl ModelDescriptor for StaticModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }
}
