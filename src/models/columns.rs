//! # Column Declarations
//!
//! Declares a delegate for every column of a model in one call, choosing which
//! columns also become attributes.

use super::ModelDescriptor;
use crate::registry::PresenterClassBuilder;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Which columns become attributes when unwrapping a whole model
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeMode {
    /// Every column is an attribute
    #[default]
    All,
    /// No column is an attribute; all still delegate
    None,
    Filter(ColumnFilter),
}

impl AttributeMode {
    pub fn only<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Filter(ColumnFilter {
            only: Some(columns.into_iter().map(Into::into).collect()),
            except: None,
        })
    }

    pub fn except<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Filter(ColumnFilter {
            only: None,
            except: Some(columns.into_iter().map(Into::into).collect()),
        })
    }

    /// Split `columns` into (attributes, delegate-only), keeping column order
    pub fn partition(&self, columns: &[String]) -> (Vec<String>, Vec<String>) {
        match self {
            Self::All => (columns.to_vec(), Vec::new()),
            Self::None => (Vec::new(), columns.to_vec()),
            Self::Filter(filter) => filter.partition(columns),
        }
    }
}

impl From<bool> for AttributeMode {
    fn from(attribute: bool) -> Self {
        if attribute {
            Self::All
        } else {
            Self::None
        }
    }
}

impl From<ColumnFilter> for AttributeMode {
    fn from(filter: ColumnFilter) -> Self {
        Self::Filter(filter)
    }
}

/// `only` wins over `except`; a filter with neither keeps every column as an
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnFilter {
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<String>>,
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Option::is_none")]
    pub except: Option<Vec<String>>,
}

impl ColumnFilter {
    pub fn partition(&self, columns: &[String]) -> (Vec<String>, Vec<String>) {
        if let Some(only) = &self.only {
            columns.iter().cloned().partition(|column| only.contains(column))
        } else if let Some(except) = &self.except {
            columns
                .iter()
                .cloned()
                .partition(|column| !except.contains(column))
        } else {
            (columns.to_vec(), Vec::new())
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(column) => vec![column],
        OneOrMany::Many(columns) => columns,
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeModeRepr {
    Flag(bool),
    Filter(ColumnFilter),
}

impl<'de> Deserialize<'de> for AttributeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match AttributeModeRepr::deserialize(deserializer)? {
            AttributeModeRepr::Flag(attribute) => attribute.into(),
            AttributeModeRepr::Filter(filter) => filter.into(),
        })
    }
}

impl PresenterClassBuilder {
    /// Delegate every column of `model`. Attribute columns are declared
    /// first, then delegate-only columns, each group in column order.
    pub fn unwrap_columns_for<M>(self, model: &M, mode: AttributeMode) -> Self
    where
        M: ModelDescriptor + ?Sized,
    {
        let columns = model.column_names();
        let (as_attributes, not_attributes) = mode.partition(&columns);

        debug!(
            model = model.model_name(),
            attributes = ?as_attributes,
            delegate_only = ?not_attributes,
            "Unwrapping model columns"
        );

        self.unwrap_for(as_attributes, true)
            .unwrap_for(not_attributes, false)
    }
}
