#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Gift Wrap
//!
//! Presenters for ORM models.
//!
//! ## Overview
//!
//! A presenter wraps one domain object and exposes only what its presenter
//! class declares: methods delegated to the wrapped object, methods defined on
//! the presenter itself, and association accessors that wrap associated
//! objects in presenters of their own. A subset of those names are
//! **attributes**, which make up the presenter's serialized form.
//!
//! ## Module Organization
//!
//! - [`registry`] - Presenter class declarations and dispatch tables
//! - [`presenter`] - Presenter instances, attributes and serialization
//! - [`wrapped`] - The capability wrapped domain objects provide
//! - [`models`] - Column introspection, row-backed records, PostgreSQL schemas
//! - [`config`] - Serializer configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use gift_wrap::models::{AttributeMode, Record, StaticModel};
//! use gift_wrap::{Configuration, PresenterClass};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Configuration::default();
//! let users = StaticModel::new("User", ["email", "first_name", "encrypted_password"]);
//!
//! let user_presenter = PresenterClass::builder("UserPresenter", &config)
//!     .unwrap_columns_for(&users, AttributeMode::except(["encrypted_password"]))
//!     .build();
//!
//! let user = Record::new("User")
//!     .with_value("email", json!("paulwall@example.com"))
//!     .with_value("first_name", json!("Paul"))
//!     .with_value("encrypted_password", json!("$2a$10$..."));
//!
//! let presenter = user_presenter.present(user);
//! assert_eq!(
//!     presenter.to_json()?,
//!     r#"{"email":"paulwall@example.com","first_name":"Paul"}"#
//! );
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod registry;
pub mod wrapped;

pub use config::Configuration;
pub use error::{PresenterError, PresenterResult};
pub use presenter::{Attributes, Presented, Presenter, PresenterOptions};
pub use registry::{AssociationSpec, PresenterClass, PresenterClassBuilder};
pub use wrapped::{Association, Nil, Wrapped, WrappedRef};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
