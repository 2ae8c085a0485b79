//! # Declaration Registry
//!
//! Per-presenter-class registries of attributes, delegated methods and wrapped
//! associations.
//!
//! ## Architecture
//!
//! ```text
//! PresenterClassBuilder  (declarations: unwrap_for, attribute, method, wrap_association)
//!          │ build()
//!          ▼
//! Arc<PresenterClass>    (frozen dispatch table: name -> Resolution)
//!          │ Presenter::new
//!          ▼
//! Presenter              (wrapped object + association overrides + memo slots)
//! ```

pub mod association;
pub mod presenter_class;

pub use association::AssociationSpec;
pub use presenter_class::{
    LocalMethod, PresenterClass, PresenterClassBuilder, Resolution, Visibility,
};
