//! Wrapped association declarations

use super::PresenterClass;
use crate::presenter::PresenterOptions;
use std::sync::Arc;

/// Declaration of an association accessor that wraps associated objects in
/// presenters of their own.
///
/// `association` names the association on the wrapped object; `exposed_as`
/// names the generated presenter accessor and keys both the class default and
/// any per-instance override. `options` are handed to every child presenter.
#[derive(Debug, Clone)]
pub struct AssociationSpec {
    association: String,
    exposed_as: String,
    presenter_class: Arc<PresenterClass>,
    options: PresenterOptions,
}

impl AssociationSpec {
    /// Wrap `association` with `presenter_class`, exposed under the same name
    pub fn new(association: impl Into<String>, presenter_class: &Arc<PresenterClass>) -> Self {
        let association = association.into();
        Self {
            exposed_as: association.clone(),
            association,
            presenter_class: Arc::clone(presenter_class),
            options: PresenterOptions::default(),
        }
    }

    pub fn exposed_as(mut self, name: impl Into<String>) -> Self {
        self.exposed_as = name.into();
        self
    }

    /// Options passed to each child presenter's constructor
    pub fn with_options(mut self, options: PresenterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn association(&self) -> &str {
        &self.association
    }

    pub fn exposed_name(&self) -> &str {
        &self.exposed_as
    }

    pub fn presenter_class(&self) -> &Arc<PresenterClass> {
        &self.presenter_class
    }

    pub fn options(&self) -> &PresenterOptions {
        &self.options
    }
}
