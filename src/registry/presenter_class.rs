//! # Presenter Class Registry
//!
//! A [`PresenterClass`] is the frozen result of a declaration block: which
//! names delegate to the wrapped object, which names are attributes, which
//! associations get wrapped, and how every callable name is resolved.
//!
//! ## Usage
//!
//! ```rust
//! use gift_wrap::{Configuration, PresenterClass, Presented};
//! use serde_json::json;
//!
//! let config = Configuration::default();
//! let map_presenter = PresenterClass::builder("MapPresenter", &config)
//!     .unwrap_for(["type"], false)
//!     .unwrap_for(["units"], true)
//!     .method("metric?", |presenter, _args| {
//!         let units = presenter.send("units", &[])?.as_json()?;
//!         Ok(Presented::from(json!(units == "m" || units == "km")))
//!     })
//!     .attribute("metric?")
//!     .build();
//!
//! assert!(map_presenter.responds_to("type"));
//! assert!(!map_presenter.responds_to("center"));
//! ```

use super::association::AssociationSpec;
use crate::config::Configuration;
use crate::error::PresenterResult;
use crate::presenter::{Presented, Presenter, PresenterOptions};
use crate::wrapped::Wrapped;
use indexmap::IndexSet;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Body of a locally defined presenter method
pub type LocalMethod =
    Arc<dyn Fn(&Presenter, &[Value]) -> PresenterResult<Presented> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Reachable through [`Presenter::send`] only
    Private,
}

/// How a presenter resolves a callable name
#[derive(Clone)]
pub enum Resolution {
    /// Forward to the wrapped object with identical arguments
    Delegate,
    /// Run a method defined on the presenter class
    Local {
        method: LocalMethod,
        visibility: Visibility,
    },
    /// Wrap the associated object(s) in presenters and memoize them
    WrappedAssociation(AssociationSpec),
    /// Return the wrapped object itself
    WrappedReference,
}

impl Resolution {
    pub fn visibility(&self) -> Visibility {
        match self {
            Self::Local { visibility, .. } => *visibility,
            Self::WrappedReference => Visibility::Private,
            Self::Delegate | Self::WrappedAssociation(_) => Visibility::Public,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility() == Visibility::Public
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delegate => f.write_str("Delegate"),
            Self::Local { visibility, .. } => f
                .debug_struct("Local")
                .field("visibility", visibility)
                .finish_non_exhaustive(),
            Self::WrappedAssociation(spec) => f
                .debug_tuple("WrappedAssociation")
                .field(&spec.association())
                .field(&spec.presenter_class().name())
                .finish(),
            Self::WrappedReference => f.write_str("WrappedReference"),
        }
    }
}

/// Immutable declaration registry for one kind of presenter
pub struct PresenterClass {
    name: String,
    attribute_names: IndexSet<String>,
    delegated_names: IndexSet<String>,
    association_defaults: HashMap<String, Arc<PresenterClass>>,
    dispatch: HashMap<String, Resolution>,
    serializable: bool,
}

impl PresenterClass {
    /// Start declaring a presenter class
    pub fn builder(name: impl Into<String>, config: &Configuration) -> PresenterClassBuilder {
        PresenterClassBuilder::new(name, config)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute names in declaration order
    pub fn attribute_names(&self) -> &IndexSet<String> {
        &self.attribute_names
    }

    pub fn delegated_names(&self) -> &IndexSet<String> {
        &self.delegated_names
    }

    /// Default presenter class per exposed association name
    pub fn association_defaults(&self) -> &HashMap<String, Arc<PresenterClass>> {
        &self.association_defaults
    }

    pub fn association_default(&self, exposed_as: &str) -> Option<&Arc<PresenterClass>> {
        self.association_defaults.get(exposed_as)
    }

    /// Whether presenters of this class support serialization
    pub fn is_serializable(&self) -> bool {
        self.serializable
    }

    pub fn resolve(&self, name: &str) -> Option<&Resolution> {
        self.dispatch.get(name)
    }

    /// True when `name` is publicly callable on presenters of this class
    pub fn responds_to(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(Resolution::is_public)
    }

    /// Wrap `object` with no per-instance options
    pub fn present(self: &Arc<Self>, object: impl Wrapped + 'static) -> Presenter {
        Presenter::new(self, Arc::new(object), PresenterOptions::default())
    }
}

impl fmt::Debug for PresenterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenterClass")
            .field("name", &self.name)
            .field("attribute_names", &self.attribute_names)
            .field("delegated_names", &self.delegated_names)
            .field(
                "association_defaults",
                &self
                    .association_defaults
                    .iter()
                    .map(|(name, class)| (name.as_str(), class.name()))
                    .collect::<HashMap<_, _>>(),
            )
            .field("serializable", &self.serializable)
            .finish()
    }
}

/// Collects declarations for a [`PresenterClass`]
pub struct PresenterClassBuilder {
    name: String,
    serializable: bool,
    attribute_names: IndexSet<String>,
    delegated_names: IndexSet<String>,
    association_defaults: HashMap<String, Arc<PresenterClass>>,
    dispatch: HashMap<String, Resolution>,
}

impl PresenterClassBuilder {
    /// Serializer support is read from `config` once, here
    pub fn new(name: impl Into<String>, config: &Configuration) -> Self {
        Self {
            name: name.into(),
            serializable: config.use_serializers(),
            attribute_names: IndexSet::new(),
            delegated_names: IndexSet::new(),
            association_defaults: HashMap::new(),
            dispatch: HashMap::new(),
        }
    }

    /// Mark `name` as an attribute. It still has to resolve to something
    /// callable when attributes are collected.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute_names.insert(name.into());
        self
    }

    pub fn attributes<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |builder, name| builder.attribute(name))
    }

    /// Delegate each name to the wrapped object, optionally as attributes
    pub fn unwrap_for<I, S>(mut self, names: I, attribute: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            self.delegated_names.insert(name.clone());
            if attribute {
                self.attribute_names.insert(name.clone());
            }
            self.dispatch.insert(name, Resolution::Delegate);
        }
        self
    }

    /// Define a public method on the presenter
    pub fn method<F>(self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Presenter, &[Value]) -> PresenterResult<Presented> + Send + Sync + 'static,
    {
        self.local(name.into(), Arc::new(method), Visibility::Public)
    }

    /// Define a method reachable only from inside the presenter
    pub fn private_method<F>(self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Presenter, &[Value]) -> PresenterResult<Presented> + Send + Sync + 'static,
    {
        self.local(name.into(), Arc::new(method), Visibility::Private)
    }

    fn local(mut self, name: String, method: LocalMethod, visibility: Visibility) -> Self {
        self.dispatch
            .insert(name, Resolution::Local { method, visibility });
        self
    }

    /// Private accessor returning the wrapped object under `reference`
    pub fn wrapped_as(mut self, reference: impl Into<String>) -> Self {
        self.dispatch
            .insert(reference.into(), Resolution::WrappedReference);
        self
    }

    /// Generate an accessor wrapping an association in presenters
    pub fn wrap_association(mut self, spec: AssociationSpec) -> Self {
        let exposed_as = spec.exposed_name().to_string();
        self.association_defaults
            .insert(exposed_as.clone(), Arc::clone(spec.presenter_class()));
        self.dispatch
            .insert(exposed_as, Resolution::WrappedAssociation(spec));
        self
    }

    pub fn build(self) -> Arc<PresenterClass> {
        debug!(
            presenter = %self.name,
            attributes = ?self.attribute_names,
            delegated = ?self.delegated_names,
            associations = self.association_defaults.len(),
            serializable = self.serializable,
            "Presenter class declared"
        );

        Arc::new(PresenterClass {
            name: self.name,
            attribute_names: self.attribute_names,
            delegated_names: self.delegated_names,
            association_defaults: self.association_defaults,
            dispatch: self.dispatch,
            serializable: self.serializable,
        })
    }
}
