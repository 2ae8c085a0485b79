//! # Presenter Instances
//!
//! A [`Presenter`] wraps one domain object and answers the names its
//! [`PresenterClass`] declared. Association accessors build child presenters
//! on first access and return the same instances on every later access.

use crate::error::{PresenterError, PresenterResult};
use crate::registry::{AssociationSpec, PresenterClass, Resolution};
use crate::wrapped::{no_args, Association, Nil, WrappedRef};
use indexmap::IndexMap;
use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace, warn};

/// Attribute name to value, in attribute declaration order
pub type Attributes = IndexMap<String, Presented>;

/// Per-instance presenter options
#[derive(Debug, Clone, Default)]
pub struct PresenterOptions {
    associations: HashMap<String, Arc<PresenterClass>>,
}

impl PresenterOptions {
    /// Override the presenter class used for one exposed association
    pub fn with_association(
        mut self,
        exposed_as: impl Into<String>,
        presenter_class: &Arc<PresenterClass>,
    ) -> Self {
        self.associations
            .insert(exposed_as.into(), Arc::clone(presenter_class));
        self
    }

    pub fn association(&self, exposed_as: &str) -> Option<&Arc<PresenterClass>> {
        self.associations.get(exposed_as)
    }

    pub fn associations(&self) -> &HashMap<String, Arc<PresenterClass>> {
        &self.associations
    }
}

/// The result of invoking a name on a presenter
#[derive(Debug, Clone)]
pub enum Presented {
    Value(Value),
    /// The raw wrapped object (see `wrapped_as`)
    Object(WrappedRef),
    One(Arc<Presenter>),
    Many(Arc<[Arc<Presenter>]>),
}

impl Presented {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_presenter(&self) -> Option<&Arc<Presenter>> {
        match self {
            Self::One(presenter) => Some(presenter),
            _ => None,
        }
    }

    pub fn as_presenters(&self) -> Option<&[Arc<Presenter>]> {
        match self {
            Self::Many(presenters) => Some(&presenters[..]),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&WrappedRef> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// JSON projection: presenters become their serializable hashes
    pub fn as_json(&self) -> PresenterResult<Value> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Object(object) => Ok(object.to_json()),
            Self::One(presenter) => Ok(Value::Object(presenter.serializable_hash()?)),
            Self::Many(presenters) => presenters
                .iter()
                .map(|presenter| presenter.serializable_hash().map(Value::Object))
                .collect::<PresenterResult<Vec<_>>>()
                .map(Value::Array),
        }
    }
}

impl From<Value> for Presented {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Presenter> for Presented {
    fn from(presenter: Presenter) -> Self {
        Self::One(Arc::new(presenter))
    }
}

/// A wrapped domain object plus the declarations of its presenter class
pub struct Presenter {
    class: Arc<PresenterClass>,
    wrapped: WrappedRef,
    options: PresenterOptions,
    memo: HashMap<String, OnceLock<Presented>>,
}

impl Presenter {
    pub fn new(class: &Arc<PresenterClass>, wrapped: WrappedRef, options: PresenterOptions) -> Self {
        let memo = class
            .association_defaults()
            .keys()
            .map(|exposed_as| (exposed_as.clone(), OnceLock::new()))
            .collect();

        Self {
            class: Arc::clone(class),
            wrapped,
            options,
            memo,
        }
    }

    pub fn class(&self) -> &Arc<PresenterClass> {
        &self.class
    }

    pub fn wrapped(&self) -> &WrappedRef {
        &self.wrapped
    }

    pub fn options(&self) -> &PresenterOptions {
        &self.options
    }

    pub fn responds_to(&self, name: &str) -> bool {
        self.class.responds_to(name)
    }

    /// Invoke a public name
    pub fn call(&self, name: &str, args: &[Value]) -> PresenterResult<Presented> {
        match self.class.resolve(name) {
            Some(resolution) if resolution.is_public() => self.dispatch(name, resolution, args),
            _ => Err(PresenterError::method_not_found(self.class.name(), name)),
        }
    }

    /// Invoke any declared name, private ones included
    pub fn send(&self, name: &str, args: &[Value]) -> PresenterResult<Presented> {
        match self.class.resolve(name) {
            Some(resolution) => self.dispatch(name, resolution, args),
            None => Err(PresenterError::method_not_found(self.class.name(), name)),
        }
    }

    fn dispatch(
        &self,
        name: &str,
        resolution: &Resolution,
        args: &[Value],
    ) -> PresenterResult<Presented> {
        trace!(presenter = %self.class.name(), method = name, ?resolution, "Dispatching");

        match resolution {
            Resolution::Delegate => self.wrapped.call(name, args).map(Presented::Value),
            Resolution::Local { method, .. } => method(self, args),
            Resolution::WrappedAssociation(spec) => {
                no_args(name, args)?;
                self.wrapped_association(spec)
            }
            Resolution::WrappedReference => {
                no_args(name, args)?;
                Ok(Presented::Object(Arc::clone(&self.wrapped)))
            }
        }
    }

    /// Effective presenter class for an exposed association name: the
    /// instance override if present, else the class default.
    pub fn wrapped_association_presenter(
        &self,
        exposed_as: &str,
    ) -> PresenterResult<Arc<PresenterClass>> {
        self.options
            .association(exposed_as)
            .or_else(|| self.class.association_default(exposed_as))
            .cloned()
            .ok_or_else(|| {
                warn!(presenter = %self.class.name(), association = exposed_as, "Unregistered association");
                PresenterError::unregistered_association(exposed_as)
            })
    }

    fn wrapped_association(&self, spec: &AssociationSpec) -> PresenterResult<Presented> {
        let slot = self.memo.get(spec.exposed_name());
        if let Some(cached) = slot.and_then(OnceLock::get) {
            return Ok(cached.clone());
        }

        let presenter_class = self.wrapped_association_presenter(spec.exposed_name())?;
        let child = |object: WrappedRef| {
            Arc::new(Presenter::new(&presenter_class, object, spec.options().clone()))
        };

        let presented = match self.wrapped.association(spec.association())? {
            Association::Sequence(objects) => {
                Presented::Many(objects.into_iter().map(child).collect())
            }
            Association::Single(object) => Presented::One(child(object)),
            Association::Nil => Presented::One(child(Arc::new(Nil))),
        };

        debug!(
            presenter = %self.class.name(),
            association = spec.association(),
            exposed_as = spec.exposed_name(),
            with = %presenter_class.name(),
            "Wrapped association"
        );

        Ok(match slot {
            Some(slot) => slot.get_or_init(|| presented).clone(),
            None => presented,
        })
    }

    /// Invoke every attribute name, in declaration order
    pub fn attributes(&self) -> PresenterResult<Attributes> {
        self.class
            .attribute_names()
            .iter()
            .map(|name| -> PresenterResult<(String, Presented)> {
                Ok((name.clone(), self.send(name, &[])?))
            })
            .collect()
    }

    pub fn is_serializable(&self) -> bool {
        self.class.is_serializable()
    }

    /// Attributes rendered as JSON. Requires serializer support.
    pub fn serializable_hash(&self) -> PresenterResult<Map<String, Value>> {
        if !self.is_serializable() {
            return Err(PresenterError::SerializationDisabled {
                presenter: self.class.name().to_string(),
            });
        }

        self.attributes()?
            .into_iter()
            .map(|(name, value)| -> PresenterResult<(String, Value)> {
                Ok((name, value.as_json()?))
            })
            .collect()
    }

    pub fn to_json(&self) -> PresenterResult<String> {
        Ok(serde_json::to_string(&self.serializable_hash()?)?)
    }
}

impl fmt::Debug for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("class", &self.class.name())
            .field("wrapped", &self.wrapped)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Serialize for Presenter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serializable_hash()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
