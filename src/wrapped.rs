//! # Wrapped Objects
//!
//! The capability a domain object offers to a presenter: named method
//! dispatch with JSON arguments and results, and association lookup.

use crate::error::{PresenterError, PresenterResult};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a wrapped domain object
pub type WrappedRef = Arc<dyn Wrapped>;

/// A domain object that presenters can wrap.
///
/// Implementations answer [`Wrapped::call`] for every method they support and
/// return [`PresenterError::MethodNotFound`] for everything else. Nothing is
/// checked when a presenter class declares delegates; an unsupported name only
/// fails when it is invoked.
pub trait Wrapped: fmt::Debug + Send + Sync {
    /// Name used as the receiver in error messages
    fn type_name(&self) -> &str;

    /// Invoke `method` with positional `args`
    fn call(&self, method: &str, args: &[Value]) -> PresenterResult<Value>;

    /// Fetch the raw value of an association
    fn association(&self, name: &str) -> PresenterResult<Association> {
        Err(PresenterError::method_not_found(self.type_name(), name))
    }

    /// JSON form used when the object itself ends up in a serialized payload
    fn to_json(&self) -> Value {
        Value::Null
    }
}

/// The raw value of an association as reported by the wrapped object
#[derive(Debug, Clone)]
pub enum Association {
    Single(WrappedRef),
    Sequence(Vec<WrappedRef>),
    Nil,
}

impl Association {
    pub fn single(object: impl Wrapped + 'static) -> Self {
        Self::Single(Arc::new(object))
    }

    pub fn sequence<W, I>(objects: I) -> Self
    where
        W: Wrapped + 'static,
        I: IntoIterator<Item = W>,
    {
        Self::Sequence(
            objects
                .into_iter()
                .map(|object| Arc::new(object) as WrappedRef)
                .collect(),
        )
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

impl From<Option<WrappedRef>> for Association {
    fn from(object: Option<WrappedRef>) -> Self {
        object.map_or(Self::Nil, Self::Single)
    }
}

/// Stand-in for an absent association value. Responds to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

impl Wrapped for Nil {
    fn type_name(&self) -> &str {
        "nil"
    }

    fn call(&self, method: &str, _args: &[Value]) -> PresenterResult<Value> {
        Err(PresenterError::method_not_found("nil", method))
    }
}

/// Take the single argument of a one-argument method
pub fn single_arg<'a>(method: &str, args: &'a [Value]) -> PresenterResult<&'a Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(PresenterError::invalid_arguments(
            method,
            format!("wrong number of arguments (given {}, expected 1)", args.len()),
        )),
    }
}

/// Reject arguments passed to a zero-argument method
pub fn no_args(method: &str, args: &[Value]) -> PresenterResult<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(PresenterError::invalid_arguments(
            method,
            format!("wrong number of arguments (given {}, expected 0)", args.len()),
        ))
    }
}
