//! Callable prototype members.

use std::fmt;
use std::sync::Arc;

use super::Instance;
use crate::accessor::Accessor;
use crate::error::ClazzError;
use crate::value::Value;

/// Signature of a method body: the receiver and the positional arguments.
pub type MethodBody = dyn Fn(&Instance, &[Value]) -> Result<Value, ClazzError> + Send + Sync;

/// A method stored in a prototype.
///
/// Methods generated by the accessor helpers carry an [`Accessor`] descriptor
/// that `clazz` inspects when validating the prototype. Hand-written methods
/// carry none.
///
/// # Examples
///
/// ```
/// use clazz::{Instance, Method, Value, fields};
///
/// let double = Method::new(|this, _args| {
///     let x = this.get("x").and_then(Value::as_number).unwrap_or(0.0);
///     Ok(Value::from(x * 2.0))
/// });
///
/// let receiver = Instance::plain(fields! { x: 4 });
/// assert_eq!(double.call(&receiver, &[]).unwrap(), Value::from(8));
/// assert!(double.accessor().is_none());
/// ```
#[derive(Clone)]
pub struct Method {
    body: Arc<MethodBody>,
    accessor: Option<Accessor>,
}

impl Method {
    /// Wraps a closure as a method.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Result<Value, ClazzError> + Send + Sync + 'static,
    {
        Self {
            body: Arc::new(body),
            accessor: None,
        }
    }

    pub(crate) fn with_accessor<F>(accessor: Accessor, body: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Result<Value, ClazzError> + Send + Sync + 'static,
    {
        Self {
            body: Arc::new(body),
            accessor: Some(accessor),
        }
    }

    /// Returns the accessor descriptor of a generated method.
    #[must_use]
    pub const fn accessor(&self) -> Option<&Accessor> {
        self.accessor.as_ref()
    }

    /// Invokes the method with `this` as the receiver.
    ///
    /// # Errors
    ///
    /// Returns whatever error the method body produces.
    pub fn call(&self, this: &Instance, arguments: &[Value]) -> Result<Value, ClazzError> {
        (self.body)(this, arguments)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Method")
            .field("accessor", &self.accessor)
            .finish_non_exhaustive()
    }
}
