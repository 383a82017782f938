//! Accessor generators.
//!
//! These helpers return [`Method`]s meant to be placed in a
//! [`PrototypeSpec`](crate::PrototypeSpec):
//!
//! - [`getter`]: read a field
//! - [`setter`] / [`setter_with`]: copy-on-write field update, optionally validated
//! - [`alias`]: forward a call to the object stored in a field
//! - [`lens`]: forward a call to the object stored in a field and store the
//!   returned object back into a new outer instance
//!
//! Each generated method carries an [`Accessor`] descriptor. `clazz` uses the
//! descriptors of aliases and lenses to verify, once, that their target
//! exists and exposes the forwarded method.
//!
//! # Examples
//!
//! ```
//! use clazz::{PrototypeSpec, Value, alias, fields, getter, lens, setter};
//!
//! let point = PrototypeSpec::new()
//!     .field("x", 0)
//!     .member("getX", getter("x"))
//!     .member("setX", setter("x"))
//!     .build()
//!     .unwrap();
//!
//! let circle = PrototypeSpec::new()
//!     .field("center", point.instance())
//!     .member("centerX", alias("center", "getX"))
//!     .member("setX", lens("center", "setX"))
//!     .build()
//!     .unwrap();
//!
//! let moved = circle.instance().call("setX", &[Value::from(10)]).unwrap();
//! let moved = moved.as_object().unwrap();
//!
//! assert_eq!(moved.call("centerX", &[]).unwrap(), Value::from(10));
//! ```

pub mod validators;

use std::fmt;
use std::sync::Arc;

use crate::error::{ClazzError, ValidationError};
use crate::object::{Fields, Instance, Method, assign};
use crate::value::{TypeTag, Value};

/// Signature of a setter validator: the proposed value and the receiver.
///
/// A validator may return a transformed value.
pub type ValidatorFn = dyn Fn(Value, &Instance) -> Result<Value, ValidationError> + Send + Sync;

/// Kind of a generated accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AccessorKind {
    /// Produced by [`getter`].
    Getter,
    /// Produced by [`setter`] or [`setter_with`].
    Setter,
    /// Produced by [`alias`].
    Alias,
    /// Produced by [`lens`].
    Lens,
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::Alias => "alias",
            Self::Lens => "lens",
        })
    }
}

/// Descriptor attached to generated methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Accessor {
    /// Reads `key`.
    Getter {
        /// Field read by the getter.
        key: String,
    },
    /// Writes `key`.
    Setter {
        /// Field written by the setter.
        key: String,
    },
    /// Forwards to `method` on the object stored in `key`.
    Alias {
        /// Field holding the nested object.
        key: String,
        /// Method called on the nested object.
        method: String,
    },
    /// Forwards to `method` on the object stored in `key` and stores the result.
    Lens {
        /// Field holding the nested object.
        key: String,
        /// Method called on the nested object.
        method: String,
    },
}

impl Accessor {
    /// Returns the accessor kind.
    #[must_use]
    pub const fn kind(&self) -> AccessorKind {
        match self {
            Self::Getter { .. } => AccessorKind::Getter,
            Self::Setter { .. } => AccessorKind::Setter,
            Self::Alias { .. } => AccessorKind::Alias,
            Self::Lens { .. } => AccessorKind::Lens,
        }
    }

    /// Returns the field the accessor works on.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Getter { key } | Self::Setter { key } => key,
            Self::Alias { key, .. } | Self::Lens { key, .. } => key,
        }
    }

    /// Returns `(key, method)` for aliases and lenses.
    #[must_use]
    pub fn target(&self) -> Option<(&str, &str)> {
        match self {
            Self::Alias { key, method } | Self::Lens { key, method } => Some((key, method)),
            Self::Getter { .. } | Self::Setter { .. } => None,
        }
    }
}

/// Creates a method returning the receiver's value for `key`.
///
/// # Errors
///
/// The method fails with [`ClazzError::FieldNotFound`] if neither the
/// receiver nor its prototype holds a value for `key`.
///
/// # Examples
///
/// ```
/// use clazz::{PrototypeSpec, Value, getter};
///
/// let class = PrototypeSpec::new()
///     .field("x", 7)
///     .member("getX", getter("x"))
///     .build()
///     .unwrap();
///
/// assert_eq!(class.instance().call("getX", &[]).unwrap(), Value::from(7));
/// ```
#[must_use]
pub fn getter(key: impl Into<String>) -> Method {
    let key = key.into();
    let accessor = Accessor::Getter { key: key.clone() };
    Method::with_accessor(accessor, move |this, _| {
        this.get(&key)
            .cloned()
            .ok_or_else(|| ClazzError::FieldNotFound { key: key.clone() })
    })
}

/// Creates a method returning a copy of the receiver with `key` replaced by
/// its single argument.
///
/// # Examples
///
/// ```
/// use clazz::{PrototypeSpec, Value, setter};
///
/// let class = PrototypeSpec::new()
///     .field("x", 0)
///     .member("setX", setter("x"))
///     .build()
///     .unwrap();
///
/// let original = class.instance();
/// let updated = original.call("setX", &[Value::from(2)]).unwrap();
///
/// assert_eq!(updated.as_object().unwrap().get("x"), Some(&Value::from(2)));
/// assert_eq!(original.get("x"), Some(&Value::from(0)));
/// ```
#[must_use]
pub fn setter(key: impl Into<String>) -> Method {
    setter_with(key, |value, _| Ok(value))
}

/// Like [`setter`], but runs `validate` on the value first.
///
/// The validator receives the proposed value and the receiver and returns
/// the value to store. A rejection is returned unchanged as
/// [`ClazzError::Validation`].
///
/// # Examples
///
/// ```
/// use clazz::{ClazzError, PrototypeSpec, Value, setter_with, validators};
///
/// let class = PrototypeSpec::new()
///     .field("x", 0)
///     .member("setX", setter_with("x", validators::number))
///     .build()
///     .unwrap();
///
/// let error = class.instance().call("setX", &[Value::from("a")]).unwrap_err();
/// assert!(matches!(error, ClazzError::Validation(_)));
/// ```
#[must_use]
pub fn setter_with<F>(key: impl Into<String>, validate: F) -> Method
where
    F: Fn(Value, &Instance) -> Result<Value, ValidationError> + Send + Sync + 'static,
{
    let key = key.into();
    let validate: Arc<ValidatorFn> = Arc::new(validate);
    let accessor = Accessor::Setter { key: key.clone() };
    Method::with_accessor(accessor, move |this, arguments| {
        let value = arguments.first().cloned().ok_or_else(|| {
            let expected = this.prototype().type_tag(&key).unwrap_or(TypeTag::Object);
            ClazzError::MissingValue {
                key: key.clone(),
                expected,
            }
        })?;
        let validated = validate(value, this)?;
        Ok(Value::Object(this.set(key.clone(), validated)))
    })
}

/// Creates a method that calls `method` on the object stored in `key` and
/// returns its result as is.
///
/// # Errors
///
/// Besides the errors of the forwarded method, the generated method fails
/// with [`ClazzError::TargetNotAnObject`] if `key` holds a non-object at call
/// time, or [`ClazzError::TargetMissing`] if it holds nothing.
#[must_use]
pub fn alias(key: impl Into<String>, method: impl Into<String>) -> Method {
    let key = key.into();
    let method = method.into();
    let accessor = Accessor::Alias {
        key: key.clone(),
        method: method.clone(),
    };
    Method::with_accessor(accessor, move |this, arguments| {
        nested(this, &key, &method, AccessorKind::Alias)?.call(&method, arguments)
    })
}

/// Creates a method that calls `method` on the object stored in `key` and
/// returns a copy of the receiver with `key` replaced by the result.
///
/// The forwarded method is expected to follow the copy-on-write contract
/// itself, so neither the receiver nor the nested object changes.
///
/// # Errors
///
/// Besides the errors of the forwarded method, the generated method fails
/// with [`ClazzError::TargetNotAnObject`] if `key` holds a non-object at call
/// time, or [`ClazzError::TargetMissing`] if it holds nothing.
#[must_use]
pub fn lens(key: impl Into<String>, method: impl Into<String>) -> Method {
    let key = key.into();
    let method = method.into();
    let accessor = Accessor::Lens {
        key: key.clone(),
        method: method.clone(),
    };
    Method::with_accessor(accessor, move |this, arguments| {
        let updated = nested(this, &key, &method, AccessorKind::Lens)?.call(&method, arguments)?;
        let mut target = Fields::new();
        target.insert(key.clone(), updated);
        Ok(Value::Object(assign(this, [&target])))
    })
}

fn nested<'a>(
    this: &'a Instance,
    key: &str,
    method: &str,
    kind: AccessorKind,
) -> Result<&'a Instance, ClazzError> {
    match this.get(key) {
        Some(Value::Object(instance)) => Ok(instance),
        Some(other) => Err(ClazzError::TargetNotAnObject {
            key: key.to_string(),
            method: method.to_string(),
            kind,
            found: other.type_tag(),
        }),
        None => Err(ClazzError::TargetMissing {
            key: key.to_string(),
            method: method.to_string(),
            kind,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, PrototypeSpec, fields};
    use rstest::{fixture, rstest};

    #[fixture]
    fn point() -> Class {
        PrototypeSpec::new()
            .named("Point")
            .field("x", 0)
            .field("y", 0)
            .member("getX", getter("x"))
            .member("setX", setter("x"))
            .member("setY", setter_with("y", validators::number))
            .method("toString", |this, _| {
                Ok(Value::from(format!(
                    "({}, {})",
                    this.get("x").cloned().unwrap_or(Value::from(0)),
                    this.get("y").cloned().unwrap_or(Value::from(0)),
                )))
            })
            .build()
            .unwrap()
    }

    #[rstest]
    #[case(getter("x"), AccessorKind::Getter, None)]
    #[case(setter("x"), AccessorKind::Setter, None)]
    #[case(alias("x", "m"), AccessorKind::Alias, Some(("x", "m")))]
    #[case(lens("x", "m"), AccessorKind::Lens, Some(("x", "m")))]
    fn test_descriptor(
        #[case] method: Method,
        #[case] kind: AccessorKind,
        #[case] target: Option<(&str, &str)>,
    ) {
        let accessor = method.accessor().unwrap();

        assert_eq!(accessor.kind(), kind);
        assert_eq!(accessor.key(), "x");
        assert_eq!(accessor.target(), target);
    }

    #[rstest]
    fn test_getter_missing_field() {
        let error = getter("z")
            .call(&Instance::plain(fields! {}), &[])
            .unwrap_err();

        assert_eq!(error, ClazzError::FieldNotFound { key: "z".to_string() });
    }

    #[rstest]
    fn test_setter_requires_argument(point: Class) {
        let error = point.instance().call("setX", &[]).unwrap_err();

        assert_eq!(
            error,
            ClazzError::MissingValue {
                key: "x".to_string(),
                expected: TypeTag::Number,
            }
        );
        assert!(error.to_string().contains("\"x\""));
    }

    #[rstest]
    fn test_setter_validation_error_is_unchanged(point: Class) {
        let instance = point.create(fields! { y: 1 }).unwrap();

        let error = instance.call("setY", &[Value::from("a")]).unwrap_err();

        assert_eq!(
            error,
            ClazzError::Validation(ValidationError::expected_type(
                TypeTag::Number,
                TypeTag::String
            ))
        );
        assert_eq!(instance.get("y"), Some(&Value::from(1)));
    }

    #[rstest]
    fn test_setter_stores_transformed_value() {
        let clamp = setter_with("x", |value, _| {
            let number = value.as_number().unwrap_or(0.0);
            Ok(Value::from(number.clamp(0.0, 10.0)))
        });
        let receiver = Instance::plain(fields! { x: 1 });

        let result = clamp.call(&receiver, &[Value::from(42)]).unwrap();

        assert_eq!(result.as_object().unwrap().get("x"), Some(&Value::from(10)));
    }

    #[rstest]
    fn test_validator_sees_receiver() {
        let increasing = setter_with("x", |value, this| {
            let current = this.get("x").and_then(Value::as_number).unwrap_or(0.0);
            match value.as_number() {
                Some(next) if next > current => Ok(value),
                _ => Err(ValidationError::new("x must increase")),
            }
        });
        let receiver = Instance::plain(fields! { x: 5 });

        assert!(increasing.call(&receiver, &[Value::from(6)]).is_ok());
        assert!(increasing.call(&receiver, &[Value::from(4)]).is_err());
    }

    #[rstest]
    fn test_alias_returns_result_verbatim(point: Class) {
        let holder = Instance::plain(fields! { center: point.create(fields! { x: 3 }).unwrap() });

        let result = alias("center", "toString").call(&holder, &[]).unwrap();

        assert_eq!(result, Value::from("(3, 0)"));
    }

    #[rstest]
    fn test_lens_lifts_nested_update(point: Class) {
        let center = point.instance();
        let holder = Instance::plain(fields! { center: center.clone(), radius: 1 });

        let result = lens("center", "setX")
            .call(&holder, &[Value::from(10)])
            .unwrap();
        let result = result.as_object().unwrap();
        let new_center = result.get("center").and_then(Value::as_object).unwrap();

        assert_eq!(new_center.get("x"), Some(&Value::from(10)));
        assert!(new_center.shares_prototype(&center));
        assert_eq!(center.get("x"), Some(&Value::from(0)));
        assert_eq!(result.get("radius"), Some(&Value::from(1)));
        assert!(result.shares_prototype(&holder));
    }

    #[rstest]
    fn test_alias_on_overridden_non_object(point: Class) {
        let holder = Instance::plain(fields! { center: point.instance() }).set("center", 1);

        let error = alias("center", "toString").call(&holder, &[]).unwrap_err();

        assert_eq!(
            error,
            ClazzError::TargetNotAnObject {
                key: "center".to_string(),
                method: "toString".to_string(),
                kind: AccessorKind::Alias,
                found: TypeTag::Number,
            }
        );
    }

    #[rstest]
    #[case(alias("center", "getX"))]
    #[case(lens("center", "setX"))]
    fn test_overridden_target_is_not_a_definition_error(point: Class, #[case] method: Method) {
        let holder = Instance::plain(fields! { center: point.instance() }).set("center", "gone");

        let error = method.call(&holder, &[Value::from(1)]).unwrap_err();

        assert!(!error.is_definition_error());
        assert!(matches!(error, ClazzError::TargetNotAnObject { found: TypeTag::String, .. }));
    }

    #[rstest]
    fn test_lens_on_missing_field() {
        let error = lens("center", "setX")
            .call(&Instance::plain(fields! {}), &[])
            .unwrap_err();

        assert!(matches!(error, ClazzError::TargetMissing { kind: AccessorKind::Lens, .. }));
        assert!(!error.is_definition_error());
    }

    #[rstest]
    fn test_kind_display() {
        assert_eq!(AccessorKind::Alias.to_string(), "alias");
        assert_eq!(AccessorKind::Lens.to_string(), "lens");
    }
}
