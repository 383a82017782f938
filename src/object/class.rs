//! Class construction: building prototypes and creating instances.

use std::fmt;
use std::sync::Arc;

use super::{Fields, Instance, Prototype, PrototypeSpec};
use crate::error::ClazzError;
use crate::value::{TypeTag, Value};

/// Signature of a user-supplied constructor.
pub type ConstructorFn = dyn Fn(&[Value]) -> Result<Fields, ClazzError> + Send + Sync;

const ANONYMOUS: &str = "<anonymous>";

/// Options controlling how a [`Class`] checks constructor arguments.
///
/// # Examples
///
/// ```
/// use clazz::ClassOptions;
///
/// let options = ClassOptions::default();
/// assert!(options.type_check);
/// assert!(!options.reject_unknown_fields);
///
/// let lenient = ClassOptions::unchecked();
/// assert!(!lenient.type_check);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassOptions {
    /// Compare the type of each plain-mapping argument with the prototype member.
    pub type_check: bool,
    /// Fail on plain-mapping keys the prototype does not declare.
    pub reject_unknown_fields: bool,
}

impl ClassOptions {
    /// Options with every check disabled.
    #[must_use]
    pub const fn unchecked() -> Self {
        Self {
            type_check: false,
            reject_unknown_fields: false,
        }
    }

    /// Options with every check enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            type_check: true,
            reject_unknown_fields: true,
        }
    }
}

impl Default for ClassOptions {
    fn default() -> Self {
        Self {
            type_check: true,
            reject_unknown_fields: false,
        }
    }
}

/// Builds a class from its prototype spec.
///
/// The prototype members are completed with the convenience methods `assign`,
/// `set` and `remove` (unless members with those names are declared),
/// then every alias and lens member is checked against the prototype: the
/// key it refers to must hold a default object whose prototype defines the
/// target method.
///
/// # Errors
///
/// - [`ClazzError::MissingDefault`] if an alias or lens key has no default value.
/// - [`ClazzError::NotAnObject`] if that default is not an object.
/// - [`ClazzError::MissingMethod`] if the nested object lacks the method.
///
/// # Examples
///
/// ```
/// use clazz::{ClazzError, PrototypeSpec, clazz, lens, setter};
///
/// let point = clazz(PrototypeSpec::new().field("x", 0).member("setX", setter("x"))).unwrap();
///
/// let circle = clazz(
///     PrototypeSpec::new()
///         .field("center", point.instance())
///         .member("setX", lens("center", "setX")),
/// );
/// assert!(circle.is_ok());
///
/// let broken = clazz(
///     PrototypeSpec::new()
///         .field("center", point.instance())
///         .member("grow", lens("center", "grow")),
/// );
/// assert!(matches!(broken, Err(ClazzError::MissingMethod { .. })));
/// ```
pub fn clazz(spec: PrototypeSpec) -> Result<Class, ClazzError> {
    let PrototypeSpec {
        name,
        members,
        constructor,
        options,
    } = spec;

    let prototype = Prototype::process(name, members);
    let class_name = prototype.name().unwrap_or(ANONYMOUS);

    if let Err(error) = prototype.validate() {
        tracing::debug!(class = class_name, %error, "prototype rejected");
        return Err(error);
    }

    tracing::debug!(
        class = class_name,
        members = prototype.len(),
        constructor = constructor.is_some(),
        "prototype built"
    );

    Ok(Class {
        prototype: Arc::new(prototype),
        constructor,
        options,
    })
}

/// Instance factory returned by [`clazz`].
///
/// Cloning a `Class` is cheap; clones create instances sharing the same
/// prototype.
#[derive(Clone)]
pub struct Class {
    prototype: Arc<Prototype>,
    constructor: Option<Arc<ConstructorFn>>,
    options: ClassOptions,
}

impl Class {
    /// Creates an instance from positional arguments.
    ///
    /// With a constructor, the arguments are handed to it and the mapping it
    /// returns becomes the instance's own fields. Without one, no argument
    /// yields an instance with no own fields, and a single object argument
    /// contributes its own fields after the type check.
    ///
    /// # Errors
    ///
    /// - Whatever the constructor returns.
    /// - [`ClazzError::InvalidArgument`] without a constructor, when the
    ///   arguments are not empty or a single object.
    /// - The errors of [`Class::create`].
    ///
    /// # Examples
    ///
    /// ```
    /// use clazz::{PrototypeSpec, Value, fields};
    ///
    /// let point = PrototypeSpec::new()
    ///     .constructor(|arguments| {
    ///         Ok(fields! {
    ///             x: arguments.first().cloned().unwrap_or(Value::from(0)),
    ///             y: arguments.get(1).cloned().unwrap_or(Value::from(0)),
    ///         })
    ///     })
    ///     .build()
    ///     .unwrap();
    ///
    /// let instance = point.construct(&[Value::from(1), Value::from(2)]).unwrap();
    /// assert_eq!(instance.get("y"), Some(&Value::from(2)));
    /// ```
    pub fn construct(&self, arguments: &[Value]) -> Result<Instance, ClazzError> {
        if let Some(constructor) = &self.constructor {
            let fields = constructor(arguments)?;
            tracing::trace!(class = self.name(), fields = fields.len(), "constructed");
            return Ok(self.instantiate(fields));
        }

        match arguments {
            [] => Ok(self.instance()),
            [Value::Object(argument)] => self.create(argument.own_fields().clone()),
            [other] => Err(ClazzError::invalid_argument(
                "constructor",
                0,
                TypeTag::Object,
                Some(other.type_tag()),
            )),
            [_, extra, ..] => Err(ClazzError::invalid_argument(
                "constructor",
                1,
                TypeTag::Object,
                Some(extra.type_tag()),
            )),
        }
    }

    /// Creates an instance owning `fields`, after checking them against the
    /// prototype as configured by [`ClassOptions`].
    ///
    /// # Errors
    ///
    /// - [`ClazzError::TypeMismatch`] if a field's type differs from the
    ///   prototype member of the same name.
    /// - [`ClazzError::UnknownField`] if unknown fields are rejected and the
    ///   prototype does not declare a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use clazz::{ClazzError, PrototypeSpec, fields};
    ///
    /// let point = PrototypeSpec::new().field("x", 0).build().unwrap();
    ///
    /// assert!(point.create(fields! { x: 1 }).is_ok());
    /// assert!(matches!(
    ///     point.create(fields! { x: "1" }),
    ///     Err(ClazzError::TypeMismatch { .. })
    /// ));
    /// ```
    pub fn create(&self, fields: Fields) -> Result<Instance, ClazzError> {
        self.check_fields(&fields)?;
        tracing::trace!(class = self.name(), fields = fields.len(), "created");
        Ok(self.instantiate(fields))
    }

    /// Creates an instance with no own fields; every field reads through to
    /// the prototype defaults.
    #[must_use]
    pub fn instance(&self) -> Instance {
        self.instantiate(Fields::new())
    }

    /// Returns the shared prototype.
    #[must_use]
    pub const fn prototype(&self) -> &Arc<Prototype> {
        &self.prototype
    }

    /// Returns the construction options.
    #[must_use]
    pub const fn options(&self) -> ClassOptions {
        self.options
    }

    /// Returns the class name, or `"<anonymous>"`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.prototype.name().unwrap_or(ANONYMOUS)
    }

    fn instantiate(&self, fields: Fields) -> Instance {
        Instance::from_parts(Arc::clone(&self.prototype), fields)
    }

    fn check_fields(&self, fields: &Fields) -> Result<(), ClazzError> {
        for (key, value) in fields {
            match self.prototype.type_tag(key) {
                Some(expected) if self.options.type_check && expected != value.type_tag() => {
                    return Err(ClazzError::TypeMismatch {
                        key: key.clone(),
                        provided: value.type_tag(),
                        expected,
                    });
                }
                None if self.options.reject_unknown_fields => {
                    return Err(ClazzError::UnknownField { key: key.clone() });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Class")
            .field("prototype", &self.prototype)
            .field("constructor", &self.constructor.is_some())
            .field("options", &self.options)
            .finish()
    }
}
