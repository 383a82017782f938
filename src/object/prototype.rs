//! Prototype definition, processing and validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use super::class::{Class, ClassOptions, ConstructorFn, clazz};
use super::{Fields, Instance, Method};
use crate::error::ClazzError;
use crate::value::{TypeTag, Value};

const ASSIGN: &str = "assign";
const SET: &str = "set";
const REMOVE: &str = "remove";

/// An entry of a prototype: a default field value or a method.
#[derive(Clone, Debug)]
pub enum Member {
    /// Default value seen by instances that do not own the field.
    Default(Value),
    /// Method shared by all instances.
    Method(Method),
}

impl Member {
    /// Returns the type category of the member.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Default(value) => value.type_tag(),
            Self::Method(_) => TypeTag::Function,
        }
    }
}

/// Description of a class, consumed by [`clazz`].
///
/// # Examples
///
/// ```
/// use clazz::{PrototypeSpec, Value, fields};
///
/// let point = PrototypeSpec::new()
///     .named("Point")
///     .field("x", 0)
///     .field("y", 0)
///     .method("toString", |this, _| {
///         Ok(Value::from(format!(
///             "({}, {})",
///             this.get("x").unwrap(),
///             this.get("y").unwrap()
///         )))
///     })
///     .build()
///     .unwrap();
///
/// let instance = point.create(fields! { x: 1, y: 2 }).unwrap();
/// assert_eq!(instance.to_string(), "(1, 2)");
/// ```
#[derive(Clone, Default)]
pub struct PrototypeSpec {
    pub(crate) name: Option<String>,
    pub(crate) members: BTreeMap<String, Member>,
    pub(crate) constructor: Option<Arc<ConstructorFn>>,
    pub(crate) options: ClassOptions,
}

impl PrototypeSpec {
    /// Creates an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the class. The name shows up in `Debug` output, structural
    /// `Display` output and log events.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declares a field with its default value.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, default: impl Into<Value>) -> Self {
        self.members
            .insert(key.into(), Member::Default(default.into()));
        self
    }

    /// Declares a hand-written method.
    #[must_use]
    pub fn method<F>(self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Result<Value, ClazzError> + Send + Sync + 'static,
    {
        self.member(name, Method::new(body))
    }

    /// Declares a method, typically one produced by an accessor helper.
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, method: Method) -> Self {
        self.members.insert(name.into(), Member::Method(method));
        self
    }

    /// Sets the constructor that turns positional arguments into own fields.
    #[must_use]
    pub fn constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Fields, ClazzError> + Send + Sync + 'static,
    {
        self.constructor = Some(Arc::new(constructor));
        self
    }

    /// Replaces the construction options.
    #[must_use]
    pub const fn options(mut self, options: ClassOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the class. Shorthand for [`clazz`].
    ///
    /// # Errors
    ///
    /// Returns a definition error when an alias or lens member does not
    /// resolve; see [`clazz`].
    pub fn build(self) -> Result<Class, ClazzError> {
        clazz(self)
    }
}

impl fmt::Debug for PrototypeSpec {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PrototypeSpec")
            .field("name", &self.name)
            .field("members", &self.members.keys().collect::<Vec<_>>())
            .field("constructor", &self.constructor.is_some())
            .field("options", &self.options)
            .finish()
    }
}

/// The shared member table of a class.
///
/// Every instance created through the same [`Class`] holds the same
/// `Arc<Prototype>`. A prototype is immutable once built.
pub struct Prototype {
    name: Option<String>,
    members: BTreeMap<String, Member>,
    tags: BTreeMap<String, TypeTag>,
}

static PLAIN: LazyLock<Arc<Prototype>> =
    LazyLock::new(|| Arc::new(Prototype::process(None, BTreeMap::new())));

impl Prototype {
    /// Adds the convenience methods and computes the type descriptors.
    pub(crate) fn process(name: Option<String>, mut members: BTreeMap<String, Member>) -> Self {
        for (method_name, method) in [
            (ASSIGN, Method::new(assign_method)),
            (SET, Method::new(set_method)),
            (REMOVE, Method::new(remove_method)),
        ] {
            members
                .entry(method_name.to_string())
                .or_insert(Member::Method(method));
        }

        let tags = members
            .iter()
            .map(|(key, member)| (key.clone(), member.type_tag()))
            .collect();

        Self {
            name,
            members,
            tags,
        }
    }

    /// The prototype of plain field mappings: no fields, only the injected methods.
    pub(crate) fn plain() -> Arc<Self> {
        Arc::clone(&PLAIN)
    }

    /// Checks that every alias and lens refers to a nested object that
    /// exposes the requested method.
    pub(crate) fn validate(&self) -> Result<(), ClazzError> {
        for (member_name, member) in &self.members {
            let Member::Method(method) = member else {
                continue;
            };
            let Some(accessor) = method.accessor() else {
                continue;
            };
            let Some((key, target_method)) = accessor.target() else {
                continue;
            };
            let kind = accessor.kind();

            let nested = match self.members.get(key) {
                None => {
                    return Err(ClazzError::MissingDefault {
                        member: member_name.clone(),
                        key: key.to_string(),
                        kind,
                    });
                }
                Some(Member::Default(Value::Object(nested))) => nested,
                Some(other) => {
                    return Err(ClazzError::NotAnObject {
                        member: member_name.clone(),
                        key: key.to_string(),
                        kind,
                        found: other.type_tag(),
                    });
                }
            };

            if !nested.prototype().has_method(target_method) {
                return Err(ClazzError::MissingMethod {
                    member: member_name.clone(),
                    key: key.to_string(),
                    method: target_method.to_string(),
                    kind,
                });
            }
        }
        Ok(())
    }

    /// Returns the class name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Looks up a member by key.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<&Member> {
        self.members.get(key)
    }

    /// Returns the default value declared for `key`.
    #[must_use]
    pub fn default_value(&self, key: &str) -> Option<&Value> {
        match self.members.get(key)? {
            Member::Default(value) => Some(value),
            Member::Method(_) => None,
        }
    }

    /// Returns the method declared under `name`.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        match self.members.get(name)? {
            Member::Method(method) => Some(method),
            Member::Default(_) => None,
        }
    }

    /// Returns `true` if a method named `name` exists.
    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// Returns the type descriptor of `key`, computed when the prototype was built.
    #[must_use]
    pub fn type_tag(&self, key: &str) -> Option<TypeTag> {
        self.tags.get(key).copied()
    }

    /// Iterates over the default field values in key order.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().filter_map(|(key, member)| match member {
            Member::Default(value) => Some((key.as_str(), value)),
            Member::Method(_) => None,
        })
    }

    /// Number of members, injected methods included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the prototype has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Prototype")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish()
    }
}

fn assign_method(this: &Instance, arguments: &[Value]) -> Result<Value, ClazzError> {
    let targets = arguments
        .iter()
        .enumerate()
        .map(|(index, argument)| {
            argument.as_object().map(Instance::own_fields).ok_or_else(|| {
                ClazzError::invalid_argument(ASSIGN, index, TypeTag::Object, Some(argument.type_tag()))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Object(this.assign(targets)))
}

fn set_method(this: &Instance, arguments: &[Value]) -> Result<Value, ClazzError> {
    let key = match arguments.first() {
        Some(Value::String(key)) => key,
        other => {
            return Err(ClazzError::invalid_argument(
                SET,
                0,
                TypeTag::String,
                other.map(Value::type_tag),
            ));
        }
    };
    let value = arguments.get(1).ok_or_else(|| {
        let expected = this.prototype().type_tag(key).unwrap_or(TypeTag::Object);
        ClazzError::invalid_argument(SET, 1, expected, None)
    })?;
    Ok(Value::Object(this.set(key.clone(), value.clone())))
}

fn remove_method(this: &Instance, arguments: &[Value]) -> Result<Value, ClazzError> {
    let keys = arguments
        .iter()
        .enumerate()
        .map(|(index, argument)| {
            argument.as_str().ok_or_else(|| {
                ClazzError::invalid_argument(REMOVE, index, TypeTag::String, Some(argument.type_tag()))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Object(this.remove(keys)))
}
