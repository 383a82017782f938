//! Immutable instances delegating to a shared prototype.

use std::fmt;
use std::sync::Arc;

use super::{Fields, Prototype, ops};
use crate::error::ClazzError;
use crate::value::Value;

const TO_STRING: &str = "toString";

/// A value object: a shared prototype plus the fields it owns.
///
/// Reads resolve own fields first and fall back to prototype defaults.
/// There is no way to change an instance in place; [`Instance::assign`],
/// [`Instance::set`] and [`Instance::remove`] return new instances sharing
/// the same prototype.
///
/// Cloning is cheap: the clone shares both the prototype and the field
/// storage with the original.
///
/// # Examples
///
/// ```
/// use clazz::{Instance, Value, fields};
///
/// let original = Instance::plain(fields! { a: 1 });
/// let updated = original.set("a", 2);
///
/// assert_eq!(original.get("a"), Some(&Value::from(1)));
/// assert_eq!(updated.get("a"), Some(&Value::from(2)));
/// assert!(updated.shares_prototype(&original));
/// assert!(!updated.ptr_eq(&original));
/// ```
#[derive(Clone)]
pub struct Instance {
    prototype: Arc<Prototype>,
    fields: Arc<Fields>,
}

impl Instance {
    pub(crate) fn from_parts(prototype: Arc<Prototype>, fields: Fields) -> Self {
        Self {
            prototype,
            fields: Arc::new(fields),
        }
    }

    /// Creates a plain object: the given fields over a prototype that has
    /// no defaults and only the `assign`, `set` and `remove` methods.
    ///
    /// Plain objects are what the injected `assign` method and class
    /// constructors without a user constructor accept as arguments.
    #[must_use]
    pub fn plain(fields: Fields) -> Self {
        Self::from_parts(Prototype::plain(), fields)
    }

    /// Returns the value of `key`, from the own fields or else from the
    /// prototype defaults.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .get(key)
            .or_else(|| self.prototype.default_value(key))
    }

    /// Returns `true` if the instance owns a field named `key`.
    #[must_use]
    pub fn has_own(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the fields the instance owns.
    #[must_use]
    pub fn own_fields(&self) -> &Fields {
        &self.fields
    }

    /// Returns the prototype defaults overlaid with the own fields.
    #[must_use]
    pub fn resolved_fields(&self) -> Fields {
        let mut resolved: Fields = self
            .prototype
            .defaults()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        resolved.extend(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        resolved
    }

    /// Returns the shared prototype.
    #[must_use]
    pub const fn prototype(&self) -> &Arc<Prototype> {
        &self.prototype
    }

    /// Returns `true` if both instances delegate to the very same prototype.
    #[must_use]
    pub fn shares_prototype(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.prototype, &other.prototype)
    }

    /// Returns `true` if both handles refer to the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.shares_prototype(other) && Arc::ptr_eq(&self.fields, &other.fields)
    }

    /// Calls the prototype method `name` with this instance as receiver.
    ///
    /// # Errors
    ///
    /// - [`ClazzError::MethodNotFound`] if the prototype has no such method.
    /// - Whatever the method returns.
    pub fn call(&self, name: &str, arguments: &[Value]) -> Result<Value, ClazzError> {
        let method = self
            .prototype
            .method(name)
            .ok_or_else(|| ClazzError::MethodNotFound {
                method: name.to_string(),
            })?;
        method.call(self, arguments)
    }

    /// Returns a new instance with the targets' fields laid over this one's,
    /// left to right. See [`assign`](crate::assign).
    #[must_use]
    pub fn assign<'a, I>(&self, targets: I) -> Self
    where
        I: IntoIterator<Item = &'a Fields>,
    {
        ops::assign(self, targets)
    }

    /// Returns a new instance with a single field replaced or added.
    #[must_use]
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut target = Fields::new();
        target.insert(key.into(), value.into());
        ops::assign(self, [&target])
    }

    /// Returns a new instance without the named own fields.
    /// See [`remove`](crate::remove).
    #[must_use]
    pub fn remove<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        ops::remove(self, keys)
    }

    fn write_structure(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.prototype.name() {
            write!(formatter, "{name} ")?;
        }
        formatter.write_str("{")?;
        for (index, (key, value)) in self.resolved_fields().iter().enumerate() {
            let separator = if index == 0 { " " } else { ", " };
            write!(formatter, "{separator}{key}: {value}")?;
        }
        formatter.write_str(" }")
    }
}

impl fmt::Display for Instance {
    /// Uses the `toString` method when it exists and returns a string,
    /// otherwise renders the resolved fields.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prototype.has_method(TO_STRING)
            && let Ok(Value::String(rendered)) = self.call(TO_STRING, &[])
        {
            return formatter.write_str(&rendered);
        }
        self.write_structure(formatter)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Instance")
            .field("class", &self.prototype.name())
            .field("fields", &self.fields)
            .finish()
    }
}

impl PartialEq for Instance {
    /// Two instances are equal when they share a prototype and own equal fields.
    fn eq(&self, other: &Self) -> bool {
        self.shares_prototype(other) && self.fields == other.fields
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Instance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let resolved = self.resolved_fields();
        let mut map = serializer.serialize_map(Some(resolved.len()))?;
        for (key, value) in &resolved {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrototypeSpec, fields};
    use rstest::rstest;

    #[rstest]
    fn test_get_prefers_own_fields() {
        let class = PrototypeSpec::new().field("x", 0).field("y", 0).build().unwrap();
        let instance = class.create(fields! { x: 4 }).unwrap();

        assert_eq!(instance.get("x"), Some(&Value::from(4)));
        assert_eq!(instance.get("y"), Some(&Value::from(0)));
        assert_eq!(instance.get("z"), None);
        assert!(instance.has_own("x"));
        assert!(!instance.has_own("y"));
    }

    #[rstest]
    fn test_get_does_not_return_methods() {
        let instance = Instance::plain(fields! {});

        assert_eq!(instance.get("assign"), None);
    }

    #[rstest]
    fn test_resolved_fields_overlay_defaults() {
        let class = PrototypeSpec::new().field("x", 0).field("y", 0).build().unwrap();
        let instance = class.create(fields! { y: 9, z: 1 }).unwrap();

        assert_eq!(instance.resolved_fields(), fields! { x: 0, y: 9, z: 1 });
    }

    #[rstest]
    fn test_call_unknown_method() {
        let error = Instance::plain(fields! {}).call("grow", &[]).unwrap_err();

        assert_eq!(
            error,
            ClazzError::MethodNotFound {
                method: "grow".to_string()
            }
        );
    }

    #[rstest]
    fn test_display_structural() {
        let class = PrototypeSpec::new()
            .named("Point")
            .field("x", 0)
            .field("y", 0)
            .build()
            .unwrap();
        let instance = class.create(fields! { x: 1 }).unwrap();

        assert_eq!(instance.to_string(), "Point { x: 1, y: 0 }");
        assert_eq!(Instance::plain(fields! { a: true }).to_string(), "{ a: true }");
    }

    #[rstest]
    fn test_display_falls_back_when_to_string_is_not_a_string() {
        let class = PrototypeSpec::new()
            .field("x", 0)
            .method("toString", |_, _| Ok(Value::from(1)))
            .build()
            .unwrap();

        assert_eq!(class.instance().to_string(), "{ x: 0 }");
    }

    #[rstest]
    fn test_equality_requires_same_prototype() {
        let first = PrototypeSpec::new().field("x", 0).build().unwrap();
        let second = PrototypeSpec::new().field("x", 0).build().unwrap();

        assert_eq!(first.instance(), first.instance());
        assert_ne!(first.instance(), second.instance());
    }

    #[rstest]
    fn test_clone_is_same_instance() {
        let instance = Instance::plain(fields! { a: 1 });
        let clone = instance.clone();

        assert!(clone.ptr_eq(&instance));
    }
}
