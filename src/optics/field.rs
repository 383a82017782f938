//! Optics focusing on instance fields.

use super::Optional;
use crate::object::Instance;
use crate::value::Value;

/// Focuses on one field of an [`Instance`].
///
/// Reading resolves through prototype defaults. Setting always succeeds and
/// returns a new instance sharing the source's prototype.
///
/// # Examples
///
/// ```
/// use clazz::optics::{FieldOptic, Optional};
/// use clazz::{Instance, Value, fields};
///
/// let x = FieldOptic::new("x");
/// let point = Instance::plain(fields! { x: 1 });
///
/// assert_eq!(x.get_option(&point), Some(&Value::from(1)));
/// let moved = x.set(point.clone(), Value::from(5));
/// assert_eq!(moved.get("x"), Some(&Value::from(5)));
/// assert_eq!(point.get("x"), Some(&Value::from(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldOptic {
    key: String,
}

impl FieldOptic {
    /// Creates an optic for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the focused key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Composes this optic with one focusing inside the object stored in
    /// this field.
    #[must_use]
    pub const fn compose<O>(self, inner: O) -> ComposedOptic<Self, O>
    where
        O: Optional<Instance, Value>,
    {
        ComposedOptic::new(self, inner)
    }
}

impl Optional<Instance, Value> for FieldOptic {
    fn get_option<'a>(&self, source: &'a Instance) -> Option<&'a Value> {
        source.get(&self.key)
    }

    fn set(&self, source: Instance, value: Value) -> Instance {
        source.set(self.key.clone(), value)
    }
}

/// Two field optics chained through a nested object.
///
/// Setting through an intermediate value that is missing or not an object
/// returns the source unchanged.
///
/// # Examples
///
/// ```
/// use clazz::optics::{FieldOptic, Optional};
/// use clazz::{Instance, Value, fields};
///
/// let center_x = FieldOptic::new("center").compose(FieldOptic::new("x"));
/// let circle = Instance::plain(fields! {
///     center: Instance::plain(fields! { x: 1, y: 2 }),
/// });
///
/// let moved = center_x.set(circle.clone(), Value::from(10));
/// assert_eq!(center_x.get_option(&moved), Some(&Value::from(10)));
/// assert_eq!(center_x.get_option(&circle), Some(&Value::from(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedOptic<O1, O2> {
    outer: O1,
    inner: O2,
}

impl<O1, O2> ComposedOptic<O1, O2> {
    /// Creates a composed optic.
    #[must_use]
    pub const fn new(outer: O1, inner: O2) -> Self {
        Self { outer, inner }
    }

    /// Composes further into the object focused by this optic.
    #[must_use]
    pub const fn compose<O3>(self, inner: O3) -> ComposedOptic<Self, O3> {
        ComposedOptic::new(self, inner)
    }
}

impl<O1, O2> Optional<Instance, Value> for ComposedOptic<O1, O2>
where
    O1: Optional<Instance, Value>,
    O2: Optional<Instance, Value>,
{
    fn get_option<'a>(&self, source: &'a Instance) -> Option<&'a Value> {
        let nested = self.outer.get_option(source)?.as_object()?;
        self.inner.get_option(nested)
    }

    fn set(&self, source: Instance, value: Value) -> Instance {
        let Some(nested) = self.outer.get_option(&source).and_then(Value::as_object) else {
            return source;
        };
        let updated = self.inner.set(nested.clone(), value);
        self.outer.set(source, Value::Object(updated))
    }
}

/// Focuses on a field reached by following `keys` through nested objects.
///
/// # Examples
///
/// ```
/// use clazz::optics::{Optional, path};
/// use clazz::{Instance, Value, fields};
///
/// let scene = Instance::plain(fields! {
///     circle: Instance::plain(fields! {
///         center: Instance::plain(fields! { x: 1 }),
///     }),
/// });
/// let optic = path(["circle", "center", "x"]);
///
/// assert_eq!(optic.get_option(&scene), Some(&Value::from(1)));
/// let moved = optic.set(scene, Value::from(2));
/// assert_eq!(optic.get_option(&moved), Some(&Value::from(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathOptic {
    keys: Vec<String>,
}

/// Creates a [`PathOptic`] for the given key path.
#[must_use]
pub fn path<I, K>(keys: I) -> PathOptic
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    PathOptic {
        keys: keys.into_iter().map(Into::into).collect(),
    }
}

impl PathOptic {
    /// Returns the keys of the path.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Optional<Instance, Value> for PathOptic {
    fn get_option<'a>(&self, source: &'a Instance) -> Option<&'a Value> {
        let (last, init) = self.keys.split_last()?;
        let mut current = source;
        for key in init {
            current = current.get(key)?.as_object()?;
        }
        current.get(last)
    }

    fn set(&self, source: Instance, value: Value) -> Instance {
        set_path(&source, &self.keys, value).unwrap_or(source)
    }
}

fn set_path(source: &Instance, keys: &[String], value: Value) -> Option<Instance> {
    match keys {
        [] => None,
        [last] => Some(source.set(last.clone(), value)),
        [head, tail @ ..] => {
            let nested = source.get(head)?.as_object()?;
            let updated = set_path(nested, tail, value)?;
            Some(source.set(head.clone(), updated))
        }
    }
}
