//! Copy-on-write operations on instances.

use std::sync::Arc;

use super::{Fields, Instance};

/// Returns a new instance whose own fields are `source`'s own fields
/// overridden by each target, left to right.
///
/// The result delegates to the same prototype as `source`. Neither `source`
/// nor the targets are touched. Nested objects are replaced as a whole,
/// never merged.
///
/// # Examples
///
/// ```
/// use clazz::{Instance, Value, assign, fields};
///
/// let source = Instance::plain(fields! { a: 0, b: 0 });
/// let result = assign(&source, [&fields! { a: 1 }, &fields! { a: 2, c: 3 }]);
///
/// assert_eq!(result.own_fields(), &fields! { a: 2, b: 0, c: 3 });
/// assert_eq!(source.own_fields(), &fields! { a: 0, b: 0 });
/// assert!(result.shares_prototype(&source));
/// ```
#[must_use]
pub fn assign<'a, I>(source: &Instance, targets: I) -> Instance
where
    I: IntoIterator<Item = &'a Fields>,
{
    let mut fields = source.own_fields().clone();
    for target in targets {
        fields.extend(
            target
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
    Instance::from_parts(Arc::clone(source.prototype()), fields)
}

/// Same as [`assign`].
#[must_use]
pub fn modify<'a, I>(source: &Instance, targets: I) -> Instance
where
    I: IntoIterator<Item = &'a Fields>,
{
    assign(source, targets)
}

/// Returns a new instance without the named own fields.
///
/// Keys the instance does not own are ignored. Prototype defaults are not
/// affected, so a removed field reads its default again.
///
/// # Examples
///
/// ```
/// use clazz::{PrototypeSpec, Value, fields, remove};
///
/// let class = PrototypeSpec::new().field("x", 0).build().unwrap();
/// let instance = class.create(fields! { x: 5, label: "p" }).unwrap();
///
/// let trimmed = remove(&instance, ["x", "label", "missing"]);
///
/// assert_eq!(trimmed.get("x"), Some(&Value::from(0)));
/// assert_eq!(trimmed.get("label"), None);
/// assert_eq!(instance.get("x"), Some(&Value::from(5)));
/// ```
#[must_use]
pub fn remove<I, K>(source: &Instance, keys: I) -> Instance
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut fields = source.own_fields().clone();
    for key in keys {
        fields.remove(key.as_ref());
    }
    Instance::from_parts(Arc::clone(source.prototype()), fields)
}
