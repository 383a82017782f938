//! Prototype-sharing immutable objects.
//!
//! A [`Class`] is built from a [`PrototypeSpec`] by [`clazz`]. A `PrototypeSpec` lists
//! default field values and methods; `clazz` turns it into a shared
//! [`Prototype`], validates it, and returns the factory that creates
//! [`Instance`]s. Each instance owns only its data fields and delegates
//! everything else to the prototype it shares with its siblings.
//!
//! Instances are never mutated. [`assign`], [`remove`] and the generated
//! setters and lenses return new instances sharing the same prototype.
//!
//! # Examples
//!
//! ```
//! use clazz::{PrototypeSpec, Value, fields, getter, setter};
//!
//! let point = PrototypeSpec::new()
//!     .named("Point")
//!     .field("x", 0)
//!     .field("y", 0)
//!     .member("getX", getter("x"))
//!     .member("setX", setter("x"))
//!     .build()
//!     .unwrap();
//!
//! let origin = point.instance();
//! let moved = origin.call("setX", &[Value::from(3)]).unwrap();
//!
//! assert_eq!(moved.as_object().unwrap().get("x"), Some(&Value::from(3)));
//! assert_eq!(origin.get("x"), Some(&Value::from(0)));
//! ```

mod class;
mod instance;
mod method;
mod ops;
mod prototype;

use std::collections::BTreeMap;

use crate::value::Value;

pub use class::Class;
pub use class::ClassOptions;
pub use class::ConstructorFn;
pub use class::clazz;
pub use instance::Instance;
pub use method::Method;
pub use method::MethodBody;
pub use ops::assign;
pub use ops::modify;
pub use ops::remove;
pub use prototype::Member;
pub use prototype::Prototype;
pub use prototype::PrototypeSpec;

/// The own data fields of an instance, ordered by key.
pub type Fields = BTreeMap<String, Value>;

/// Builds a [`Fields`] map.
///
/// Keys are either identifiers or string literals; values are converted with
/// `Value::from`.
///
/// # Examples
///
/// ```
/// use clazz::{Value, fields};
///
/// let point = fields! { x: 1, y: 2 };
/// assert_eq!(point.get("x"), Some(&Value::from(1)));
///
/// let labelled = fields! { "first name" => "Ada" };
/// assert_eq!(labelled.get("first name"), Some(&Value::from("Ada")));
///
/// assert!(fields! {}.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:ident : $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(stringify!($key).to_string(), $crate::Value::from($value));
        )+
        fields
    }};
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(($key).to_string(), $crate::Value::from($value));
        )+
        fields
    }};
}
