//! # clazz
//!
//! Immutable, prototype-sharing value objects with composable accessors.
//!
//! ## Overview
//!
//! - **Classes**: [`clazz`] turns a [`PrototypeSpec`] (default field values
//!   and methods) into a [`Class`], validating it once up front.
//! - **Instances**: an [`Instance`] owns only its data fields and delegates
//!   defaults and methods to the prototype shared by its class.
//! - **Copy-on-write**: [`assign`]/[`modify`] and [`remove`] return new
//!   instances; the receiver never changes.
//! - **Accessors**: [`getter`], [`setter`], [`setter_with`], [`alias`] and
//!   [`lens`] generate methods, including ones that reach into nested objects.
//! - **Optics**: field optics for reading and updating nested fields from
//!   outside the class (feature `optics`).
//!
//! ## Feature Flags
//!
//! - `optics` (default): field optics
//! - `serde`: `Serialize` for values and instances, `Serialize`/`Deserialize`
//!   for [`ClassOptions`]
//!
//! ## Example
//!
//! ```rust
//! use clazz::prelude::*;
//!
//! let point = PrototypeSpec::new()
//!     .named("Point")
//!     .field("x", 0)
//!     .field("y", 0)
//!     .member("setX", setter_with("x", validators::number))
//!     .member("setY", setter_with("y", validators::number))
//!     .method("toString", |this, _| {
//!         Ok(Value::from(format!(
//!             "({}, {})",
//!             this.get("x").unwrap(),
//!             this.get("y").unwrap()
//!         )))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let circle = PrototypeSpec::new()
//!     .named("Circle")
//!     .field("center", point.instance())
//!     .field("radius", 0)
//!     .member("printCenter", alias("center", "toString"))
//!     .member("setX", lens("center", "setX"))
//!     .build()
//!     .unwrap();
//!
//! let original = circle.create(fields! { radius: 1 }).unwrap();
//! let moved = original.call("setX", &[Value::from(10)]).unwrap();
//! let moved = moved.as_object().unwrap();
//!
//! assert_eq!(moved.call("printCenter", &[]).unwrap(), Value::from("(10, 0)"));
//! assert_eq!(original.call("printCenter", &[]).unwrap(), Value::from("(0, 0)"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use clazz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::accessor::{
        Accessor, AccessorKind, alias, getter, lens, setter, setter_with, validators,
    };
    pub use crate::error::{ClazzError, ValidationError};
    pub use crate::fields;
    pub use crate::object::{
        Class, ClassOptions, Fields, Instance, Member, Method, Prototype, PrototypeSpec, assign,
        clazz, modify, remove,
    };
    #[cfg(feature = "optics")]
    pub use crate::optics::{FieldOptic, Optional, path};
    pub use crate::value::{TypeTag, Value};
}

pub mod accessor;
pub mod error;
pub mod object;
#[cfg(feature = "optics")]
pub mod optics;
pub mod value;

pub use accessor::{
    Accessor, AccessorKind, ValidatorFn, alias, getter, lens, setter, setter_with, validators,
};
pub use error::{ClazzError, ValidationError};
pub use object::{
    Class, ClassOptions, ConstructorFn, Fields, Instance, Member, Method, MethodBody, Prototype,
    PrototypeSpec, assign, clazz, modify, remove,
};
pub use value::{TypeTag, Value};

static_assertions::assert_impl_all!(Instance: Send, Sync, Clone);
static_assertions::assert_impl_all!(Class: Send, Sync, Clone);
static_assertions::assert_impl_all!(Value: Send, Sync);
static_assertions::assert_impl_all!(Method: Send, Sync);
