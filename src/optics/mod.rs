//! Optics for reading and updating (nested) instance fields.
//!
//! Optics are composable accessors: [`FieldOptic`] focuses on one field,
//! [`FieldOptic::compose`] chains field optics through nested objects and
//! [`path`] builds the same chain from a list of keys. All of them implement
//! [`Optional`], since a field may be absent.
//!
//! Updates through an optic follow the copy-on-write rules of the object
//! model: every level on the way down is rebuilt, nothing is mutated.
//!
//! # Example
//!
//! ```
//! use clazz::optics::{FieldOptic, Optional};
//! use clazz::{PrototypeSpec, Value, fields};
//!
//! let point = PrototypeSpec::new().field("x", 0).field("y", 0).build().unwrap();
//! let circle = PrototypeSpec::new()
//!     .field("center", point.instance())
//!     .field("radius", 1)
//!     .build()
//!     .unwrap();
//!
//! let center_x = FieldOptic::new("center").compose(FieldOptic::new("x"));
//! let original = circle.instance();
//! let moved = center_x.set(original.clone(), Value::from(4));
//!
//! assert_eq!(center_x.get_option(&moved), Some(&Value::from(4)));
//! assert_eq!(center_x.get_option(&original), Some(&Value::from(0)));
//! assert!(moved.shares_prototype(&original));
//! ```

mod field;
mod optional;

pub use field::ComposedOptic;
pub use field::FieldOptic;
pub use field::PathOptic;
pub use field::path;
pub use optional::Optional;
