//! Dynamic values stored in instance fields.
//!
//! A [`Value`] is what a field holds and what a method returns. The
//! [`TypeTag`] of a value is its type category, used by the constructor type
//! check and by the validators.
//!
//! # Examples
//!
//! ```
//! use clazz::{TypeTag, Value};
//!
//! let value = Value::from(1.5);
//! assert_eq!(value.type_tag(), TypeTag::Number);
//! assert_eq!(value.as_number(), Some(1.5));
//! assert_eq!(value.to_string(), "1.5");
//! ```

use std::fmt;

use crate::object::Instance;

/// Type category of a value or prototype member.
///
/// `Function` never describes a [`Value`]; it is the tag of prototype members
/// that hold methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TypeTag {
    /// A floating point number.
    Number,
    /// A string.
    String,
    /// A boolean.
    Boolean,
    /// A nested instance.
    Object,
    /// A method.
    Function,
}

impl TypeTag {
    /// Returns the lowercase name of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A field value.
///
/// Cloning a `Value::Object` is cheap: instances share their storage.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A floating point number.
    Number(f64),
    /// A string.
    String(String),
    /// A boolean.
    Boolean(bool),
    /// A nested instance.
    Object(Instance),
}

impl Value {
    /// Returns the type category of this value.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Number(_) => TypeTag::Number,
            Self::String(_) => TypeTag::String,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Object(_) => TypeTag::Object,
        }
    }

    /// Returns the number if this is a `Value::Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `Value::String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Value::Boolean`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the instance if this is a `Value::Object`.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Instance> {
        match self {
            Self::Object(instance) => Some(instance),
            _ => None,
        }
    }

    /// Consumes the value and returns the instance if this is a `Value::Object`.
    #[must_use]
    pub fn into_object(self) -> Option<Instance> {
        match self {
            Self::Object(instance) => Some(instance),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(string) => formatter.write_str(string),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
            Self::Object(instance) => write!(formatter, "{instance}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Self::Object(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::String(string) => serializer.serialize_str(string),
            Self::Boolean(boolean) => serializer.serialize_bool(*boolean),
            Self::Object(instance) => instance.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(1), TypeTag::Number)]
    #[case(Value::from("a"), TypeTag::String)]
    #[case(Value::from(true), TypeTag::Boolean)]
    #[case(Value::from(Instance::plain(crate::Fields::new())), TypeTag::Object)]
    fn test_type_tag(#[case] value: Value, #[case] expected: TypeTag) {
        assert_eq!(value.type_tag(), expected);
    }

    #[rstest]
    #[case(TypeTag::Number, "number")]
    #[case(TypeTag::String, "string")]
    #[case(TypeTag::Boolean, "boolean")]
    #[case(TypeTag::Object, "object")]
    #[case(TypeTag::Function, "function")]
    fn test_type_tag_display(#[case] tag: TypeTag, #[case] expected: &str) {
        assert_eq!(tag.to_string(), expected);
    }

    #[rstest]
    fn test_accessors_reject_other_variants() {
        let value = Value::from("text");

        assert_eq!(value.as_str(), Some("text"));
        assert_eq!(value.as_number(), None);
        assert_eq!(value.as_bool(), None);
        assert!(value.as_object().is_none());
        assert!(value.into_object().is_none());
    }

    #[rstest]
    fn test_display_number_and_bool() {
        assert_eq!(Value::from(2).to_string(), "2");
        assert_eq!(Value::from(false).to_string(), "false");
    }
}
