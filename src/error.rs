//! Error types for class definition and instance operations.
//!
//! Every failure in this crate is reported through [`ClazzError`]. Failures
//! fall into two groups:
//!
//! - **Definition errors** are raised by [`clazz`](crate::clazz) while the
//!   prototype is being validated: [`ClazzError::MissingDefault`],
//!   [`ClazzError::NotAnObject`] and [`ClazzError::MissingMethod`].
//! - **Call errors** are raised while constructing instances or invoking
//!   methods: type mismatches, unknown fields or methods, bad arguments,
//!   alias or lens targets overridden after definition, and validator
//!   rejections.
//!
//! # Examples
//!
//! ```
//! use clazz::{ClazzError, PrototypeSpec, lens};
//!
//! let result = PrototypeSpec::new()
//!     .member("setX", lens("missing", "setX"))
//!     .build();
//!
//! let error = result.unwrap_err();
//! assert!(matches!(error, ClazzError::MissingDefault { .. }));
//! assert!(error.is_definition_error());
//! ```

use thiserror::Error;

use crate::accessor::AccessorKind;
use crate::value::TypeTag;

/// Error returned by a setter validator.
///
/// Validators return this type and the setter hands it back to the caller
/// untouched inside [`ClazzError::Validation`].
///
/// # Examples
///
/// ```
/// use clazz::ValidationError;
///
/// let error = ValidationError::new("\"a\" is not a number");
/// assert_eq!(error.to_string(), "\"a\" is not a number");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human readable reason for the rejection.
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError` with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates an error stating that a value of type `expected` was required.
    ///
    /// # Examples
    ///
    /// ```
    /// use clazz::{TypeTag, ValidationError};
    ///
    /// let error = ValidationError::expected_type(TypeTag::Number, TypeTag::String);
    /// assert_eq!(error.to_string(), "expected a value of type \"number\", got \"string\"");
    /// ```
    #[must_use]
    pub fn expected_type(expected: TypeTag, found: TypeTag) -> Self {
        Self::new(format!(
            "expected a value of type \"{expected}\", got \"{found}\""
        ))
    }
}

/// Errors raised while defining classes or operating on instances.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ClazzError {
    /// An alias or lens refers to a prototype key that has no default value.
    #[error(
        "the property \"{key}\" used by {kind} \"{member}\" has no default value in the prototype"
    )]
    MissingDefault {
        /// Name of the accessor member.
        member: String,
        /// The referenced prototype key.
        key: String,
        /// Accessor kind (`alias` or `lens`).
        kind: AccessorKind,
    },

    /// The value an accessor refers to is not an object.
    #[error(
        "the property \"{key}\" used by {kind} \"{member}\" holds a value of type \"{found}\", not an object"
    )]
    NotAnObject {
        /// Name of the accessor member.
        member: String,
        /// The referenced key.
        key: String,
        /// Accessor kind (`alias` or `lens`).
        kind: AccessorKind,
        /// Type actually found under `key`.
        found: TypeTag,
    },

    /// The nested object an accessor refers to lacks the requested method.
    #[error(
        "the object stored in \"{key}\" has no method \"{method}\" required by {kind} \"{member}\""
    )]
    MissingMethod {
        /// Name of the accessor member.
        member: String,
        /// The referenced key.
        key: String,
        /// The method that was expected on the nested object.
        method: String,
        /// Accessor kind (`alias` or `lens`).
        kind: AccessorKind,
    },

    /// An alias or lens found no value under its key when called.
    #[error("{kind} forwarding \"{method}\" found no value under \"{key}\"")]
    TargetMissing {
        /// The key holding the nested object.
        key: String,
        /// The forwarded method.
        method: String,
        /// Accessor kind (`alias` or `lens`).
        kind: AccessorKind,
    },

    /// An alias or lens found a non-object under its key when called.
    #[error(
        "{kind} forwarding \"{method}\" found a value of type \"{found}\" under \"{key}\", not an object"
    )]
    TargetNotAnObject {
        /// The key holding the nested object.
        key: String,
        /// The forwarded method.
        method: String,
        /// Accessor kind (`alias` or `lens`).
        kind: AccessorKind,
        /// Type actually found under `key`.
        found: TypeTag,
    },

    /// A setter was called without the value to store.
    #[error("the setter for \"{key}\" needs a value of type \"{expected}\"")]
    MissingValue {
        /// The field the setter writes.
        key: String,
        /// Type of the prototype member, or `object` when undeclared.
        expected: TypeTag,
    },

    /// A constructor argument does not match the type of the prototype default.
    #[error(
        "\"{key}\" is set to a value of type \"{provided}\" in the constructor, but it is a \"{expected}\" in the prototype"
    )]
    TypeMismatch {
        /// Offending key.
        key: String,
        /// Type of the provided value.
        provided: TypeTag,
        /// Type of the prototype member.
        expected: TypeTag,
    },

    /// A constructor argument names a key the prototype does not declare.
    #[error("\"{key}\" is not declared in the prototype")]
    UnknownField {
        /// Offending key.
        key: String,
    },

    /// A getter found no value for its key.
    #[error("no value is stored under \"{key}\"")]
    FieldNotFound {
        /// The key that was read.
        key: String,
    },

    /// A method was called that the prototype does not define.
    #[error("no method \"{method}\" is defined on the prototype")]
    MethodNotFound {
        /// The requested method.
        method: String,
    },

    /// A method received a missing or ill-typed argument.
    #[error("argument {index} of \"{method}\" must be of type \"{expected}\", got {found}")]
    InvalidArgument {
        /// The method that rejected the argument.
        method: String,
        /// Zero-based position of the argument.
        index: usize,
        /// Required type.
        expected: TypeTag,
        /// Description of what was passed (`"nothing"` when missing).
        found: String,
    },

    /// A setter validator rejected a value.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClazzError {
    /// Returns `true` for errors raised while validating a prototype.
    ///
    /// # Examples
    ///
    /// ```
    /// use clazz::ClazzError;
    ///
    /// let error = ClazzError::MethodNotFound { method: "toString".to_string() };
    /// assert!(!error.is_definition_error());
    /// ```
    #[must_use]
    pub const fn is_definition_error(&self) -> bool {
        matches!(
            self,
            Self::MissingDefault { .. } | Self::NotAnObject { .. } | Self::MissingMethod { .. }
        )
    }

    pub(crate) fn invalid_argument(
        method: &str,
        index: usize,
        expected: TypeTag,
        found: Option<TypeTag>,
    ) -> Self {
        Self::InvalidArgument {
            method: method.to_string(),
            index,
            expected,
            found: found.map_or_else(|| "nothing".to_string(), |tag| format!("\"{tag}\"")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_validation_error_display() {
        let error = ValidationError::new("a is not a number");

        assert_eq!(error.to_string(), "a is not a number");
    }

    #[rstest]
    fn test_validation_is_transparent() {
        let error: ClazzError = ValidationError::new("rejected").into();

        assert_eq!(error.to_string(), "rejected");
        assert_eq!(
            error,
            ClazzError::Validation(ValidationError::new("rejected"))
        );
    }

    #[rstest]
    fn test_type_mismatch_display() {
        let error = ClazzError::TypeMismatch {
            key: "x".to_string(),
            provided: TypeTag::String,
            expected: TypeTag::Number,
        };

        assert_eq!(
            error.to_string(),
            "\"x\" is set to a value of type \"string\" in the constructor, but it is a \"number\" in the prototype"
        );
    }

    #[rstest]
    fn test_missing_default_names_kind() {
        let error = ClazzError::MissingDefault {
            member: "setX".to_string(),
            key: "center".to_string(),
            kind: AccessorKind::Lens,
        };

        assert!(error.to_string().contains("lens \"setX\""));
    }

    #[rstest]
    #[case(None, "nothing")]
    #[case(Some(TypeTag::Boolean), "\"boolean\"")]
    fn test_invalid_argument_found(#[case] found: Option<TypeTag>, #[case] expected: &str) {
        let error = ClazzError::invalid_argument("set", 0, TypeTag::String, found);

        match error {
            ClazzError::InvalidArgument { found, .. } => assert_eq!(found, expected),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    fn test_definition_errors() {
        let missing_method = ClazzError::MissingMethod {
            member: "m".to_string(),
            key: "k".to_string(),
            method: "f".to_string(),
            kind: AccessorKind::Alias,
        };
        let mismatch = ClazzError::UnknownField {
            key: "k".to_string(),
        };

        assert!(missing_method.is_definition_error());
        assert!(!mismatch.is_definition_error());
    }

    #[rstest]
    fn test_call_time_target_errors() {
        let not_an_object = ClazzError::TargetNotAnObject {
            key: "center".to_string(),
            method: "getX".to_string(),
            kind: AccessorKind::Alias,
            found: TypeTag::Number,
        };
        let missing = ClazzError::TargetMissing {
            key: "center".to_string(),
            method: "setX".to_string(),
            kind: AccessorKind::Lens,
        };

        assert!(!not_an_object.is_definition_error());
        assert!(!missing.is_definition_error());
        assert_eq!(
            not_an_object.to_string(),
            "alias forwarding \"getX\" found a value of type \"number\" under \"center\", not an object"
        );
        assert_eq!(
            missing.to_string(),
            "lens forwarding \"setX\" found no value under \"center\""
        );
    }

    #[rstest]
    fn test_missing_value_display() {
        let error = ClazzError::MissingValue {
            key: "x".to_string(),
            expected: TypeTag::Number,
        };

        assert_eq!(
            error.to_string(),
            "the setter for \"x\" needs a value of type \"number\""
        );
        assert!(!error.is_definition_error());
    }
}
