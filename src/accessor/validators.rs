//! Ready-made setter validators.
//!
//! Each validator has the shape expected by
//! [`setter_with`](crate::setter_with): it takes the proposed value and the
//! receiver and returns the value to store or a [`ValidationError`].
//!
//! # Examples
//!
//! ```
//! use clazz::{Instance, Value, fields, validators};
//!
//! let receiver = Instance::plain(fields! {});
//!
//! assert!(validators::number(Value::from(1), &receiver).is_ok());
//! assert!(validators::number(Value::from("1"), &receiver).is_err());
//! ```

use crate::error::ValidationError;
use crate::object::Instance;
use crate::value::{TypeTag, Value};

/// Accepts numbers.
///
/// # Errors
///
/// Rejects every other type.
pub fn number(value: Value, _this: &Instance) -> Result<Value, ValidationError> {
    expect(TypeTag::Number, value)
}

/// Accepts strings.
///
/// # Errors
///
/// Rejects every other type.
pub fn string(value: Value, _this: &Instance) -> Result<Value, ValidationError> {
    expect(TypeTag::String, value)
}

/// Accepts booleans.
///
/// # Errors
///
/// Rejects every other type.
pub fn boolean(value: Value, _this: &Instance) -> Result<Value, ValidationError> {
    expect(TypeTag::Boolean, value)
}

/// Accepts nested objects.
///
/// # Errors
///
/// Rejects every other type.
pub fn object(value: Value, _this: &Instance) -> Result<Value, ValidationError> {
    expect(TypeTag::Object, value)
}

/// Accepts values of the given type.
///
/// # Examples
///
/// ```
/// use clazz::{Instance, TypeTag, Value, fields, validators};
///
/// let is_bool = validators::of_type(TypeTag::Boolean);
/// let receiver = Instance::plain(fields! {});
///
/// assert!(is_bool(Value::from(true), &receiver).is_ok());
/// assert!(is_bool(Value::from(0), &receiver).is_err());
/// ```
pub fn of_type(
    expected: TypeTag,
) -> impl Fn(Value, &Instance) -> Result<Value, ValidationError> + Send + Sync + 'static {
    move |value, _| expect(expected, value)
}

/// Accepts numbers within `minimum..=maximum`.
///
/// # Examples
///
/// ```
/// use clazz::{Instance, Value, fields, validators};
///
/// let percent = validators::range(0.0, 100.0);
/// let receiver = Instance::plain(fields! {});
///
/// assert!(percent(Value::from(50), &receiver).is_ok());
/// assert!(percent(Value::from(101), &receiver).is_err());
/// ```
pub fn range(
    minimum: f64,
    maximum: f64,
) -> impl Fn(Value, &Instance) -> Result<Value, ValidationError> + Send + Sync + 'static {
    move |value, _| {
        let number = expect(TypeTag::Number, value)?;
        match number.as_number() {
            Some(inner) if (minimum..=maximum).contains(&inner) => Ok(number),
            _ => Err(ValidationError::new(format!(
                "{number} is not between {minimum} and {maximum}"
            ))),
        }
    }
}

fn expect(expected: TypeTag, value: Value) -> Result<Value, ValidationError> {
    let found = value.type_tag();
    if found == expected {
        Ok(value)
    } else {
        Err(ValidationError::expected_type(expected, found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(1), true)]
    #[case(Value::from("1"), false)]
    #[case(Value::from(false), false)]
    fn test_number(#[case] value: Value, #[case] accepted: bool) {
        let receiver = Instance::plain(fields! {});

        assert_eq!(number(value, &receiver).is_ok(), accepted);
    }

    #[rstest]
    fn test_string_boolean_object() {
        let receiver = Instance::plain(fields! {});

        assert!(string(Value::from("a"), &receiver).is_ok());
        assert!(boolean(Value::from(true), &receiver).is_ok());
        assert!(object(Value::from(receiver.clone()), &receiver).is_ok());
        assert!(object(Value::from(1), &receiver).is_err());
    }

    #[rstest]
    fn test_rejection_message() {
        let receiver = Instance::plain(fields! {});

        let error = number(Value::from("a"), &receiver).unwrap_err();

        assert_eq!(
            error.to_string(),
            "expected a value of type \"number\", got \"string\""
        );
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(10.0, true)]
    #[case(-0.5, false)]
    #[case(10.5, false)]
    fn test_range_bounds(#[case] input: f64, #[case] accepted: bool) {
        let receiver = Instance::plain(fields! {});
        let validate = range(0.0, 10.0);

        assert_eq!(validate(Value::from(input), &receiver).is_ok(), accepted);
    }
}
