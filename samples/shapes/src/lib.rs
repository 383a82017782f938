//! Point and Circle value objects.
//!
//! `Point` holds two validated coordinates. `Circle` stores a `Point` as its
//! center and exposes the center's methods through an alias and lenses.

use clazz::prelude::*;

/// Formats a point as `(x, y)`.
fn point_to_string(this: &Instance, _arguments: &[Value]) -> Result<Value, ClazzError> {
    let coordinate = |key: &str| {
        this.get(key)
            .cloned()
            .ok_or_else(|| ClazzError::FieldNotFound {
                key: key.to_string(),
            })
    };
    Ok(Value::from(format!("({}, {})", coordinate("x")?, coordinate("y")?)))
}

/// Defines the `Point` class.
///
/// # Errors
///
/// Never fails in practice; the error is propagated from `clazz`.
pub fn point_class() -> Result<Class, ClazzError> {
    PrototypeSpec::new()
        .named("Point")
        .field("x", 0)
        .field("y", 0)
        .member("setX", setter_with("x", validators::number))
        .member("setY", setter_with("y", validators::number))
        .member("getX", getter("x"))
        .member("getY", getter("y"))
        .method("toString", point_to_string)
        .build()
}

/// Defines the `Circle` class around a `Point` center.
///
/// # Errors
///
/// Fails if `point` does not define `toString`, `setX` and `setY`.
pub fn circle_class(point: &Class) -> Result<Class, ClazzError> {
    PrototypeSpec::new()
        .named("Circle")
        .field("center", point.instance())
        .field("radius", 0)
        .member("printCenter", alias("center", "toString"))
        .member("setX", lens("center", "setX"))
        .member("setY", lens("center", "setY"))
        .method("changeSize", |this, arguments| {
            let radius = this.get("radius").and_then(Value::as_number).unwrap_or(0.0);
            let amount = arguments.first().and_then(Value::as_number).ok_or_else(|| {
                ClazzError::InvalidArgument {
                    method: "changeSize".to_string(),
                    index: 0,
                    expected: TypeTag::Number,
                    found: arguments
                        .first()
                        .map_or_else(|| "nothing".to_string(), |value| format!("\"{}\"", value.type_tag())),
                }
            })?;
            Ok(Value::from(this.set("radius", radius + amount)))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_point_round_trip() {
        let point = point_class().unwrap();
        let instance = point.create(fields! { x: 1, y: 2 }).unwrap();

        assert_eq!(instance.to_string(), "(1, 2)");
    }

    #[rstest]
    fn test_circle_change_size_requires_number() {
        let circle = circle_class(&point_class().unwrap()).unwrap();

        let result = circle.instance().call("changeSize", &[Value::from("big")]);

        assert!(matches!(result, Err(ClazzError::InvalidArgument { .. })));
    }

    #[rstest]
    fn test_circle_without_point_methods_is_rejected() {
        let bare = PrototypeSpec::new().field("x", 0).build().unwrap();

        let result = circle_class(&bare);

        assert!(result.is_err_and(|error| error.is_definition_error()));
    }
}
