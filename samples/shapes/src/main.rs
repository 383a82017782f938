//! shapes
//!
//! Builds a circle, moves and grows it through lenses and plain methods,
//! and prints every version as it goes.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=clazz=debug cargo run --bin shapes
//! ```

use clazz::prelude::*;
use shapes_sample::{circle_class, point_class};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn as_instance(value: Value) -> Result<Instance, ClazzError> {
    let found = value.type_tag();
    value.into_object().ok_or_else(|| ClazzError::InvalidArgument {
        method: "as_instance".to_string(),
        index: 0,
        expected: TypeTag::Object,
        found: format!("\"{found}\""),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shapes=info,clazz=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let point = point_class()?;
    let circle = circle_class(&point)?;

    let original = circle.create(fields! { radius: 1 })?;
    let bigger = as_instance(original.call("changeSize", &[Value::from(1)])?)?;
    let moved = as_instance(bigger.call("setX", &[Value::from(10)])?)?;
    let moved = as_instance(moved.call("setY", &[Value::from(10)])?)?;

    tracing::info!(center = %original.call("printCenter", &[])?, "original circle");
    tracing::info!(center = %moved.call("printCenter", &[])?, radius = %moved.get("radius").cloned().unwrap_or(clazz::Value::from(0)), "moved circle");

    if let Err(error) = moved.call("setX", &[Value::from("ten")]) {
        tracing::warn!(%error, "rejected update");
    }

    println!("{}", serde_json::to_string_pretty(&moved)?);
    Ok(())
}
