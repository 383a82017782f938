//! Benchmark for copy-on-write instance updates.
//!
//! Measures `assign` on instances of growing width and a lens update through
//! a nested object.

use clazz::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wide_instance(size: u32) -> Instance {
    let fields = (0..size)
        .map(|index| (format!("field{index}"), Value::from(f64::from(index))))
        .collect();
    Instance::plain(fields)
}

// =============================================================================
// assign Benchmark
// =============================================================================

fn benchmark_assign(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("assign");

    for size in [4_u32, 32, 256] {
        let instance = wide_instance(size);
        let target = fields! { field0: -1 };
        group.bench_with_input(BenchmarkId::new("single_key", size), &size, |bencher, _| {
            bencher.iter(|| black_box(assign(black_box(&instance), [&target])));
        });
    }

    group.finish();
}

// =============================================================================
// lens Benchmark
// =============================================================================

fn benchmark_lens(criterion: &mut Criterion) {
    let point = PrototypeSpec::new()
        .field("x", 0)
        .field("y", 0)
        .member("setX", setter("x"))
        .build()
        .expect("point class");
    let circle = PrototypeSpec::new()
        .field("center", point.instance())
        .field("radius", 1)
        .member("setX", lens("center", "setX"))
        .build()
        .expect("circle class");
    let instance = circle.instance();
    let arguments = [Value::from(10)];

    criterion.bench_function("lens_set_x", |bencher| {
        bencher.iter(|| black_box(instance.call("setX", black_box(&arguments))));
    });
}

criterion_group!(benches, benchmark_assign, benchmark_lens);
criterion_main!(benches);
