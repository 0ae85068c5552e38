//! Benchmarks for the primitives generated templates call on every render.
//!
//! Usage: cargo bench --bench runtime_primitives

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jinja_aot::{contains, equals, escape_str, is_truthy, Runtime, Value};
use serde_json::json;

fn bench_escape(c: &mut Criterion) {
    let clean = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let dirty = "<p class=\"x\">Tom & Jerry's `show`</p> ".repeat(20);

    let mut group = c.benchmark_group("escape");
    group.bench_function("clean", |b| b.iter(|| escape_str(black_box(&clean)).len()));
    group.bench_function("dirty", |b| b.iter(|| escape_str(black_box(&dirty)).len()));
    group.finish();
}

fn bench_equality(c: &mut Criterion) {
    let a = Value::from(json!({
        "users": [{"name": "a", "roles": ["x", "y"]}, {"name": "b", "roles": []}],
        "meta": {"page": 1, "total": 40}
    }));
    let b = Value::from(a.to_json());

    c.bench_function("equals/nested_structural", |bench| {
        bench.iter(|| equals(black_box(&a), black_box(&b)))
    });
    c.bench_function("contains/deep", |bench| {
        let haystack = Value::array((0..100).map(|i| json!({"id": i})).map(Value::from).collect::<Vec<_>>());
        let needle = Value::from(json!({"id": 99}));
        bench.iter(|| contains(black_box(&needle), black_box(&haystack), true))
    });
}

fn bench_truthiness(c: &mut Criterion) {
    let values = [
        Value::from(json!([])),
        Value::from(json!({"a": 1})),
        Value::from(""),
        Value::from(0),
    ];
    c.bench_function("is_truthy/mixed", |b| {
        b.iter(|| values.iter().filter(|v| is_truthy(black_box(v))).count())
    });
}

fn bench_filters(c: &mut Criterion) {
    let runtime = Runtime::new();
    let items = Value::array(0..1000);
    let text = Value::from("lorem ipsum dolor sit amet ".repeat(40));

    c.bench_function("filters/batch", |b| {
        b.iter(|| runtime.apply_filter("batch", black_box(&items), &[Value::from(7), Value::Null]))
    });
    c.bench_function("filters/truncate", |b| {
        b.iter(|| runtime.apply_filter("truncate", black_box(&text), &[Value::from(80)]))
    });
}

criterion_group!(
    benches,
    bench_escape,
    bench_equality,
    bench_truthiness,
    bench_filters
);
criterion_main!(benches);
