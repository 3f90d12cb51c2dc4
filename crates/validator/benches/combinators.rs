use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sift_validator::prelude::*;

// ============================================================================
// Primitives and logic
// ============================================================================

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    let text = Value::from("hello");
    let num = Value::from(42);

    group.bench_function("string_ok", |b| b.iter(|| black_box(string().validate(&text))));
    group.bench_function("string_err", |b| b.iter(|| black_box(string().validate(&num))));
    group.bench_function("one_of", |b| {
        let level = one_of(["debug", "info", "warn", "error"]);
        let value = Value::from("warn");
        b.iter(|| black_box(level.validate(&value)))
    });

    group.finish();
}

fn bench_logic(c: &mut Criterion) {
    let mut group = c.benchmark_group("logic");

    let id = or((string(), number(), bigint()));
    let miss = Value::Null;
    let hit = Value::from(10_i128);

    group.bench_function("or_last_branch", |b| b.iter(|| black_box(id.validate(&hit))));
    group.bench_function("or_all_fail", |b| b.iter(|| black_box(id.validate(&miss))));

    let both = and((object(), not::<Value, _>(array())));
    let object = Value::from(Object::new());
    group.bench_function("and_not", |b| b.iter(|| black_box(both.validate(&object))));

    group.finish();
}

// ============================================================================
// Shapes
// ============================================================================

fn user() -> Pipe<IsObject, StrictProps> {
    props(
        Props::new()
            .field("name", string())
            .field("age", number())
            .field("tags", array_of(string()))
            .optional_field("email", string())
            .deny_extra(),
    )
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    let validator = user();

    let valid = Value::from(serde_json::json!({
        "name": "ann",
        "age": 31,
        "tags": ["a", "b", "c"],
        "email": "ann@example.com"
    }));
    let invalid = Value::from(serde_json::json!({
        "name": "ann",
        "age": 31,
        "tags": ["a", 2],
    }));

    group.bench_function("props_ok", |b| b.iter(|| black_box(validator.validate(&valid))));
    group.bench_function("props_err", |b| b.iter(|| black_box(validator.validate(&invalid))));

    for len in [10_usize, 100, 1000] {
        let items = Value::array((0..len).map(|i| Value::from(i as f64)));
        let numbers = array_of(number());
        group.bench_with_input(BenchmarkId::new("array_of", len), &items, |b, items| {
            b.iter(|| black_box(numbers.validate(items)))
        });
    }

    let pair = tuple((string(), number()));
    let entry = Value::array([Value::from("x"), Value::from(1)]);
    group.bench_function("tuple", |b| b.iter(|| black_box(pair.validate(&entry))));

    group.finish();
}

fn bench_reasons(c: &mut Criterion) {
    let mut group = c.benchmark_group("reasons");

    let reason = or((string(), props(Props::new().field("a", number()))))
        .validate(&Value::from(serde_json::json!({ "a": "x" })))
        .err()
        .unwrap_or_else(|| ValidationError::new("unreachable"));

    group.bench_function("tree", |b| b.iter(|| black_box(reason.tree().to_string())));
    group.bench_function("json", |b| b.iter(|| black_box(reason.to_json_value())));
    group.bench_function("leaf_messages", |b| b.iter(|| black_box(reason.leaf_messages())));

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_logic, bench_shapes, bench_reasons);
criterion_main!(benches);
