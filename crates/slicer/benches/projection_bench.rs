use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};
use slicer::{FieldSpec, Projector, Sliceable};

fn persons(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "id": i.to_string(),
                    "firstName": format!("First{}", i),
                    "lastName": format!("Last{}", i),
                    "email": format!("person{}@example.org", i),
                    "address": {"city": "Boston", "postalCode": "02101"},
                    "tags": ["a", "b", "c"]
                })
            })
            .collect(),
    )
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    let fields = FieldSpec::parse("firstName,lastName,email");

    for count in [10, 1_000, 10_000] {
        let payload = persons(count);

        for (mode, projector) in [("strict", Projector::strict()), ("lenient", Projector::lenient())] {
            group.bench_with_input(BenchmarkId::new(mode, count), &payload, |b, payload| {
                b.iter(|| {
                    let sliceable = Sliceable::from_value(payload).expect("array payload");
                    black_box(projector.project(sliceable, &fields))
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
