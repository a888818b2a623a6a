use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stochastic::prelude::*;

fn long_event() -> EventDocument {
    let values: Vec<f64> = (0..20_000).map(|i| (i as f64 * 0.01).sin()).collect();
    EventDocument::new("Benchmark", "event_1", Units::Physical)
        .with_time_history(
            TimeHistory::new("accel_x", 0.005, values.clone())
                .unwrap()
                .with_unit("g"),
        )
        .with_time_history(TimeHistory::new("accel_y", 0.005, values).unwrap().with_unit("g"))
}

fn document_benchmark(c: &mut Criterion) {
    let doc = long_event();
    c.bench_function("serialize event document", |b| {
        b.iter(|| black_box(doc.to_json_string().unwrap()))
    });

    let text = doc.to_json_string().unwrap();
    c.bench_function("parse event document", |b| {
        b.iter(|| black_box(EventDocument::from_json_str(&text).unwrap()))
    });

    let dir = tempfile::tempdir().unwrap();
    let location = dir.path().join("event_1.json");
    c.bench_function("write event document", |b| {
        b.iter(|| write_event(black_box(&doc), &location).unwrap())
    });
}

criterion_group!(benches, document_benchmark);
criterion_main!(benches);
