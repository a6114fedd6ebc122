use std::hint::black_box;

use bcbp::{Itinerary, Leg, GROUP_SEPARATOR};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const LEG: &str = "M1DESMARAIS/LUC       EABC123 YULFRAAC 00834226F001A00025100";
const LEG_WITH_DATA: &str =
    "M1DESMARAIS/LUC       EABC123 YULFRAAC 00834226F001A0002510032>5180WW6225BAC 2A0141234567890 1AC";

/// Benchmark individual leg parsing
fn bench_legs(c: &mut Criterion) {
    c.bench_function("leg", |b| b.iter(|| Leg::try_from(black_box(LEG))));

    c.bench_function("leg with optional data", |b| {
        b.iter(|| Leg::try_from(black_box(LEG_WITH_DATA)))
    });

    c.bench_function("leg to String", |b| {
        let leg = Leg::try_from(LEG).expect("leg should parse");
        b.iter(|| black_box(&leg).to_string())
    });

    c.bench_function("month and day", |b| {
        let leg = Leg::try_from(LEG).expect("leg should parse");
        b.iter(|| black_box(&leg).month_day())
    });
}

/// Benchmark itineraries with the maximum number of legs
fn bench_itinerary(c: &mut Criterion) {
    let legs = vec![LEG.replacen("M1", "M9", 1); 9];
    let raw = legs.join(GROUP_SEPARATOR.to_string().as_str());

    let mut group = c.benchmark_group("itinerary");
    group.throughput(Throughput::Bytes(raw.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| Itinerary::parse(black_box(&raw)))
    });

    group.bench_function("format", |b| {
        let itinerary = Itinerary::parse(&raw).expect("itinerary should parse");
        b.iter(|| black_box(&itinerary).to_string())
    });

    group.finish();
}

criterion_group!(benches, bench_legs, bench_itinerary);
criterion_main!(benches);
