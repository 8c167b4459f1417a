#[macro_use]
extern crate criterion;

extern crate latlon;

use criterion::Criterion;
use latlon::haversine::haversine_distance;
use latlon::{LatLon, MEAN_EARTH_RADIUS};

fn criterion_benchmark(c: &mut Criterion) {
    let point1 = LatLon::new(51.301389, 6.953333).unwrap();
    let point2 = LatLon::new(50.823194, 6.186389).unwrap();
    c.bench_function("haversine", |b| b.iter(|| haversine_distance(&point1, &point2, MEAN_EARTH_RADIUS)));
    c.bench_function("distance_to", |b| b.iter(|| point1.distance_to(&point2)));
    c.bench_function("intersection", |b| b.iter(|| LatLon::intersection(&point1, 108.547, &point2, 32.435)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
