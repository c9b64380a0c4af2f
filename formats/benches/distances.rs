use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geo::point;
use geo::prelude::*;

use tripmeter_formats::{
    haversine, spherical_cosines, Decoder, Geographic, Grid, LatLon, EARTH_RADIUS,
};

fn setup() -> (Geographic, Geographic) {
    let point1 = Geographic::new(48.573174, 2.319671);
    let point2 = Geographic::new(48.566757, 2.303015);
    (point1, point2)
}

fn self_haversines(c: &mut Criterion) {
    let (point1, point2) = setup();

    c.bench_function("self::haversines", move |b| {
        b.iter(|| {
            black_box(haversine(point1, point2, EARTH_RADIUS));
        })
    });
}

fn self_cosinuses(c: &mut Criterion) {
    let (point1, point2) = setup();

    c.bench_function("self::sincosines", |b| {
        b.iter(|| {
            black_box(spherical_cosines(point1, black_box(point2), EARTH_RADIUS));
        })
    });
}

fn self_nvector(c: &mut Criterion) {
    let (point1, point2) = setup();
    let (v1, v2) = (point1.to_nvector(), point2.to_nvector());

    c.bench_function("self::nvector", |b| {
        b.iter(|| {
            black_box(haversine(v1, v2, EARTH_RADIUS));
        })
    });
}

fn self_grid(c: &mut Criterion) {
    let (point1, point2) = setup();
    let g1 = Grid::from_lat_lon(point1.latitude, point1.longitude);
    let g2 = Grid::from_lat_lon(point2.latitude, point2.longitude);

    c.bench_function("self::grid", |b| {
        b.iter(|| {
            black_box(haversine(g1, g2, EARTH_RADIUS));
        })
    });
}

fn self_decode(c: &mut Criterion) {
    let d = Decoder::default();
    let text = r#"{"easting":606669.813204,"northing":4217061.74608,"zone_number":15,"zone_letter":"S"}"#;

    c.bench_function("self::decode_grid", |b| {
        b.iter(|| {
            if let Ok(c) = d.decode(black_box(text)) {
                black_box(c.latitude_degrees());
            }
        })
    });
}

fn geo_haversines(c: &mut Criterion) {
    let (point1, point2) = setup();

    let p1 = point!(x: point1.longitude, y: point1.latitude);
    let p2 = point!(x: point2.longitude, y: point2.latitude);

    c.bench_function("geo::haversines", |b| {
        b.iter(|| {
            black_box(p1.haversine_distance(&p2));
        })
    });
}

fn geo_geodesic(c: &mut Criterion) {
    let (point1, point2) = setup();

    let p1 = point!(x: point1.longitude, y: point1.latitude);
    let p2 = point!(x: point2.longitude, y: point2.latitude);

    c.bench_function("geo::geodesic", |b| {
        b.iter(|| {
            black_box(p1.geodesic_distance(&p2));
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = self_haversines, self_cosinuses, self_nvector, self_grid, self_decode, geo_haversines, geo_geodesic
}

criterion_main!(benches);
