//! Criterion benchmarks for the hot codec paths: offset arithmetic and both
//! sector-name codecs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use starname::class1;
use starname::class2;
use starname::hash::classify;
use starname::offset::{offset_from_sector, sector_from_offset};
use starname::position::SectorIndex;
use starname::Galaxy;

fn bench_offset_round_trip(c: &mut Criterion) {
    let g = Galaxy::embedded();
    let index = SectorIndex::new(3, -2, 5);

    c.bench_function("offset_from_sector", |b| {
        b.iter(|| {
            offset_from_sector(
                black_box(index),
                g.tables.c1_base_sector_coords,
                g.tables.c1_galaxy_size,
            )
        })
    });

    let offset = offset_from_sector(index, g.tables.c1_base_sector_coords, g.tables.c1_galaxy_size)
        .unwrap();
    c.bench_function("sector_from_offset", |b| {
        b.iter(|| {
            sector_from_offset(
                black_box(offset),
                g.tables.c1_base_sector_coords,
                g.tables.c1_galaxy_size,
            )
        })
    });
}

fn bench_hash_classify(c: &mut Criterion) {
    let g = Galaxy::embedded();
    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(12345), g.tables.c1_arbitrary_index_offset))
    });
}

fn bench_class1_codec(c: &mut Criterion) {
    let g = Galaxy::embedded();
    let mut group = c.benchmark_group("class1");

    for offset in [0i64, 500, -500, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("name_from_offset", offset), offset, |b, &offset| {
            b.iter(|| class1::name_from_offset(&g.tables, black_box(offset)))
        });
    }

    let frags = class1::name_from_offset(&g.tables, 42);
    group.bench_function("offset_from_name", |b| {
        b.iter(|| class1::offset_from_name(&g.tables, black_box(&frags)))
    });
}

fn bench_class2_codec(c: &mut Criterion) {
    let g = Galaxy::embedded();
    let mut group = c.benchmark_group("class2");

    group.bench_function("name_from_offset", |b| {
        b.iter(|| class2::name_from_offset(&g.tables, black_box(10)))
    });

    if let Ok(frags) = class2::name_from_offset(&g.tables, 10) {
        group.bench_function("offset_from_name", |b| {
            b.iter(|| class2::offset_from_name(&g.tables, black_box(&frags)))
        });
    }
}

fn bench_galaxy_round_trip(c: &mut Criterion) {
    let g = Galaxy::embedded();
    let pos = starname::Position::new(100.0, 200.0, -300.0);

    c.bench_function("sector_name", |b| {
        b.iter(|| g.sector_name(black_box(pos), false))
    });
}

criterion_group!(
    benches,
    bench_offset_round_trip,
    bench_hash_classify,
    bench_class1_codec,
    bench_class2_codec,
    bench_galaxy_round_trip
);
criterion_main!(benches);
