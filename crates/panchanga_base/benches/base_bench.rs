use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_base::{
    ZodiacMode, karana_from_elongation, nakshatra_from_longitude, rashi_from_longitude,
    tithi_from_elongation, yoga_from_sum,
};

fn classification_bench(c: &mut Criterion) {
    let elong = 211.75;
    let moon_lon = 123.456;
    let sum = 278.31;

    let mut group = c.benchmark_group("classification");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(elong)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(moon_lon)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(sum)))
    });
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(moon_lon)))
    });
    group.finish();
}

fn ayanamsha_bench(c: &mut Criterion) {
    let jd_ut = 2_460_000.5;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri", |b| {
        b.iter(|| ZodiacMode::LahiriSidereal.ayanamsha_deg(black_box(jd_ut)))
    });
    group.finish();
}

criterion_group!(benches, classification_bench, ayanamsha_bench);
criterion_main!(benches);
