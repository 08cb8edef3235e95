//! 单位换算性能基准测试
//!
//! 对比直接换算与缓存换算：
//! - 基本单位 per / to
//! - 复合单位 per（逐量纲配对）
//! - 复合单位构造（约分）

use bb_units::catalog::{FT, IN, MIN, MS100, RAD, RAD_PER_S, REV, RPM, S};
use bb_units::{BaseUnit, CompositeUnit, Quantity};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_base(c: &mut Criterion) {
    let mut group = c.benchmark_group("BaseUnit");

    group.bench_function("plain_to", |b| {
        b.iter(|| black_box(IN.to(black_box(&FT), black_box(24.0))))
    });

    let memo = IN.memoized();
    group.bench_function("memoized_to", |b| {
        b.iter(|| black_box(memo.to(black_box(&FT), black_box(24.0))))
    });

    group.finish();
}

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("CompositeUnit");

    // 2048 tick/rev，Talon 速度时基
    let tick = BaseUnit::relative_to("tick", REV, 2048.0);
    let native = CompositeUnit::new([tick], [MS100]);

    group.bench_function("plain_per", |b| {
        b.iter(|| black_box(RAD_PER_S.per(black_box(&native))))
    });

    let memo = RAD_PER_S.clone().memoized();
    group.bench_function("memoized_per", |b| {
        b.iter(|| black_box(memo.per(black_box(&native))))
    });

    group.bench_function("construct_reduced", |b| {
        b.iter(|| black_box(CompositeUnit::new([REV, FT, S], [MIN, IN])))
    });

    group.finish();
}

fn bench_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quantity");

    let q = Quantity::new(1.0, &*RPM);
    group.bench_function("convert_rpm_to_rad_per_s", |b| {
        b.iter(|| black_box(q.value_in(&*RAD_PER_S)))
    });

    let angle = Quantity::new(1.5, RAD);
    group.bench_function("convert_rad_to_rev", |b| {
        b.iter(|| black_box(angle.value_in(REV)))
    });

    group.finish();
}

criterion_group!(benches, bench_base, bench_composite, bench_quantity);
criterion_main!(benches);
