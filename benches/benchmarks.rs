//! Performance benchmarks for frisk

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use frisk::test_utils::TestDir;
use frisk::{RenderConfig, ScanConfig, TreeBuilder, TreeRenderer, format_size};

fn bench_scan_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    // Small tree (~40 files)
    let small = TestDir::new();
    small.populate(2, 3, 3);
    // Larger tree (~1300 files)
    let large = TestDir::new();
    large.populate(4, 4, 4);

    for (label, dir) in [("small", &small), ("large", &large)] {
        group.bench_function(format!("{}_sequential", label), |b| {
            let builder = TreeBuilder::new(ScanConfig::sequential());
            b.iter(|| builder.build(black_box(dir.path())))
        });

        group.bench_function(format!("{}_concurrent", label), |b| {
            let builder = TreeBuilder::new(ScanConfig::default());
            b.iter(|| builder.build(black_box(dir.path())))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let dir = TestDir::new();
    dir.populate(4, 4, 4);
    let tree = TreeBuilder::new(ScanConfig::default())
        .build(dir.path())
        .unwrap();

    let mut group = c.benchmark_group("render");

    let wide = TreeRenderer::new(RenderConfig {
        use_color: false,
        ..RenderConfig::default()
    });
    group.bench_function("wide", |b| b.iter(|| wide.format(black_box(&tree))));

    let compact = TreeRenderer::new(RenderConfig {
        use_color: false,
        compact: true,
        ..RenderConfig::default()
    });
    group.bench_function("compact", |b| b.iter(|| compact.format(black_box(&tree))));

    group.finish();
}

fn bench_format_size(c: &mut Criterion) {
    c.bench_function("format_size", |b| {
        b.iter(|| format_size(black_box(1_073_741_824 + 12_345)))
    });
}

criterion_group!(benches, bench_scan_modes, bench_render, bench_format_size);
criterion_main!(benches);
