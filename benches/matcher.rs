//! Pattern matching benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use firefly_test::{Color, Frame, Pattern, HEIGHT, WIDTH};

fn screen() -> Frame {
    let palette = [Color::BLACK, Color::RED, Color::GREEN, Color::BLUE];
    let pixels = (0..WIDTH * HEIGHT).map(|i| palette[i % palette.len()]).collect();
    Frame::new(pixels, WIDTH).unwrap()
}

fn bench_parse_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");

    let source = "K R G B . . K R\n".repeat(40);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| black_box(Pattern::parse(black_box(&source)).unwrap()))
    });

    let emoji = "🖤♥\u{fe0f}💚💙\n".repeat(40);
    group.bench_function("parse_emoji", |b| {
        b.iter(|| black_box(Pattern::parse(black_box(&emoji)).unwrap()))
    });

    group.finish();
}

fn bench_match_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");
    let frame = screen();

    // Full-screen pattern that matches
    let full = Frame::render_row(frame.row(0).unwrap()) + "\n";
    let full = full.repeat(HEIGHT);
    let pattern = Pattern::parse(&full).unwrap();
    group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));

    group.bench_function("full_screen", |b| {
        b.iter(|| black_box(pattern.matches(black_box(&frame)).unwrap()))
    });

    group.bench_function("full_screen_str", |b| {
        b.iter(|| black_box(frame.matches_pattern(black_box(&full)).unwrap()))
    });

    group.finish();
}

fn bench_mismatch_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");
    let frame = screen();
    let mut changed = frame.clone();
    changed.set(WIDTH - 1, HEIGHT - 1, Color::WHITE).unwrap();

    group.bench_function("snapshot_equal", |b| {
        b.iter(|| black_box(frame.assert_snapshot(black_box(&frame)).is_ok()))
    });

    group.bench_function("snapshot_mismatch", |b| {
        b.iter(|| {
            let err = changed.assert_snapshot(black_box(&frame)).unwrap_err();
            black_box(err.to_string())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_pattern,
    bench_match_frame,
    bench_mismatch_report
);

criterion_main!(benches);
