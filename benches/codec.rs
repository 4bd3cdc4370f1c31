//! Color and file format benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use firefly_test::frame_core::{codec, png};
use firefly_test::{Color, Frame, HEIGHT, WIDTH};

fn screen() -> Frame {
    let buf: Vec<u16> = (0..WIDTH * HEIGHT).map(|i| (i * 37) as u16).collect();
    Frame::from_rgb16(&buf, WIDTH).unwrap()
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    let raw: Vec<u32> = (0..4096u32).map(|i| (i * 4099) & 0xFF_FFFF).collect();
    group.throughput(Throughput::Elements(raw.len() as u64));

    group.bench_function("from_rgb24", |b| {
        b.iter(|| {
            for &v in &raw {
                black_box(Color::from_rgb24(black_box(v)).unwrap());
            }
        })
    });

    group.bench_function("glyph", |b| {
        b.iter(|| {
            for &v in &raw {
                black_box(Color::from_rgb24(v).unwrap().glyph());
            }
        })
    });

    group.finish();
}

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let frame = screen();
    let mut encoded = Vec::new();
    codec::write(&frame, &mut encoded).unwrap();
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function("write", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(encoded.len());
            codec::write(black_box(&frame), &mut buf).unwrap();
            black_box(buf)
        })
    });

    group.bench_function("read", |b| {
        b.iter(|| black_box(codec::read(black_box(encoded.as_slice())).unwrap()))
    });

    group.finish();
}

fn bench_png(c: &mut Criterion) {
    let mut group = c.benchmark_group("png");
    let frame = screen();

    group.bench_function("write", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            png::write(black_box(&frame), &mut buf).unwrap();
            black_box(buf)
        })
    });

    let data = vec![0xA5u8; 64 * 1024];
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("crc32", |b| b.iter(|| black_box(png::crc32(black_box(&data)))));

    group.finish();
}

criterion_group!(benches, bench_color, bench_binary, bench_png);

criterion_main!(benches);
