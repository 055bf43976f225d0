// Benchmark for status-line formatting
// Run with: cargo bench
use criterion::{criterion_group, criterion_main, Criterion};
use lazy_progress::format_status;

fn bench_format_status(c: &mut Criterion) {
    c.bench_function("format 10k status lines", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for i in 0..10_000u32 {
                let line = format_status(f64::from(i) / 100.0, Some(f64::from(i)));
                total += line.len();
            }
            assert!(total > 0);
        });
    });
}

criterion_group!(benches, bench_format_status);
criterion_main!(benches);
