use criterion::{black_box, criterion_group, criterion_main, Criterion};
use itertools::iproduct;

use cartesian_view::{cartesian_product, multipass};

fn bench_forward(c: &mut Criterion) {
    let a: Vec<u64> = (0..64).collect();
    let b: Vec<u64> = (0..64).collect();
    let d: Vec<u64> = (0..16).collect();

    let mut group = c.benchmark_group("forward_3d");

    group.bench_function("cartesian_view", |bench| {
        bench.iter(|| {
            let view = cartesian_product((&a, &b, &d));
            let mut sum = 0u64;
            for (x, y, z) in view.iter() {
                sum = sum.wrapping_add(x ^ y ^ z);
            }
            black_box(sum)
        })
    });

    group.bench_function("itertools_iproduct", |bench| {
        bench.iter(|| {
            let mut sum = 0u64;
            for (x, y, z) in iproduct!(a.iter(), b.iter(), d.iter()) {
                sum = sum.wrapping_add(x ^ y ^ z);
            }
            black_box(sum)
        })
    });

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let a: Vec<u64> = (0..64).collect();
    let b: Vec<u64> = (0..64).collect();

    c.bench_function("reverse_2d", |bench| {
        bench.iter(|| {
            let view = cartesian_product((&a, &b));
            let mut sum = 0u64;
            for (x, y) in view.iter().rev() {
                sum = sum.wrapping_add(x.wrapping_mul(*y));
            }
            black_box(sum)
        })
    });
}

fn bench_multipass_dimension(c: &mut Criterion) {
    let a: Vec<u64> = (0..256).collect();

    c.bench_function("multipass_inner_dim", |bench| {
        bench.iter(|| {
            let inner = multipass((0..64u64).filter(|x| x % 3 != 0));
            let view = cartesian_product((&a, inner));
            let mut sum = 0u64;
            for (x, y) in view.iter() {
                sum = sum.wrapping_add(x + y);
            }
            black_box(sum)
        })
    });
}

criterion_group!(
    benches,
    bench_forward,
    bench_reverse,
    bench_multipass_dimension
);
criterion_main!(benches);
