use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mdforge::boundaries::{BoundaryConditions, NoBounds, Pbc};

fn bench_minimg(c: &mut Criterion) {
    let a_pos = black_box([3.5, 4.7, 1.2]);
    let b_pos = black_box([2.3, 1.9, 0.4]);
    let bounds = Pbc::<3>::cubic(5.0).unwrap();

    c.bench_function("minimg dist2", move |b| {
        b.iter(|| bounds.dist2(a_pos, b_pos))
    });

    let bounds = Pbc::<3>::cubic(5.0).unwrap();

    c.bench_function("minimg dist", move |b| b.iter(|| bounds.dist(a_pos, b_pos)));

    let bounds = NoBounds::<3>;

    c.bench_function("straight dist2", move |b| {
        b.iter(|| bounds.dist2(a_pos, b_pos))
    });

    let bounds = NoBounds::<3>;

    c.bench_function("straight dist", move |b| {
        b.iter(|| bounds.dist(a_pos, b_pos))
    });
}

criterion_group!(benches, bench_minimg);
criterion_main!(benches);
