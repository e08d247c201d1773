use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndvec::{ops, Scalar, Vector};

fn generate_vector(dimension: usize) -> Vector {
    Vector::new((0..dimension).map(|i| (i as Scalar) * 0.5 - 1.0)).unwrap()
}

fn benchmark_vector_ops(c: &mut Criterion) {
    let dimensions = [4, 16, 256, 1024];
    for &dimension in &dimensions {
        let a = generate_vector(dimension);
        let b = generate_vector(dimension);

        c.bench_function(&format!("add_{}", dimension), |bench| {
            bench.iter(|| ops::add(black_box(&a), black_box(&b)))
        });

        c.bench_function(&format!("magnitude_{}", dimension), |bench| {
            bench.iter(|| ops::magnitude(black_box(&a)))
        });

        c.bench_function(&format!("normalize_{}", dimension), |bench| {
            bench.iter(|| ops::normalize(black_box(&a)))
        });
    }
}

criterion_group!(vector_benches, benchmark_vector_ops);
criterion_main!(vector_benches);
