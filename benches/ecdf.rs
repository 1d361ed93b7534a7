use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pareto_ecdf::{brute_force_rank, rank, rank_pairwise, Problem};
use rand::prelude::*;

fn random_problem(rng: &mut StdRng, n: usize, d: usize) -> Problem {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f64>()).collect())
        .collect();
    Problem::from_rows(&rows).unwrap()
}

fn bench_ecdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdf");
    let mut rng = StdRng::seed_from_u64(42);

    let n = 1000;
    for d in [2, 3, 5] {
        let problem = random_problem(&mut rng, n, d);

        group.bench_function(format!("divide_and_conquer_n{n}_d{d}"), |b| {
            b.iter(|| {
                let mut p = problem.clone();
                rank(black_box(&mut p)).unwrap();
                black_box(p.len());
            })
        });

        group.bench_function(format!("brute_force_n{n}_d{d}"), |b| {
            b.iter(|| {
                let mut p = problem.clone();
                brute_force_rank(black_box(&mut p)).unwrap();
                black_box(p.len());
            })
        });
    }

    // 2D sweep called directly, without the k-D dispatch.
    let problem = random_problem(&mut rng, 10_000, 2);
    group.bench_function("pairwise_n10000", |b| {
        b.iter(|| {
            let mut p = problem.clone();
            rank_pairwise(black_box(&mut p)).unwrap();
            black_box(p.len());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ecdf);
criterion_main!(benches);
