//! Benchmarks for expression lowering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gramlift::prelude::*;

/// Builds a banded n x n matrix of small polynomials.
fn banded_matrix(n: usize) -> SparseMatrix<Q> {
    let x = VarId::new(0);
    SparseMatrix::from_entries(
        n,
        n,
        (0..n).flat_map(|i| {
            let diag = (i, i, Polynomial::<Q>::var(x));
            let off = (i, (i + 1) % n, Polynomial::constant(Q::from_integer(2)));
            [diag, off]
        }),
    )
}

/// Stacks `depth` alternating RepMat/Symmetric combinators over a leaf.
fn deep_chain(dag: &mut ExprDag<Q>, leaf: NodeId, depth: usize) -> NodeId {
    let mut node = leaf;
    for i in 0..depth {
        node = if i % 2 == 0 {
            dag.repmat(node, (1, 1))
        } else {
            dag.symmetric(node)
        };
    }
    node
}

fn bench_kron(c: &mut Criterion) {
    let mut group = c.benchmark_group("kron");

    for size in [4, 8, 16] {
        let mut dag = ExprDag::new();
        let a = dag.constant(banded_matrix(size));
        let b = dag.constant(banded_matrix(size));
        let k = dag.kron(a, b);

        group.bench_with_input(BenchmarkId::new("banded", size), &size, |bench, _| {
            bench.iter(|| black_box(evaluate(EvalContext::new(), &dag, k).unwrap()));
        });
    }

    group.finish();
}

fn bench_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_chain");

    for depth in [100, 500] {
        let mut dag = ExprDag::new();
        let leaf = dag.constant(banded_matrix(8));
        let root = deep_chain(&mut dag, leaf, depth);

        group.bench_with_input(BenchmarkId::new("repmat_symmetric", depth), &depth, |bench, _| {
            bench.iter(|| black_box(evaluate(EvalContext::new(), &dag, root).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kron, bench_deep_chain);
criterion_main!(benches);
