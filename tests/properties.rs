//! Cross-algorithm property tests: every algorithm must agree on the total
//! tree weight for the same graph, the distributed algorithms must each
//! produce an actual spanning tree (`n - 1` acyclic edges), and the
//! documented scenarios from spec.md must hold exactly.

use std::collections::HashSet;

use mst_cohort::messaging::channel::spawn_cohort;
use mst_cohort::{compute_mst, Algorithm, AdjMatrix, MstResult};
use proptest::prelude::*;

/// Installs a test-writer subscriber so `--features logging` runs can observe
/// the per-round `tracing::debug!` events; harmless to call repeatedly.
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn run(algorithm: Algorithm, peers: usize, matrix: &AdjMatrix) -> MstResult {
    init_tracing();
    let matrix = matrix.clone();
    let results = spawn_cohort(peers, move |cohort| compute_mst(&cohort, &matrix, algorithm)).unwrap();
    results[0].as_ref().unwrap().clone().unwrap()
}

/// Checks that `tree` is actually a spanning tree of a graph on `n` vertices:
/// exactly `n - 1` edges and no cycle (every prefix keeps the forest acyclic).
fn is_spanning_tree(tree: &[mst_cohort::Edge], n: usize) -> bool {
    if tree.len() != n.saturating_sub(1) {
        return false;
    }
    let mut uf = mst_cohort::core::UnionFind::new(n);
    tree.iter().all(|edge| uf.union(edge.i, edge.j))
}

/// A random connected graph over `n` vertices: a random spanning path first,
/// then `extra` additional random edges layered on top.
fn random_connected_matrix(n: usize, extra: usize, seed: u64) -> AdjMatrix {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for v in 1..n {
        let u = rng.random_range(0..v);
        edges.push((u as u32, v as u32, rng.random_range(1..500)));
    }
    for _ in 0..extra {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i != j {
            let (a, b) = (i.min(j) as u32, i.max(j) as u32);
            edges.push((a, b, rng.random_range(1..500)));
        }
    }
    AdjMatrix::from_edges(n, &edges).unwrap()
}

proptest! {
    #[test]
    fn all_four_algorithms_agree_on_weight(n in 2usize..20, extra in 0usize..15, seed in any::<u64>(), peers in 1usize..5) {
        let matrix = random_connected_matrix(n, extra, seed);
        let prim_seq = run(Algorithm::PrimSeq, 1, &matrix);
        let kruskal_seq = run(Algorithm::KruskalSeq, 1, &matrix);
        let prim_par = run(Algorithm::PrimPar, peers, &matrix);
        let kruskal_par = run(Algorithm::KruskalPar, peers, &matrix);

        prop_assert_eq!(prim_seq.sum, kruskal_seq.sum);
        prop_assert_eq!(prim_seq.sum, prim_par.sum);
        prop_assert_eq!(prim_seq.sum, kruskal_par.sum);
    }

    #[test]
    fn distributed_kruskal_is_a_real_spanning_tree(n in 2usize..25, extra in 0usize..20, seed in any::<u64>(), peers in 1usize..6) {
        let matrix = random_connected_matrix(n, extra, seed);
        let result = run(Algorithm::KruskalPar, peers, &matrix);
        prop_assert!(is_spanning_tree(&result.tree, n));
    }

    #[test]
    fn distributed_prim_is_a_real_spanning_tree(n in 2usize..25, extra in 0usize..20, seed in any::<u64>(), peers in 1usize..6) {
        let matrix = random_connected_matrix(n, extra, seed);
        let result = run(Algorithm::PrimPar, peers, &matrix);
        prop_assert!(is_spanning_tree(&result.tree, n));
    }

    #[test]
    fn sequential_kruskal_and_prim_pick_the_same_weight_multiset(n in 2usize..20, extra in 0usize..15, seed in any::<u64>()) {
        let matrix = random_connected_matrix(n, extra, seed);
        let prim = run(Algorithm::PrimSeq, 1, &matrix);
        let kruskal = run(Algorithm::KruskalSeq, 1, &matrix);

        let prim_weights: HashSet<u32> = prim.tree.iter().map(|e| e.w).collect();
        let kruskal_weights: HashSet<u32> = kruskal.tree.iter().map(|e| e.w).collect();
        prop_assert_eq!(prim_weights, kruskal_weights);
    }
}

#[test]
fn scenario_s4_distributed_kruskal_on_a_four_peer_cohort() {
    // spec.md S4: an 8-vertex graph split across 4 peers (2 rows each), driving
    // every round of the binary tournament (step = 1 then step = 2).
    let matrix = AdjMatrix::from_edges(
        8,
        &[
            (0, 1, 1),
            (1, 2, 2),
            (2, 3, 3),
            (3, 4, 4),
            (4, 5, 5),
            (5, 6, 6),
            (6, 7, 7),
            (0, 7, 8),
        ],
    )
    .unwrap();
    let sequential = run(Algorithm::KruskalSeq, 1, &matrix);
    let distributed = run(Algorithm::KruskalPar, 4, &matrix);
    assert_eq!(distributed.sum, sequential.sum);
    assert!(is_spanning_tree(&distributed.tree, 8));
}

#[test]
fn scenario_s5_distributed_prim_runs_exactly_n_minus_one_iterations() {
    // spec.md S5: a 5-vertex graph over 2 peers; distributed Prim must run
    // exactly n - 1 = 4 iterations and match the sequential tree's weight.
    let matrix = AdjMatrix::from_edges(5, &[(0, 1, 4), (0, 2, 3), (0, 3, 2), (0, 4, 1)]).unwrap();
    let sequential = run(Algorithm::PrimSeq, 1, &matrix);
    let distributed = run(Algorithm::PrimPar, 2, &matrix);
    assert_eq!(distributed.tree.len(), 4);
    assert_eq!(distributed.sum, sequential.sum);
}

#[test]
fn single_vertex_graph_produces_an_empty_tree_on_every_algorithm() {
    let matrix = AdjMatrix::from_flat(1, vec![0]).unwrap();
    for (algorithm, peers) in [
        (Algorithm::PrimSeq, 1),
        (Algorithm::KruskalSeq, 1),
        (Algorithm::PrimPar, 1),
        (Algorithm::KruskalPar, 3),
    ] {
        let result = run(algorithm, peers, &matrix);
        assert!(result.tree.is_empty(), "{algorithm} should produce no edges");
        assert_eq!(result.sum, 0);
    }
}

#[test]
fn peer_count_exceeding_vertex_count_does_not_panic() {
    let matrix = AdjMatrix::from_edges(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]).unwrap();
    let kruskal = run(Algorithm::KruskalPar, 8, &matrix);
    let prim = run(Algorithm::PrimPar, 8, &matrix);
    assert_eq!(kruskal.sum, 3);
    assert_eq!(prim.sum, 3);
}
