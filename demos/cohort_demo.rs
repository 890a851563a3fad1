//! Builds a small weighted graph, runs every algorithm over an in-process
//! cohort, and prints each tree the way spec.md's external driver does:
//! one `"i j"` line per edge, then a `"Sum : w"` line.

use mst_cohort::messaging::channel::spawn_cohort;
use mst_cohort::{compute_mst, Algorithm, AdjMatrix, MstResult};

fn print_tree(algorithm: Algorithm, result: &MstResult) {
    println!("# {algorithm}");
    for edge in &result.tree {
        println!("{} {}", edge.i, edge.j);
    }
    println!("Sum : {}", result.sum);
}

fn run(algorithm: Algorithm, peers: usize, matrix: &AdjMatrix) {
    let matrix = matrix.clone();
    let results = spawn_cohort(peers, move |cohort| compute_mst(&cohort, &matrix, algorithm))
        .expect("cohort did not complete");
    if let Some(result) = results[0].as_ref().expect("rank 0 failed") {
        print_tree(algorithm, result);
    }
}

fn main() {
    let matrix = AdjMatrix::from_edges(
        6,
        &[
            (0, 1, 4),
            (0, 2, 3),
            (1, 2, 1),
            (1, 3, 2),
            (2, 3, 4),
            (3, 4, 2),
            (4, 5, 6),
            (3, 5, 3),
        ],
    )
    .expect("graph is well formed");

    run(Algorithm::PrimSeq, 1, &matrix);
    run(Algorithm::KruskalSeq, 1, &matrix);
    run(Algorithm::PrimPar, 3, &matrix);
    run(Algorithm::KruskalPar, 3, &matrix);
}
