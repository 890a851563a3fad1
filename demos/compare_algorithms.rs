//! Runs all four algorithms over the same random graph and checks they agree
//! on the total tree weight, the way an external caller would sanity-check a
//! new distributed algorithm against the sequential oracle.

use mst_cohort::messaging::channel::spawn_cohort;
use mst_cohort::{compute_mst, Algorithm, AdjMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_connected_matrix(n: usize, seed: u64) -> AdjMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for v in 1..n {
        let u = rng.random_range(0..v);
        edges.push((u as u32, v as u32, rng.random_range(1..100)));
    }
    for _ in 0..n * 2 {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i != j {
            let (a, b) = (i.min(j) as u32, i.max(j) as u32);
            edges.push((a, b, rng.random_range(1..100)));
        }
    }
    AdjMatrix::from_edges(n, &edges).expect("random construction is always valid")
}

fn main() {
    let matrix = random_connected_matrix(64, 7);

    let runs: Vec<(Algorithm, usize)> = vec![
        (Algorithm::PrimSeq, 1),
        (Algorithm::KruskalSeq, 1),
        (Algorithm::PrimPar, 4),
        (Algorithm::KruskalPar, 4),
    ];

    let mut sums = Vec::new();
    for (algorithm, peers) in runs {
        let matrix = matrix.clone();
        let results = spawn_cohort(peers, move |cohort| compute_mst(&cohort, &matrix, algorithm))
            .expect("cohort did not complete");
        let sum = results[0]
            .as_ref()
            .expect("rank 0 failed")
            .as_ref()
            .expect("rank 0 always produces a tree")
            .sum;
        println!("{algorithm}: sum = {sum}");
        sums.push(sum);
    }

    assert!(
        sums.windows(2).all(|pair| pair[0] == pair[1]),
        "all four algorithms must agree on the MST weight: {sums:?}"
    );
    println!("all algorithms agree: sum = {}", sums[0]);
}
