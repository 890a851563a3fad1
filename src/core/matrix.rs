/*!
# Dense Adjacency Matrix & Row-Block Partition

`AdjMatrix` is the `N x N` row-major, symmetric, zero-diagonal weight matrix
every peer replicates in full (spec.md's "not designed to stream" limitation:
scalability here is bounded by memory, not by the algorithm). `RowBlock` is
the row partition every distributed algorithm uses to assign vertex ownership
to peers.
*/

use rayon::prelude::*;

use crate::core::edge::Edge;
use crate::core::error::{MstError, Result};

/// An `N x N` symmetric, non-negative-integer, zero-diagonal weight matrix.
/// `weight(i, j) == 0` means "no edge between `i` and `j`".
#[derive(Debug, Clone)]
pub struct AdjMatrix {
    n: usize,
    weights: Vec<u32>,
}

impl AdjMatrix {
    /// Builds a matrix from a flat, row-major `n * n` buffer, validating the
    /// spec's invariants: square, symmetric, zero diagonal. Weights are
    /// unsigned, so "non-negative" is a type-level guarantee rather than a
    /// runtime check.
    pub fn from_flat(n: usize, weights: Vec<u32>) -> Result<Self> {
        if weights.len() != n * n {
            return Err(MstError::invalid_graph(format!(
                "expected {} entries for n={n}, got {}",
                n * n,
                weights.len()
            )));
        }
        for i in 0..n {
            if weights[i * n + i] != 0 {
                return Err(MstError::invalid_graph(format!(
                    "diagonal entry ({i}, {i}) is non-zero"
                )));
            }
            for j in (i + 1)..n {
                if weights[i * n + j] != weights[j * n + i] {
                    return Err(MstError::invalid_graph(format!(
                        "matrix is not symmetric at ({i}, {j})"
                    )));
                }
            }
        }
        Ok(AdjMatrix { n, weights })
    }

    /// Builds a matrix of size `n` from a sparse edge list, useful for tests
    /// and demos. Duplicate edges overwrite with the last weight seen.
    pub fn from_edges(n: usize, edges: &[(u32, u32, u32)]) -> Result<Self> {
        let mut weights = vec![0u32; n * n];
        for &(i, j, w) in edges {
            if i as usize >= n || j as usize >= n {
                return Err(MstError::invalid_graph(format!(
                    "edge ({i}, {j}) is out of range for n={n}"
                )));
            }
            if i == j {
                return Err(MstError::invalid_graph(format!("self-loop at {i}")));
            }
            weights[i as usize * n + j as usize] = w;
            weights[j as usize * n + i as usize] = w;
        }
        AdjMatrix::from_flat(n, weights)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// The weight between `i` and `j`, or `0` if there is no edge.
    pub fn weight(&self, i: u32, j: u32) -> u32 {
        self.weights[i as usize * self.n + j as usize]
    }

    /// `M`: the exact count of non-zero entries in the upper triangle.
    pub fn edge_count(&self) -> usize {
        (0..self.n)
            .map(|i| ((i + 1)..self.n).filter(|&j| self.weight(i as u32, j as u32) != 0).count())
            .sum()
    }

    /// All edges of the graph (upper-triangular non-zero entries), in
    /// arbitrary order. Sequential Kruskal sorts this before extraction.
    /// Row scanning is independent per row, so it is parallelized with
    /// `rayon` the same way the teacher's `boruvka_mst` parallelizes its
    /// per-component candidate scan.
    pub fn edges(&self) -> Vec<Edge> {
        (0..self.n)
            .into_par_iter()
            .flat_map(|i| {
                ((i + 1)..self.n)
                    .filter_map(|j| {
                        let w = self.weight(i as u32, j as u32);
                        (w != 0).then(|| Edge::new(i as u32, j as u32, w))
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Edges with both endpoints inside `rows` (the submatrix a single peer
    /// owns), in arbitrary order.
    pub fn local_edges(&self, rows: RowBlock) -> Vec<Edge> {
        (rows.start..rows.end)
            .into_par_iter()
            .flat_map(|i| {
                ((i + 1)..rows.end)
                    .filter_map(|j| {
                        let w = self.weight(i as u32, j as u32);
                        (w != 0).then(|| Edge::new(i as u32, j as u32, w))
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Edges crossing between `rows` (owned locally) and `cols` (a disjoint
    /// remote range): the bipartite cut distributed Kruskal merges two
    /// sub-MSTs across.
    pub fn bipartite_edges(&self, rows: RowBlock, cols: RowBlock) -> Vec<Edge> {
        rows.iter()
            .flat_map(|i| {
                cols.iter().filter_map(move |j| {
                    let w = self.weight(i, j);
                    (w != 0).then(|| Edge::new(i, j, w))
                })
            })
            .collect()
    }
}

/// A contiguous, half-open range of vertex ids `[start, end)` owned by one
/// peer. `RowBlock::for_rank` is the partition every distributed algorithm
/// uses: peer `r` owns `R = ceil(N / P)` rows starting at `r * R`, clipped to
/// `N` (the last peer, or any peer once `P > N`, may own fewer than `R` rows
/// or none at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBlock {
    pub start: u32,
    pub end: u32,
}

impl RowBlock {
    /// The row-block owned by peer `rank` out of `peers` peers, over a graph
    /// of `n` vertices.
    pub fn for_rank(rank: usize, peers: usize, n: usize) -> Self {
        let r = n.div_ceil(peers);
        let start = (rank * r).min(n);
        let end = ((rank + 1) * r).min(n);
        RowBlock {
            start: start as u32,
            end: end as u32,
        }
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, v: u32) -> bool {
        v >= self.start && v < self.end
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + Clone {
        self.start..self.end
    }
}
