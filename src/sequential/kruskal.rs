/*!
# Sequential Kruskal

Materializes every edge from the upper-triangular part of the matrix, sorts
by the canonical order, then hands the sorted list to
[`kruskal_select`](crate::core::union_find::kruskal_select). This is both a
real algorithm (`kruskal-seq`) and the subroutine every distributed Kruskal
reduction round calls to turn a sorted candidate list into a forest.
*/

use crate::core::edge::Edge;
use crate::core::error::{MstError, Result};
use crate::core::matrix::AdjMatrix;
use crate::core::union_find::kruskal_select;

/// Computes the MST of `matrix` via Kruskal's algorithm.
///
/// Returns the tree in weight-increasing, then lexicographic, admission
/// order — sequential Kruskal's defining property among the four algorithms,
/// since all of them must agree on the resulting edge *multiset* but only
/// Kruskal's admission order is guaranteed to equal the fully sorted list.
///
/// For an `n`-vertex graph, returns `Err` if fewer than `n` vertices exist in
/// the matrix (an `n = 0` matrix has no tree to report).
pub fn kruskal_mst(matrix: &AdjMatrix) -> Result<(Vec<Edge>, u64)> {
    if matrix.n() == 0 {
        return Err(MstError::invalid_graph("cannot compute an MST of an empty graph"));
    }
    let mut edges = matrix.edges();
    edges.sort_unstable();
    let tree = kruskal_select(&edges, matrix.n());
    let sum = tree.iter().map(|e| u64::from(e.w)).sum();
    Ok((tree, sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vertex_has_no_output() {
        let matrix = AdjMatrix::from_flat(1, vec![0]).unwrap();
        let (tree, sum) = kruskal_mst(&matrix).unwrap();
        assert!(tree.is_empty());
        assert_eq!(sum, 0);
    }

    #[test]
    fn empty_graph_is_an_error() {
        let matrix = AdjMatrix::from_flat(0, vec![]).unwrap();
        assert!(kruskal_mst(&matrix).is_err());
    }

    #[test]
    fn triangle_scenario_s1() {
        let matrix = AdjMatrix::from_edges(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]).unwrap();
        let (tree, sum) = kruskal_mst(&matrix).unwrap();
        assert_eq!(
            tree.iter().map(|e| (e.i, e.j)).collect::<Vec<_>>(),
            vec![(0, 1), (1, 2)]
        );
        assert_eq!(sum, 3);
    }

    #[test]
    fn tie_break_scenario_s2() {
        let matrix =
            AdjMatrix::from_edges(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 2), (2, 3, 2)]).unwrap();
        let (tree, sum) = kruskal_mst(&matrix).unwrap();
        assert_eq!(
            tree.iter().map(|e| (e.i, e.j)).collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (1, 3)]
        );
        assert_eq!(sum, 4);
    }

    #[test]
    fn star_scenario_s3_multiset_matches() {
        let matrix =
            AdjMatrix::from_edges(5, &[(0, 1, 4), (0, 2, 3), (0, 3, 2), (0, 4, 1)]).unwrap();
        let (tree, sum) = kruskal_mst(&matrix).unwrap();
        let mut pairs: Vec<(u32, u32)> = tree.iter().map(|e| (e.i, e.j)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(sum, 10);
    }

    #[test]
    fn two_vertex_single_edge() {
        let matrix = AdjMatrix::from_edges(2, &[(0, 1, 7)]).unwrap();
        let (tree, sum) = kruskal_mst(&matrix).unwrap();
        assert_eq!(tree, vec![Edge::new(0, 1, 7)]);
        assert_eq!(sum, 7);
    }
}
