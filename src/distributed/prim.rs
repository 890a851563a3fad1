/*!
# Distributed Prim

Every peer keeps a border table over its own local vertices (the cheapest
known tree-side neighbour for each unvisited local vertex) plus a replicated
copy of the global visited set. Each of the `n - 1` iterations is three
barriers: every peer proposes its local-minimum crossing edge, rank 0 gathers
all of them and picks the global minimum, then broadcasts the winning vertex
so every peer can mark it visited and relax its border.
*/

use crate::core::edge::Edge;
use crate::core::error::{MstError, Result};
use crate::core::matrix::{AdjMatrix, RowBlock};
use crate::messaging::{Cohort, PrimCandidate};

/// Computes the MST of `matrix` as a cohort of `cohort.size()` peers, seeded
/// at vertex 0.
///
/// Returns `Some((tree, sum))` on rank 0, `None` on every other rank. Returns
/// `Err(MstError::NoCandidateEdge { .. })` if some iteration finds no
/// unvisited vertex reachable from the current tree (the input graph is
/// disconnected); every peer's call returns an error in that case, since
/// rank 0 collectively aborts the cohort before returning.
pub fn distributed_prim_mst(cohort: &dyn Cohort, matrix: &AdjMatrix) -> Result<Option<(Vec<Edge>, u64)>> {
    let n = matrix.n();
    if n == 0 {
        return Err(MstError::invalid_graph("cannot compute an MST of an empty graph"));
    }
    let peers = cohort.size();
    let rank = cohort.rank();
    let my_rows = RowBlock::for_rank(rank, peers, n);

    let mut visited = vec![false; n];
    visited[0] = true;

    let mut border: Vec<Option<(u32, u32)>> = vec![None; my_rows.len()];
    for y in my_rows.iter() {
        if y == 0 {
            continue;
        }
        let w = matrix.weight(y, 0);
        if w != 0 {
            border[(y - my_rows.start) as usize] = Some((0, w));
        }
    }

    let mut tree = Vec::with_capacity(n - 1);
    let mut sum = 0u64;

    for iteration in 0..n - 1 {
        crate::cohort_debug!(rank, iteration, "starting distributed prim iteration");
        let local_candidate = local_min_candidate(&border, my_rows, &visited);
        let gathered = cohort.gather_candidates(local_candidate)?;

        let winner_vertex = if rank == 0 {
            let all = gathered.ok_or_else(|| {
                MstError::messaging("rank 0 did not receive the gathered candidate vector")
            })?;
            let winner = all
                .iter()
                .filter_map(|c| c.as_edge().map(|edge| (edge, c.owned_vertex.unwrap())))
                .min_by_key(|(edge, _)| *edge);

            let Some((winner_edge, winner_vertex)) = winner else {
                cohort.abort("distributed Prim found no candidate edge; graph is disconnected");
                return Err(MstError::NoCandidateEdge { iteration });
            };

            tree.push(winner_edge);
            sum += u64::from(winner_edge.w);
            cohort.broadcast_vertex(Some(winner_vertex))?
        } else {
            cohort.broadcast_vertex(None)?
        };

        visited[winner_vertex as usize] = true;
        relax_border(matrix, my_rows, &visited, winner_vertex, &mut border);
    }

    if rank == 0 {
        Ok(Some((tree, sum)))
    } else {
        Ok(None)
    }
}

/// The minimum-order crossing edge among this peer's unvisited local
/// vertices, or the sentinel [`PrimCandidate::NONE`] if it has none.
fn local_min_candidate(
    border: &[Option<(u32, u32)>],
    my_rows: RowBlock,
    visited: &[bool],
) -> PrimCandidate {
    let mut best: Option<PrimCandidate> = None;
    for y in my_rows.iter() {
        if visited[y as usize] {
            continue;
        }
        let Some((via, weight)) = border[(y - my_rows.start) as usize] else {
            continue;
        };
        let candidate = PrimCandidate {
            owned_vertex: Some(y),
            via,
            weight,
        };
        let better = match &best {
            None => true,
            Some(current) => candidate.as_edge().unwrap() < current.as_edge().unwrap(),
        };
        if better {
            best = Some(candidate);
        }
    }
    best.unwrap_or(PrimCandidate::NONE)
}

/// After `winner` joins the tree, updates every local unvisited vertex's
/// border entry if the edge to `winner` beats its current best.
fn relax_border(
    matrix: &AdjMatrix,
    my_rows: RowBlock,
    visited: &[bool],
    winner: u32,
    border: &mut [Option<(u32, u32)>],
) {
    for y in my_rows.iter() {
        if visited[y as usize] {
            continue;
        }
        let w = matrix.weight(y, winner);
        if w == 0 {
            continue;
        }
        let idx = (y - my_rows.start) as usize;
        let candidate_edge = Edge::new(winner, y, w);
        let better = match border[idx] {
            None => true,
            Some((via, cur_w)) => candidate_edge < Edge::new(via, y, cur_w),
        };
        if better {
            border[idx] = Some((winner, w));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_min_candidate_skips_visited_and_empty_borders() {
        let my_rows = RowBlock { start: 0, end: 3 };
        let visited = vec![true, false, false];
        let border = vec![Some((9, 5)), None, Some((9, 2))];
        let candidate = local_min_candidate(&border, my_rows, &visited);
        assert_eq!(candidate.owned_vertex, Some(2));
        assert_eq!(candidate.weight, 2);
    }

    #[test]
    fn local_min_candidate_is_sentinel_when_nothing_available() {
        let my_rows = RowBlock { start: 0, end: 2 };
        let visited = vec![true, true];
        let border = vec![Some((0, 1)), Some((0, 1))];
        assert_eq!(
            local_min_candidate(&border, my_rows, &visited),
            PrimCandidate::NONE
        );
    }
}
