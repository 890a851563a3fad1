/*!
# Distributed Kruskal

A binary tournament of local spanning forests. Every peer first reduces its
own row block to a local MST forest (sequential Kruskal restricted to edges
with both endpoints inside the block). Then, in `ceil(log2(P))` rounds of
doubling `step_size`, each block of `2 * step_size` peers merges its two
halves: the low half's owner receives the high half's aggregate forest plus
one bipartite cross-edge forest from every peer in the high half, merges them
all with its own forest via [`kruskal_select`], and becomes the owner of the
merged block for the next round.

Only the peer whose rank is a multiple of `step_size` within its half is ever
an active receiver or the aggregate-forest sender — every other peer in a
receiver half holds a stale, never-revisited forest after its last active
round, a direct consequence of spec.md's round structure (a rank that isn't a
power-of-a-doubling multiple of two never becomes a block owner again).
*/

use crate::core::edge::Edge;
use crate::core::error::{MstError, Result};
use crate::core::matrix::{AdjMatrix, RowBlock};
use crate::core::union_find::kruskal_select;
use crate::messaging::Cohort;

/// Computes the MST of `matrix` as a cohort of `cohort.size()` peers, each
/// owning the row block [`RowBlock::for_rank`] assigns it.
///
/// Returns `Some((tree, sum))` on rank 0, `None` on every other rank, per
/// spec.md's "only rank 0 emits the final tree."
pub fn distributed_kruskal_mst(cohort: &dyn Cohort, matrix: &AdjMatrix) -> Result<Option<(Vec<Edge>, u64)>> {
    let n = matrix.n();
    if n == 0 {
        return Err(MstError::invalid_graph("cannot compute an MST of an empty graph"));
    }
    let peers = cohort.size();
    let rank = cohort.rank();
    let row_block_size = n.div_ceil(peers);

    let my_rows = RowBlock::for_rank(rank, peers, n);
    let mut local_edges = matrix.local_edges(my_rows);
    local_edges.sort_unstable();
    let mut forest = kruskal_select(&local_edges, n);
    forest.sort_unstable();
    crate::cohort_debug!(rank, forest_size = forest.len(), "local forest reduced");

    let mut step = 1usize;
    while step * row_block_size < n {
        let block_size = 2 * step;
        let block_start = (rank / block_size) * block_size;
        let sender_half_start = block_start + step;
        let sender_half_end = (block_start + block_size).min(peers);

        if sender_half_start < peers {
            if rank == block_start {
                forest = receive_and_merge(cohort, n, step, sender_half_start, sender_half_end, forest)?;
            } else if rank >= sender_half_start && rank < sender_half_end {
                send_as_sender(cohort, matrix, n, peers, step, block_start, sender_half_start, rank, &forest)?;
            }
        }

        step *= 2;
    }

    if rank == 0 {
        let sum = forest.iter().map(|e| u64::from(e.w)).sum();
        crate::cohort_debug!(tree_size = forest.len(), sum, "distributed kruskal converged");
        Ok(Some((forest, sum)))
    } else {
        Ok(None)
    }
}

/// Rank `sender_half_start` sends the block's aggregate forest first (tag
/// slot 0); every peer in the sender half, `sender_half_start` included, then
/// sends its own bipartite forest against the receiver block's columns (tag
/// slots `1..`). The aggregate must go out before the bipartite forest: both
/// travel the single FIFO channel from `sender_half_start` to `block_start`,
/// and the receiver reads slot 0 before slot 1.
#[allow(clippy::too_many_arguments)]
fn send_as_sender(
    cohort: &dyn Cohort,
    matrix: &AdjMatrix,
    n: usize,
    peers: usize,
    step: usize,
    block_start: usize,
    sender_half_start: usize,
    rank: usize,
    forest: &[Edge],
) -> Result<()> {
    if rank == sender_half_start {
        cohort.send_edges(block_start, tag(step, 0), forest)?;
    }

    let my_rows = RowBlock::for_rank(rank, peers, n);
    let receiver_cols = RowBlock {
        start: RowBlock::for_rank(block_start, peers, n).start,
        end: RowBlock::for_rank(sender_half_start, peers, n).start,
    };
    let mut bipartite = matrix.bipartite_edges(my_rows, receiver_cols);
    bipartite.sort_unstable();
    let bipartite_forest = kruskal_select(&bipartite, n);

    let slot = (rank - sender_half_start) as u32 + 1;
    cohort.send_edges(block_start, tag(step, slot), &bipartite_forest)?;
    Ok(())
}

/// The block owner receives the aggregate forest and every bipartite forest
/// from its sender half, merges everything (including its own current
/// forest) via repeated two-way sorted merges, and runs `kruskal_select` over
/// the combined sorted list to produce the new aggregate forest.
fn receive_and_merge(
    cohort: &dyn Cohort,
    n: usize,
    step: usize,
    sender_half_start: usize,
    sender_half_end: usize,
    own_forest: Vec<Edge>,
) -> Result<Vec<Edge>> {
    let mut combined = own_forest;
    let aggregate = cohort.recv_edges(sender_half_start, tag(step, 0))?;
    combined = merge_sorted(&combined, &aggregate);

    for (slot, sender) in (sender_half_start..sender_half_end).enumerate() {
        let bipartite = cohort.recv_edges(sender, tag(step, slot as u32 + 1))?;
        combined = merge_sorted(&combined, &bipartite);
    }

    let mut merged = kruskal_select(&combined, n);
    merged.sort_unstable();
    Ok(merged)
}

/// Merges two already-sorted edge lists into one sorted list.
fn merge_sorted(a: &[Edge], b: &[Edge]) -> Vec<Edge> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Packs a round's `step_size` and a message slot into one message tag.
fn tag(step: usize, slot: u32) -> u32 {
    (step as u32) << 16 | slot
}
