/*!
# Top-Level Dispatch

[`compute_mst`] is the one entry point every caller uses regardless of which
of the four algorithms it runs: it validates the requested algorithm against
the cohort's peer count, dispatches to the matching sequential or distributed
implementation, and wraps the result uniformly.
*/

use crate::core::edge::Edge;
use crate::core::error::{MstError, Result};
use crate::core::matrix::AdjMatrix;
use crate::distributed::{distributed_kruskal_mst, distributed_prim_mst};
use crate::messaging::Cohort;
use crate::sequential::{kruskal_mst, prim_mst, Algorithm};

/// The spanning tree and its total weight, as computed by one cohort run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult {
    pub tree: Vec<Edge>,
    pub sum: u64,
}

/// Runs `algorithm` against `matrix` on this peer's side of `cohort`.
///
/// `prim-seq` and `kruskal-seq` require a cohort of exactly one peer and
/// return `Some` for it; `prim-par` and `kruskal-par` run across the whole
/// cohort and return `Some` only on rank 0, `None` elsewhere, matching the
/// distributed algorithms' own contract.
pub fn compute_mst(
    cohort: &dyn Cohort,
    matrix: &AdjMatrix,
    algorithm: Algorithm,
) -> Result<Option<MstResult>> {
    if algorithm.is_sequential() && cohort.size() != 1 {
        return Err(MstError::PeerCountMismatch {
            algorithm,
            expected: 1,
            got: cohort.size(),
        });
    }

    crate::cohort_debug!(
        rank = cohort.rank(),
        peers = cohort.size(),
        %algorithm,
        n = matrix.n(),
        "dispatching mst computation"
    );

    match algorithm {
        Algorithm::PrimSeq => {
            let (tree, sum) = prim_mst(matrix)?;
            Ok(Some(MstResult { tree, sum }))
        }
        Algorithm::KruskalSeq => {
            let (tree, sum) = kruskal_mst(matrix)?;
            Ok(Some(MstResult { tree, sum }))
        }
        Algorithm::PrimPar => Ok(distributed_prim_mst(cohort, matrix)?.map(|(tree, sum)| MstResult { tree, sum })),
        Algorithm::KruskalPar => {
            Ok(distributed_kruskal_mst(cohort, matrix)?.map(|(tree, sum)| MstResult { tree, sum }))
        }
    }
}
