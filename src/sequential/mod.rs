//! Sequential reference algorithms: Prim and Kruskal run by a single peer
//! over the whole matrix. These are both real algorithms in their own right
//! (dispatched via [`Algorithm::PrimSeq`] / [`Algorithm::KruskalSeq`]) and the
//! correctness oracles / local-work subroutines the distributed algorithms
//! build on.

pub mod kruskal;
pub mod prim;

pub use kruskal::kruskal_mst;
pub use prim::prim_mst;

use std::fmt;
use std::str::FromStr;

use crate::core::error::MstError;

/// One of the four interchangeable MST algorithms this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    PrimSeq,
    KruskalSeq,
    PrimPar,
    KruskalPar,
}

impl Algorithm {
    /// Whether this algorithm runs on exactly one peer.
    pub fn is_sequential(self) -> bool {
        matches!(self, Algorithm::PrimSeq | Algorithm::KruskalSeq)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::PrimSeq => "prim-seq",
            Algorithm::KruskalSeq => "kruskal-seq",
            Algorithm::PrimPar => "prim-par",
            Algorithm::KruskalPar => "kruskal-par",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Algorithm {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prim-seq" => Ok(Algorithm::PrimSeq),
            "kruskal-seq" => Ok(Algorithm::KruskalSeq),
            "prim-par" => Ok(Algorithm::PrimPar),
            "kruskal-par" => Ok(Algorithm::KruskalPar),
            other => Err(MstError::unknown_algorithm(other)),
        }
    }
}
