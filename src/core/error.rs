/*!
# Unified Error Type

A single error enum for every failure mode this crate can produce, consolidated
for ergonomic `?`-based propagation and pattern matching, the way a unified
error type is usually built in this corpus: a flat enum of `String`-carrying
variants plus a hand-written [`Display`](std::fmt::Display) impl, rather than
deriving one with a macro.
*/

use std::error::Error;
use std::fmt;

use crate::sequential::Algorithm;

/// Unified error type for all `mst-cohort` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MstError {
    /// The algorithm name did not match one of the four known spellings.
    UnknownAlgorithm(String),

    /// A sequential algorithm (`prim-seq`, `kruskal-seq`) was asked to run on a
    /// cohort with more or fewer than one peer.
    PeerCountMismatch {
        algorithm: Algorithm,
        expected: usize,
        got: usize,
    },

    /// The adjacency matrix failed validation (not square, asymmetric, nonzero
    /// diagonal, or a negative-looking weight slipped through its integer
    /// encoding).
    InvalidGraph(String),

    /// Distributed Prim found no unvisited vertex reachable from the current
    /// tree during a global iteration; the input graph is disconnected.
    NoCandidateEdge { iteration: usize },

    /// The message-passing substrate failed: a channel closed early, a peer
    /// panicked, or a collective abort was issued by another peer.
    Messaging(String),
}

impl MstError {
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        MstError::UnknownAlgorithm(name.into())
    }

    pub fn invalid_graph(message: impl Into<String>) -> Self {
        MstError::InvalidGraph(message.into())
    }

    pub fn messaging(message: impl Into<String>) -> Self {
        MstError::Messaging(message.into())
    }
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstError::UnknownAlgorithm(name) => write!(f, "unknown algorithm: {name}"),
            MstError::PeerCountMismatch {
                algorithm,
                expected,
                got,
            } => write!(
                f,
                "{algorithm} requires exactly {expected} peer(s), got {got}"
            ),
            MstError::InvalidGraph(msg) => write!(f, "invalid graph: {msg}"),
            MstError::NoCandidateEdge { iteration } => write!(
                f,
                "no candidate edge found at iteration {iteration}; graph is disconnected"
            ),
            MstError::Messaging(msg) => write!(f, "messaging substrate error: {msg}"),
        }
    }
}

impl Error for MstError {}

pub type Result<T> = std::result::Result<T, MstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_algorithm() {
        let err = MstError::unknown_algorithm("bogus-algo");
        assert_eq!(format!("{err}"), "unknown algorithm: bogus-algo");
    }

    #[test]
    fn display_peer_count_mismatch() {
        let err = MstError::PeerCountMismatch {
            algorithm: Algorithm::PrimSeq,
            expected: 1,
            got: 4,
        };
        assert_eq!(
            format!("{err}"),
            "prim-seq requires exactly 1 peer(s), got 4"
        );
    }
}
