//! Minimum spanning tree computation over a dense, symmetric adjacency
//! matrix: sequential Prim and Kruskal, and distributed variants of both
//! that run as a message-passing cohort of peers with no shared memory.
//!
//! [`compute_mst`] is the single entry point: it runs the requested
//! [`Algorithm`] against an [`AdjMatrix`] over a [`Cohort`], and is the same
//! function every peer calls regardless of its rank.
//!
//! ```
//! use mst_cohort::{compute_mst, Algorithm, AdjMatrix};
//! use mst_cohort::messaging::channel::spawn_cohort;
//!
//! let matrix = AdjMatrix::from_edges(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]).unwrap();
//! let results = spawn_cohort(1, move |cohort| {
//!     compute_mst(&cohort, &matrix, Algorithm::KruskalSeq)
//! })
//! .unwrap();
//! let mst = results[0].as_ref().unwrap().clone().unwrap();
//! assert_eq!(mst.sum, 3);
//! ```

pub mod core;
pub mod distributed;
pub mod messaging;
mod orchestrator;
pub mod sequential;

pub use core::{AdjMatrix, Edge, MstError, RowBlock};
pub use messaging::Cohort;
pub use orchestrator::{compute_mst, MstResult};
pub use sequential::Algorithm;

/// Emits a `tracing::debug!` event when the `logging` feature is enabled,
/// compiles to nothing otherwise. Callers never need their own `#[cfg]`.
macro_rules! cohort_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::debug!($($arg)*);
    };
}
pub(crate) use cohort_debug;
