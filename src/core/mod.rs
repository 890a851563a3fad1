//! Foundational data types shared by the sequential and distributed algorithms:
//! the canonical edge representation, the disjoint-set forest, the edge heap,
//! the dense adjacency matrix, the wire format for edge lists, and the unified
//! error type.

pub mod edge;
pub mod error;
pub mod heap;
pub mod matrix;
pub mod union_find;
pub mod wire;

pub use edge::Edge;
pub use error::MstError;
pub use heap::EdgeHeap;
pub use matrix::{AdjMatrix, RowBlock};
pub use union_find::{UnionFind, kruskal_select};
