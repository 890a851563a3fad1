/*!
# Distributed Algorithms

Both algorithms here run as the body of a [`crate::messaging::Cohort`] peer:
every peer calls the same function with its own `Cohort` handle and gets back
`Some(result)` on rank 0, `None` everywhere else.
*/

pub mod kruskal;
pub mod prim;

pub use kruskal::distributed_kruskal_mst;
pub use prim::distributed_prim_mst;
