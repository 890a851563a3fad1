/*!
# Wire Format

Distributed Kruskal ships edge lists between peers as two fixed-shape
messages to the same tag: a 32-bit count `n`, then `3n` 32-bit integers
`(i0, j0, w0, i1, j1, w1, ...)`. spec.md's design notes call for committing to
a fixed-width little-endian encoding rather than assuming peers share an
integer representation; [`encode`]/[`decode`] do exactly that by hand, since
the exact on-wire shape is part of the specification rather than an
incidental serialization of a Rust struct (so this crate does not reach for
`serde`/`bincode` here — see `DESIGN.md`).
*/

use crate::core::edge::Edge;
use crate::core::error::{MstError, Result};

/// Encodes `edges` as `count` followed by `3 * count` little-endian `u32`s.
pub fn encode(edges: &[Edge]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + edges.len() * 12);
    out.extend_from_slice(&(edges.len() as u32).to_le_bytes());
    for edge in edges {
        out.extend_from_slice(&edge.i.to_le_bytes());
        out.extend_from_slice(&edge.j.to_le_bytes());
        out.extend_from_slice(&edge.w.to_le_bytes());
    }
    out
}

/// Decodes the format `encode` produces. Fails if the buffer is truncated or
/// carries trailing bytes past the declared count.
pub fn decode(bytes: &[u8]) -> Result<Vec<Edge>> {
    if bytes.len() < 4 {
        return Err(MstError::messaging("edge list buffer shorter than a count header"));
    }
    let count = u32::from_le_bytes(bytes[0..4].try_into().unwrap()) as usize;
    let expected_len = 4 + count * 12;
    if bytes.len() != expected_len {
        return Err(MstError::messaging(format!(
            "edge list buffer has {} bytes, expected {expected_len} for count {count}",
            bytes.len()
        )));
    }
    let mut edges = Vec::with_capacity(count);
    for chunk in bytes[4..].chunks_exact(12) {
        let i = u32::from_le_bytes(chunk[0..4].try_into().unwrap());
        let j = u32::from_le_bytes(chunk[4..8].try_into().unwrap());
        let w = u32::from_le_bytes(chunk[8..12].try_into().unwrap());
        edges.push(Edge::new(i, j, w));
    }
    Ok(edges)
}
