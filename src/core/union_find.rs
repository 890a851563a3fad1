/*!
# Union-Find & the Kruskal Extraction Kernel

A disjoint-set forest with path compression and union-by-rank, plus
[`kruskal_select`], the shared "scan a sorted edge list and keep what doesn't
close a cycle" routine used by sequential Kruskal and by every reduction step
of distributed Kruskal.
*/

use crate::core::edge::Edge;

/// Disjoint-set forest over vertex ids `0..n`.
///
/// `find` uses two-pass iterative path compression (walk to the root, then
/// walk again repointing every visited node at it) rather than the naive
/// recursive version, so a pathological union chain cannot grow the call
/// stack.
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Creates `n` singleton sets, each its own root with rank 1.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n as u32).collect(),
            rank: vec![1; n],
        }
    }

    /// Returns the representative of the set containing `x`.
    pub fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = x;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`. Returns `true` if they were
    /// distinct sets (and are now merged), `false` if they already shared a
    /// root. Links the lower-rank root under the higher-rank root; ranks only
    /// increase on a tie.
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (lo, hi) = if self.rank[ra as usize] < self.rank[rb as usize] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[lo as usize] = hi;
        if self.rank[ra as usize] == self.rank[rb as usize] {
            self.rank[hi as usize] += 1;
        }
        true
    }
}

/// Scans `sorted_edges` (which must already be in canonical order) and admits
/// an edge iff its endpoints are in distinct components, stopping once `n-1`
/// edges have been admitted or the list is exhausted.
///
/// This is the one kernel both sequential Kruskal and every round of
/// distributed Kruskal's tournament reduction call: a local forest, a
/// bipartite cross-edge forest, and the final global MST are all "run
/// `kruskal_select` over the right sorted edge list."
pub fn kruskal_select(sorted_edges: &[Edge], n: usize) -> Vec<Edge> {
    let mut uf = UnionFind::new(n);
    let mut accepted = Vec::with_capacity(n.saturating_sub(1));
    for &edge in sorted_edges {
        if accepted.len() == n.saturating_sub(1) {
            break;
        }
        if uf.union(edge.i, edge.j) {
            accepted.push(edge);
        }
    }
    accepted
}
