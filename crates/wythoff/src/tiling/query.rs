//! Read-only adjacency queries over a finished tiling.
//!
//! Every ordering here is deterministic: ties go to the lowest chamber index, so
//! constructions built on these queries are reproducible run to run.

use super::types::{Chamber, ChamberId, Edge, EdgeId, Vertex, VertexId};
use super::Tiling;
use crate::chamber::ChamberSymbol;

impl<S: ChamberSymbol<N>, const N: usize> Tiling<S, N> {
    /// Chambers containing every vertex of `fixed`, in cyclic adjacency order.
    ///
    /// Starts at the lowest-index such chamber; each step crosses one of the
    /// facets whose type is not in `fixed` to the lowest-index unvisited chamber.
    pub fn ring(&self, fixed: &[VertexId]) -> Vec<ChamberId> {
        let Some(pivot) = fixed.first() else {
            return Vec::new();
        };
        let free: Vec<usize> = (0..N)
            .filter(|t| !fixed.iter().any(|v| self.vertex(*v).kind == *t))
            .collect();
        let start = self
            .vertex(*pivot)
            .chambers()
            .iter()
            .copied()
            .filter(|c| fixed.iter().all(|v| self.chamber(*c).contains(*v)))
            .min();
        let Some(start) = start else {
            return Vec::new();
        };
        let mut ring = vec![start];
        let mut cur = start;
        loop {
            let next = free
                .iter()
                .filter_map(|f| self.chamber(cur).neighbor(*f))
                .filter(|c| !ring.contains(c))
                .min();
            match next {
                Some(n) => {
                    ring.push(n);
                    cur = n;
                }
                None => break,
            }
        }
        ring
    }

    /// Facet neighbours of `chamber`, ascending by index.
    pub fn neighbors(&self, chamber: ChamberId) -> Vec<ChamberId> {
        let mut out: Vec<ChamberId> = self
            .chamber(chamber)
            .neighbors
            .iter()
            .flatten()
            .copied()
            .collect();
        out.sort_unstable();
        out
    }

    #[inline]
    pub fn neighbor(&self, chamber: ChamberId, facet: usize) -> Option<ChamberId> {
        self.chamber(chamber).neighbor(facet)
    }

    /// Neighbour across the facet opposite `vertex`'s type.
    pub fn single_next(&self, chamber: ChamberId, vertex: VertexId) -> Option<ChamberId> {
        self.neighbor(chamber, self.vertex(vertex).kind)
    }

    /// First position at which the vertex lists of `a` and `b` differ.
    pub fn unshared_index(&self, a: ChamberId, b: ChamberId) -> Option<usize> {
        let (va, vb) = (&self.chamber(a).vertices, &self.chamber(b).vertices);
        (0..N).find(|&k| va[k] != vb[k])
    }

    /// Chambers around `edge`, alternating across the two facet types off the edge.
    pub fn edge_ring(&self, edge: &Edge) -> Vec<ChamberId> {
        self.ring(&[edge.a, edge.b])
    }

    /// Chambers incident to `vertex`, in discovery order.
    pub fn chambers_of(&self, vertex: VertexId) -> &[ChamberId] {
        self.vertex(vertex).chambers()
    }
}

/// One edge per vertex pair sharing a chamber, grouped by the lower endpoint.
pub(crate) fn collect_edges<S: ChamberSymbol<N>, const N: usize>(
    vertices: &[Vertex<N>],
    chambers: &[Chamber<N>],
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for v in vertices {
        let mut partners: Vec<VertexId> = Vec::new();
        for c in v.chambers() {
            for p in chambers[c.0].vertices {
                if p > v.id && !partners.contains(&p) {
                    partners.push(p);
                }
            }
        }
        for p in partners {
            let kind = S::edge_kind(v.kind, vertices[p.0].kind);
            edges.push(Edge {
                id: EdgeId(edges.len()),
                a: v.id,
                b: p,
                kind,
            });
        }
    }
    edges
}
