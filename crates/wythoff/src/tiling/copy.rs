//! Copy spanning tree: how to obtain any chamber's image of a point from an
//! already computed one with a single reflection.
//!
//! Chamber `i > 0` copies from its lowest-index neighbour `j < i`; such a
//! neighbour always exists because chamber `i` was created by mirroring an
//! earlier one. Evaluating steps in index order therefore only ever reads values
//! already written.

use super::types::{Chamber, ChamberId, CopyStep, Vertex};
use super::Tiling;
use crate::chamber::ChamberSymbol;
use crate::sphere::{mirror_normal, Point, SphereCoord};

/// Entry 0 is the identity (zero normal); entry `i` reflects across the facet
/// shared with `source`.
pub(crate) fn plan<const N: usize>(
    vertices: &[Vertex<N>],
    chambers: &[Chamber<N>],
) -> Vec<CopyStep<N>> {
    chambers
        .iter()
        .map(|ch| {
            let earlier = ch
                .neighbors
                .iter()
                .enumerate()
                .filter_map(|(facet, n)| n.filter(|n| *n < ch.id).map(|n| (n, facet)))
                .min();
            match earlier {
                Some((source, facet)) => {
                    let points = chambers[source.0].vertices.map(|v| vertices[v.0].point);
                    CopyStep {
                        source,
                        facet,
                        normal: mirror_normal(&points, facet),
                    }
                }
                None => CopyStep {
                    source: ChamberId(0),
                    facet: 0,
                    normal: Point::<N>::zeros(),
                },
            }
        })
        .collect()
}

impl<S: ChamberSymbol<N>, const N: usize> Tiling<S, N> {
    pub fn copy_plan(&self) -> &[CopyStep<N>] {
        &self.copy_plan
    }

    /// Images of `base` (given in the fundamental chamber) in every chamber.
    pub fn propagate<V: SphereCoord<N>>(&self, base: V) -> Vec<V> {
        let mut out = Vec::with_capacity(self.copy_plan.len());
        self.propagate_into(base, &mut out);
        out
    }

    /// As [`Tiling::propagate`], reusing `out`'s allocation.
    pub fn propagate_into<V: SphereCoord<N>>(&self, base: V, out: &mut Vec<V>) {
        out.clear();
        for (i, step) in self.copy_plan.iter().enumerate() {
            let v = if i == 0 {
                base
            } else {
                out[step.source.0].reflect(&step.normal)
            };
            out.push(v);
        }
    }
}
