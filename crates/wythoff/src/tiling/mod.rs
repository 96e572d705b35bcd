//! Reflection tilings of S² and S³ by a symbol's fundamental chamber.
//!
//! Purpose
//! - Generate every image of the fundamental chamber under the reflection group,
//!   together with the tiling vertices, facet adjacency, edges (S³) and the copy
//!   spanning tree used to place generating points.
//!
//! Why this design
//! - Generic over `ChamberSymbol<N>` so one breadth-first generator serves both
//!   the triangle and tetrahedron cases; `Tiling3`/`Tiling4` name the two uses.
//! - A finished `Tiling` is immutable and shared (`Arc`) by any number of
//!   polytopes; all later queries are total.
//!
//! Layout
//! - `types.rs` (ids and records), `build.rs` (generator), `query.rs`
//!   (adjacency queries and edges), `copy.rs` (copy spanning tree).

mod build;
mod copy;
mod query;
mod types;

#[cfg(test)]
mod tests;

pub use types::{
    Chamber, ChamberId, CopyStep, Edge, EdgeId, Element, ElementCategory, TilingCfg, Vertex,
    VertexId,
};

use crate::chamber::{ChamberSymbol, FundamentalChamber};
use crate::error::WythoffError;
use crate::sphere::Point;
use crate::symbol::{Symbol3, Symbol4};

/// Finished chamber tiling for `symbol`.
#[derive(Clone, Debug)]
pub struct Tiling<S, const N: usize> {
    symbol: S,
    cfg: TilingCfg,
    vertices: Vec<Vertex<N>>,
    chambers: Vec<Chamber<N>>,
    edges: Vec<Edge>,
    copy_plan: Vec<CopyStep<N>>,
}

pub type Tiling3 = Tiling<Symbol3, 3>;
pub type Tiling4 = Tiling<Symbol4, 4>;

impl<S: ChamberSymbol<N>, const N: usize> Tiling<S, N> {
    /// Tile with the symbol's default tolerance and ceiling.
    pub fn new(symbol: S) -> Result<Self, WythoffError> {
        Self::with_cfg(symbol, TilingCfg::default())
    }

    pub fn with_cfg(symbol: S, cfg: TilingCfg) -> Result<Self, WythoffError> {
        let generated = build::Builder::new(&symbol, &cfg)?.run()?;
        let edges = query::collect_edges::<S, N>(&generated.vertices, &generated.chambers);
        let copy_plan = copy::plan(&generated.vertices, &generated.chambers);
        Ok(Self {
            symbol,
            cfg,
            vertices: generated.vertices,
            chambers: generated.chambers,
            edges,
            copy_plan,
        })
    }

    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    pub fn cfg(&self) -> &TilingCfg {
        &self.cfg
    }

    pub fn chambers(&self) -> &[Chamber<N>] {
        &self.chambers
    }

    pub fn vertices(&self) -> &[Vertex<N>] {
        &self.vertices
    }

    /// Vertex pairs sharing a chamber; see `collect_edges` for the ordering.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Panics if `id` did not come from this tiling.
    #[inline]
    pub fn chamber(&self, id: ChamberId) -> &Chamber<N> {
        &self.chambers[id.0]
    }

    /// Panics if `id` did not come from this tiling.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex<N> {
        &self.vertices[id.0]
    }

    /// Group order.
    #[inline]
    pub fn order(&self) -> usize {
        self.chambers.len()
    }

    pub fn chamber_points(&self, id: ChamberId) -> [Point<N>; N] {
        self.chamber(id).vertices.map(|v| self.vertex(v).point)
    }

    /// Chamber 0 with its diagnostic constructions.
    pub fn fundamental(&self) -> FundamentalChamber<N> {
        FundamentalChamber::new(self.chamber_points(ChamberId(0)))
    }

    /// Number of tiling vertices of each type.
    pub fn vertex_counts(&self) -> [usize; N] {
        let mut counts = [0; N];
        for v in &self.vertices {
            counts[v.kind] += 1;
        }
        counts
    }
}
