//! Data types for tilings: ids, elements, vertices, chambers, edges, copy steps.
//!
//! Kept small and explicit so `build` and `query` read easily.

use crate::sphere::Point;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChamberId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    Vertex,
    Edge,
    Face,
    Cell,
}

impl ElementCategory {
    /// Category of a chamber: triangles are faces on S², tetrahedra cells on S³.
    pub fn chamber(dim: usize) -> Self {
        if dim <= 3 {
            Self::Face
        } else {
            Self::Cell
        }
    }
}

/// Origin of an output vertex/face/cell.
///
/// `kind` is the position within the fundamental chamber the entity descends
/// from (chamber parity for chambers); `index` is dense within its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    pub category: ElementCategory,
    pub kind: usize,
    pub index: usize,
}

impl Element {
    pub fn new(category: ElementCategory, kind: usize, index: usize) -> Self {
        Self {
            category,
            kind,
            index,
        }
    }
}

/// Tiling vertex: a unit point plus the chambers meeting at it.
#[derive(Clone, Debug)]
pub struct Vertex<const N: usize> {
    pub id: VertexId,
    pub kind: usize,
    pub point: Point<N>,
    pub valence: usize,
    pub(crate) chambers: Vec<ChamberId>,
}

impl<const N: usize> Vertex<N> {
    pub(crate) fn new(id: VertexId, kind: usize, point: Point<N>, valence: usize) -> Self {
        Self {
            id,
            kind,
            point,
            valence,
            chambers: Vec::with_capacity(valence),
        }
    }

    /// Incident chambers in discovery order.
    pub fn chambers(&self) -> &[ChamberId] {
        &self.chambers
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.chambers.len() >= self.valence
    }

    pub fn element(&self) -> Element {
        Element::new(ElementCategory::Vertex, self.kind, self.id.0)
    }
}

/// Chamber: `N` vertices (vertex `k` has type `k`) and one neighbour per facet.
/// Facet `k` is the one opposite vertex `k`.
#[derive(Clone, Debug)]
pub struct Chamber<const N: usize> {
    pub id: ChamberId,
    /// Orientation parity (0 for the fundamental chamber).
    pub kind: usize,
    pub vertices: [VertexId; N],
    pub(crate) neighbors: [Option<ChamberId>; N],
}

impl<const N: usize> Chamber<N> {
    #[inline]
    pub fn neighbor(&self, facet: usize) -> Option<ChamberId> {
        self.neighbors.get(facet).copied().flatten()
    }

    pub fn neighbors(&self) -> &[Option<ChamberId>; N] {
        &self.neighbors
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    pub fn element(&self) -> Element {
        Element::new(ElementCategory::chamber(N), self.kind, self.id.0)
    }
}

/// Tiling edge between two vertices that share a chamber (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub a: VertexId,
    pub b: VertexId,
    pub kind: usize,
}

impl Edge {
    pub fn element(&self) -> Element {
        Element::new(ElementCategory::Edge, self.kind, self.id.0)
    }
}

/// One step of the copy spanning tree: chamber `i` is chamber `source`
/// reflected across its facet `facet`, whose unit mirror normal is `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CopyStep<const N: usize> {
    pub source: ChamberId,
    pub facet: usize,
    pub normal: Point<N>,
}

/// Tiling generation configuration (tolerances and ceilings).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TilingCfg {
    /// Per-component vertex merge tolerance; `None` uses the symbol's default.
    pub merge_eps: Option<f64>,
    /// Chamber ceiling; `None` uses the symbol's closed-form bound.
    pub max_chambers: Option<usize>,
}
