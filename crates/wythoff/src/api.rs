//! Curated API for the CLI and experiments (UNSTABLE).
//!
//! Prefer these re-exports over deep module paths; breaking changes are allowed.

// Symbols
pub use crate::symbol::{
    is_schwarz_triangle, symmetry_order, Fraction, Symbol3, Symbol4, SymbolPage,
};
// Geometry
pub use crate::chamber::{dirhombic_point, snub_point, ChamberSymbol, FundamentalChamber};
pub use crate::sphere::{cfg as tolerances, Point, Point3, Point4, SpatialIndex, SphereCoord};
// Tilings
pub use crate::tiling::{
    Chamber, ChamberId, CopyStep, Edge, EdgeId, Element, ElementCategory, Tiling, Tiling3, Tiling4,
    TilingCfg, Vertex, VertexId,
};
// Constructions
pub use crate::polychoron::{Polychoron, PolychoronCell, PolychoronFace};
pub use crate::polyhedron::{Construction, PolyFace, PolyVertex, Polyhedron};
pub use crate::error::WythoffError;
