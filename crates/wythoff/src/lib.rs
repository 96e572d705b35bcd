//! Uniform polytopes from Wythoff/Coxeter symbols.
//!
//! A symbol fixes the dihedral angles of a spherical simplex (a triangle on S²,
//! a tetrahedron on S³). Reflecting that chamber in its own mirrors tiles the
//! sphere; a generating point placed in the chamber and copied into every tile
//! yields the vertices of a uniform polytope, and the construction variant picks
//! which tiles' copies form each face.
//!
//! Layout
//! - `symbol`: fractions, symbols, catalogs.
//! - `sphere`: coordinates, reflections, tolerances, the merge index.
//! - `chamber`: closed-form fundamental chambers and their feasibility.
//! - `tiling`: breadth-first tiling generator, adjacency queries, copy tree.
//! - `polyhedron` / `polychoron`: construction variants on S² and S³.
//!
//! API Policy
//! - `api` is a curated surface for callers such as the CLI; module paths may
//!   move between versions.

pub mod api;
pub mod chamber;
pub mod error;
pub mod polychoron;
pub mod polyhedron;
pub mod sphere;
pub mod symbol;
pub mod tiling;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::WythoffError;
pub use sphere::{Point3, Point4};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::WythoffError;
    pub use crate::polychoron::Polychoron;
    pub use crate::polyhedron::{Construction, Polyhedron};
    pub use crate::sphere::{Point3, Point4, SphereCoord};
    pub use crate::symbol::{Fraction, Symbol3, Symbol4};
    pub use crate::tiling::{Tiling3, Tiling4, TilingCfg};
}
