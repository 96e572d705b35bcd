//! Wythoffian polyhedra: output vertices and faces derived from a 2-sphere tiling.
//!
//! Purpose
//! - One `Polyhedron<V>` per (tiling, construction) pair. Face topology is fixed at
//!   construction time; moving the generating point only recomputes positions.
//!
//! Why this design
//! - `Construction` is a closed enum matched exhaustively; each variant's face
//!   rule lives in `rules.rs` (or `ionic.rs` for the two-colouring variants) and
//!   its position update in `place.rs`.
//! - Variants whose precondition fails fall back to a simpler rule (Dirhombic to
//!   Snub, Ionic to Normal). `effective()` reports what was actually built, so the
//!   fallback is observable instead of silent.
//! - `V: SphereCoord<3>` lets the same polyhedron be held in f64 or f32; positions
//!   are always derived from exact f64 geometry.

mod ionic;
mod place;
mod rules;


use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::WythoffError;
use crate::sphere::{Point3, SpatialIndex, SphereCoord};
use crate::tiling::{ChamberId, Element, Tiling3};

/// Construction variant selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construction {
    /// The chamber tiling itself: tiling vertices, one face per chamber.
    Tiling,
    Normal,
    Snub,
    Dual,
    Ionic1,
    Ionic2,
    Dirhombic,
    SnubDual,
}

impl Construction {
    pub const ALL: [Construction; 8] = [
        Self::Tiling,
        Self::Normal,
        Self::Snub,
        Self::Dual,
        Self::Ionic1,
        Self::Ionic2,
        Self::Dirhombic,
        Self::SnubDual,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Tiling => "tiling",
            Self::Normal => "normal",
            Self::Snub => "snub",
            Self::Dual => "dual",
            Self::Ionic1 => "ionic1",
            Self::Ionic2 => "ionic2",
            Self::Dirhombic => "dirhombic",
            Self::SnubDual => "snub-dual",
        }
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Construction {
    type Err = WythoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == key || c.name().replace('-', "") == key)
            .ok_or_else(|| WythoffError::invalid(format!("unknown construction: {s}")))
    }
}

/// Output vertex: position plus the tiling element it descends from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolyVertex<V> {
    pub position: V,
    pub element: Element,
}

/// Output face: ordered indices into `Polyhedron::vertices`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyFace {
    pub element: Element,
    pub vertices: Vec<usize>,
}

impl PolyFace {
    pub(crate) fn new(element: Element, vertices: Vec<usize>) -> Self {
        Self { element, vertices }
    }

    /// Face of chamber-indexed output vertices.
    pub(crate) fn of_chambers(
        element: Element,
        chambers: impl IntoIterator<Item = ChamberId>,
    ) -> Self {
        Self::new(element, chambers.into_iter().map(|c| c.0).collect())
    }

    /// Number of distinct corner positions (per-component tolerance `eps`).
    pub fn distinct_len<V: SphereCoord<3>>(&self, vertices: &[PolyVertex<V>], eps: f64) -> usize {
        let mut seen: Vec<V> = Vec::with_capacity(self.vertices.len());
        for &i in &self.vertices {
            let p = vertices[i].position;
            if !seen.iter().any(|q| q.approx_eq(&p, eps)) {
                seen.push(p);
            }
        }
        seen.len()
    }
}

/// Polyhedron built from a shared tiling and one construction rule.
#[derive(Clone, Debug)]
pub struct Polyhedron<V: SphereCoord<3>> {
    tiling: Arc<Tiling3>,
    construction: Construction,
    effective: Construction,
    base: Point3,
    vertices: Vec<PolyVertex<V>>,
    faces: Vec<PolyFace>,
    scratch: Vec<V>,
}

impl<V: SphereCoord<3>> Polyhedron<V> {
    /// Total: unmet preconditions fall back (see `effective`).
    ///
    /// Dual and SnubDual positions are reciprocal distances, so a base point
    /// orthogonal to a chamber vertex (e.g. the default base of `(2 2 n)`) yields
    /// non-finite positions for that vertex type until the base moves.
    pub fn new(tiling: Arc<Tiling3>, construction: Construction) -> Self {
        let (effective, faces) = rules::faces_for(&tiling, construction);
        let vertices = place::initial_vertices(&tiling, effective);
        let base = tiling.chamber_points(ChamberId(0))[0];
        let mut this = Self {
            tiling,
            construction,
            effective,
            base,
            vertices,
            faces,
            scratch: Vec::new(),
        };
        this.update_positions();
        this
    }

    pub fn tiling(&self) -> &Arc<Tiling3> {
        &self.tiling
    }

    /// Variant requested at construction.
    pub fn construction(&self) -> Construction {
        self.construction
    }

    /// Variant whose face rule was actually applied.
    pub fn effective(&self) -> Construction {
        self.effective
    }

    pub fn vertices(&self) -> &[PolyVertex<V>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[PolyFace] {
        &self.faces
    }

    pub fn base_point(&self) -> Point3 {
        self.base
    }

    /// Move the generating point; positions are recomputed, topology is not.
    /// The point is normalized; a zero vector is kept as is.
    pub fn set_base_point(&mut self, p: Point3) {
        self.base = SphereCoord::normalize(&p);
        self.update_positions();
    }

    fn update_positions(&mut self) {
        place::update(
            &self.tiling,
            self.effective,
            &self.base,
            &mut self.vertices,
            &mut self.scratch,
        );
    }

    /// Number of output positions after merging those within `eps`.
    pub fn distinct_vertex_count(&self, eps: f64) -> usize {
        let mut index = SpatialIndex::<3>::new(eps);
        for (i, v) in self.vertices.iter().enumerate() {
            let p = v.position.to_exact();
            if index.find(&p).is_none() {
                index.insert(p, i);
            }
        }
        index.len()
    }

    /// Faces with at least three distinct corners at the current base point.
    pub fn visible_faces(&self, eps: f64) -> impl Iterator<Item = &PolyFace> + '_ {
        self.faces
            .iter()
            .filter(move |f| f.distinct_len(&self.vertices, eps) >= 3)
    }

    pub fn face_positions(&self, face: &PolyFace) -> Vec<V> {
        face.vertices
            .iter()
            .map(|&i| self.vertices[i].position)
            .collect()
    }
}
