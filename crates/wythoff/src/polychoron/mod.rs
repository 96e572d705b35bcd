//! Wythoffian polychora: the Normal construction on a 3-sphere tiling.
//!
//! Purpose
//! - One output vertex per chamber (the copy cascade of the base point), one face
//!   per tiling edge, one cell per tiling vertex.
//!
//! Why this design
//! - Topology is fixed when the polychoron is built; `set_base_point` only rewrites
//!   vertex positions and cell centers.
//! - Faces record their two cells by index and cells list their faces, so renderers
//!   can walk either way without a second lookup table.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::polyhedron::PolyVertex;
use crate::sphere::{Point4, SpatialIndex, SphereCoord};
use crate::tiling::{ChamberId, Element, Tiling4};

/// Face around one tiling edge. `vertices` index `Polychoron::vertices` in ring
/// order; `cells` are the edge's endpoint cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolychoronFace {
    pub element: Element,
    pub vertices: Vec<usize>,
    pub cells: [usize; 2],
}

/// Cell around one tiling vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct PolychoronCell<V> {
    pub element: Element,
    /// Indices into `Polychoron::faces`, ascending.
    pub faces: Vec<usize>,
    /// Unit direction of the tiling vertex.
    pub normal: V,
    /// `normal` scaled to the cell's supporting hyperplane.
    pub center: V,
}

#[derive(Clone, Debug)]
pub struct Polychoron<V: SphereCoord<4>> {
    tiling: Arc<Tiling4>,
    base: Point4,
    vertices: Vec<PolyVertex<V>>,
    faces: Vec<PolychoronFace>,
    cells: Vec<PolychoronCell<V>>,
    scratch: Vec<V>,
}

impl<V: SphereCoord<4>> Polychoron<V> {
    pub fn new(tiling: Arc<Tiling4>) -> Self {
        let vertices = tiling
            .chambers()
            .iter()
            .map(|c| PolyVertex {
                position: V::zero(),
                element: c.element(),
            })
            .collect();

        let mut cells: Vec<PolychoronCell<V>> = tiling
            .vertices()
            .iter()
            .map(|v| {
                let normal = V::from_exact(&v.point);
                PolychoronCell {
                    element: v.element(),
                    faces: Vec::new(),
                    normal,
                    center: normal,
                }
            })
            .collect();

        let faces: Vec<PolychoronFace> = tiling
            .edges()
            .iter()
            .map(|e| PolychoronFace {
                element: e.element(),
                vertices: tiling.edge_ring(e).into_iter().map(|c| c.0).collect(),
                cells: [e.a.0, e.b.0],
            })
            .collect();
        for (i, f) in faces.iter().enumerate() {
            for cell in f.cells {
                cells[cell].faces.push(i);
            }
        }

        let mut this = Self {
            tiling,
            base: Point4::new(0.0, 0.0, 0.0, 1.0),
            vertices,
            faces,
            cells,
            scratch: Vec::new(),
        };
        this.update_positions();
        this
    }

    pub fn tiling(&self) -> &Arc<Tiling4> {
        &self.tiling
    }

    pub fn vertices(&self) -> &[PolyVertex<V>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[PolychoronFace] {
        &self.faces
    }

    pub fn cells(&self) -> &[PolychoronCell<V>] {
        &self.cells
    }

    pub fn base_point(&self) -> Point4 {
        self.base
    }

    /// Normalizes `p` and recomputes positions and centers.
    pub fn set_base_point(&mut self, p: Point4) {
        self.base = SphereCoord::normalize(&p);
        self.update_positions();
    }

    fn update_positions(&mut self) {
        self.tiling
            .propagate_into(V::from_exact(&self.base), &mut self.scratch);
        for (v, p) in self.vertices.iter_mut().zip(&self.scratch) {
            v.position = *p;
        }

        let chamber = self.tiling.chamber_points(ChamberId(0));
        let distances = chamber.map(|v| v.dot(&self.base));
        for cell in &mut self.cells {
            cell.center = cell.normal.scale(distances[cell.element.kind]);
        }
    }

    /// Number of output positions after merging those within `eps`.
    pub fn distinct_vertex_count(&self, eps: f64) -> usize {
        let mut index = SpatialIndex::<4>::new(eps);
        for (i, v) in self.vertices.iter().enumerate() {
            let p = v.position.to_exact();
            if index.find(&p).is_none() {
                index.insert(p, i);
            }
        }
        index.len()
    }

    pub fn face_positions(&self, face: &PolychoronFace) -> Vec<V> {
        face.vertices
            .iter()
            .map(|&i| self.vertices[i].position)
            .collect()
    }
}
