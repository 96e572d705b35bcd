//! Fundamental tetrahedron on S³ for a six-entry symbol.
//!
//! The placement cascades triangle computations: two vertex figures give the
//! face angles at vertices 0 and 1 (`c_*`, `d_*`), and those give the three edge
//! lengths from vertex 0. Coordinates within `SNAP_EPS` of 0 or ±1 are snapped
//! before normalization.

use std::f64::consts::PI;

use super::{check_simplex, ChamberSymbol};
use crate::error::WythoffError;
use crate::sphere::cfg::MERGE_EPS_4D;
use crate::sphere::{opposite_cos, sin_from_cos, snap, Point4};
use crate::symbol::{is_schwarz_triangle, symmetry_order, Symbol4, VERTEX_FIGURES};

impl Symbol4 {
    /// Every vertex figure must be a finite triangle group.
    pub fn can_make_tetrahedron(&self) -> bool {
        VERTEX_FIGURES
            .iter()
            .all(|&[a, b, c]| is_schwarz_triangle(self.0[a], self.0[b], self.0[c]))
    }
}

impl ChamberSymbol<4> for Symbol4 {
    fn valences(&self) -> [usize; 4] {
        VERTEX_FIGURES.map(|[a, b, c]| symmetry_order(self.0[a], self.0[b], self.0[c]))
    }

    fn max_chambers(&self) -> usize {
        let has = |n: i32| self.0.iter().any(|f| f.numerator() == n);
        if has(5) {
            14400
        } else if has(4) {
            1152
        } else {
            384
        }
    }

    fn default_merge_eps(&self) -> f64 {
        MERGE_EPS_4D
    }

    /// The one entry the vertex figures at both ends have in common.
    fn edge_kind(a: usize, b: usize) -> usize {
        let [fa, fb] = [VERTEX_FIGURES[a % 4], VERTEX_FIGURES[b % 4]];
        fa.into_iter().find(|k| fb.contains(k)).unwrap_or(0)
    }

    fn fundamental_chamber(&self) -> Result<[Point4; 4], WythoffError> {
        if !self.can_make_tetrahedron() {
            return Err(WythoffError::infeasible(self));
        }
        let ang = |i: usize| PI / self.0[i].to_f64();
        let (e, f, g, h, i, j) = (ang(0), ang(1), ang(4), ang(5), ang(3), ang(2));

        let cos_ca = opposite_cos(f, e, g);
        let cos_cb = opposite_cos(j, e, i);
        let cos_cd = opposite_cos(h, g, i);
        let cos_da = opposite_cos(g, e, f);
        let cos_db = opposite_cos(i, e, j);
        let cos_dc = opposite_cos(h, f, j);
        let (sin_ca, sin_cd) = (sin_from_cos(cos_ca), sin_from_cos(cos_cd));
        let (sin_da, sin_db, sin_dc) = (
            sin_from_cos(cos_da),
            sin_from_cos(cos_db),
            sin_from_cos(cos_dc),
        );

        let cos_edge_e = (cos_da * cos_db + cos_dc) / (sin_da * sin_db);
        let cos_edge_f = (cos_da * cos_dc + cos_db) / (sin_da * sin_dc);
        let cos_edge_g = (cos_ca * cos_cd + cos_cb) / (sin_ca * sin_cd);
        // Edge cosines at ±1 mean a Euclidean or hyperbolic diagram.
        let edges = [cos_edge_e, cos_edge_f, cos_edge_g];
        if !edges.iter().all(|c| c.is_finite() && c.abs() < 1.0 - 1e-9) {
            return Err(WythoffError::infeasible(self));
        }
        let sin_edge_e = sin_from_cos(cos_edge_e);
        let sin_edge_f = sin_from_cos(cos_edge_f);
        let sin_edge_g = sin_from_cos(cos_edge_g);

        let p = |x: f64, y: f64, z: f64, w: f64| Point4::new(snap(x), snap(y), snap(z), snap(w));
        check_simplex(
            self,
            [
                Point4::new(0.0, 0.0, 0.0, 1.0),
                p(0.0, 0.0, sin_edge_e, cos_edge_e),
                p(0.0, sin_da * sin_edge_f, cos_da * sin_edge_f, cos_edge_f),
                p(
                    e.sin() * sin_ca * sin_edge_g,
                    e.cos() * sin_ca * sin_edge_g,
                    cos_ca * sin_edge_g,
                    cos_edge_g,
                ),
            ],
        )
    }
}
