//! Fundamental triangle on S² for a three-entry symbol.

use std::f64::consts::PI;

use super::{check_simplex, ChamberSymbol};
use crate::error::WythoffError;
use crate::sphere::cfg::POINT_EPS;
use crate::sphere::{can_make_triangle, opposite_cos, sin_from_cos, Point3};
use crate::symbol::Symbol3;

impl ChamberSymbol<3> for Symbol3 {
    fn valences(&self) -> [usize; 3] {
        self.0.map(|f| 2 * f.numerator().unsigned_abs() as usize)
    }

    fn max_chambers(&self) -> usize {
        self.order()
    }

    fn default_merge_eps(&self) -> f64 {
        POINT_EPS
    }

    /// On S² the angle at the far corner of a side is the third entry.
    fn edge_kind(a: usize, b: usize) -> usize {
        3 - a - b
    }

    /// Vertex 0 sits at the pole, vertex 1 in the xz-plane.
    ///
    /// ```text
    ///  v0
    ///  |\
    ///  | \
    ///  |__\
    ///  v2  v1
    /// ```
    fn fundamental_chamber(&self) -> Result<[Point3; 3], WythoffError> {
        let [f0, f1, f2] = self.0.map(|f| f.to_f64());
        if !can_make_triangle(f0, f1, f2) {
            return Err(WythoffError::infeasible(self));
        }
        let (a, b, c) = (PI / f0, PI / f1, PI / f2);
        let cos_b = opposite_cos(b, a, c);
        let cos_c = opposite_cos(c, a, b);
        if !(cos_b.abs() < 1.0 && cos_c.abs() < 1.0) {
            return Err(WythoffError::infeasible(self));
        }
        let (sin_b, sin_c) = (sin_from_cos(cos_b), sin_from_cos(cos_c));
        check_simplex(
            self,
            [
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(sin_c, 0.0, cos_c),
                Point3::new(sin_b * a.cos(), sin_b * a.sin(), cos_b),
            ],
        )
    }
}
