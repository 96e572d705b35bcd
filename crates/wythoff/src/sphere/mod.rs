//! Spherical geometry helpers on S² and S³.
//!
//! Purpose
//! - Coordinate abstraction (`SphereCoord`) over exact and render precision vectors.
//! - Closed-form spherical trigonometry used to place fundamental chambers.
//! - The epsilon-bucketed vertex index used by the tiling generator.
//!
//! References
//! - Coxeter, "Regular Polytopes", ch. 5 (polar triangles and the angle cosine rule).

pub mod cfg;
mod coord;
mod index;


pub use coord::{
    generalized_cross, mirror_normal, reflect_exact, Point, Point3, Point4, SphereCoord,
};
pub use index::SpatialIndex;

use std::f64::consts::PI;

use cfg::SNAP_EPS;

/// Cosine of the side opposite angle `a` in a spherical triangle with angles `a, b, c`.
///
/// Polar form of the cosine rule: `cos(side_a) = (cos b cos c + cos a) / (sin b sin c)`.
#[inline]
pub fn opposite_cos(a: f64, b: f64, c: f64) -> f64 {
    (b.cos() * c.cos() + a.cos()) / (b.sin() * c.sin())
}

/// Sine of the side opposite angle `a`, clamped to be real.
#[inline]
pub fn opposite_sin(a: f64, b: f64, c: f64) -> f64 {
    sin_from_cos(opposite_cos(a, b, c))
}

#[inline]
pub(crate) fn sin_from_cos(c: f64) -> f64 {
    (1.0 - c * c).max(0.0).sqrt()
}

/// Snap values within `SNAP_EPS` of 0 or ±1 onto them.
#[inline]
pub(crate) fn snap(x: f64) -> f64 {
    if x.abs() < SNAP_EPS {
        0.0
    } else if (x - 1.0).abs() < SNAP_EPS {
        1.0
    } else if (x + 1.0).abs() < SNAP_EPS {
        -1.0
    } else {
        x
    }
}

/// Whether mirror angles `π/a, π/b, π/c` bound a spherical triangle.
///
/// Each angle must lie in (0, π), the angle sum must exceed π, and every pair
/// must sum to less than π plus the third.
pub fn can_make_triangle(a: f64, b: f64, c: f64) -> bool {
    const TOL: f64 = 1e-9;
    if !(a > 1.0 && b > 1.0 && c > 1.0) {
        return false;
    }
    let (x, y, z) = (PI / a, PI / b, PI / c);
    x + y + z > PI + TOL && x + y < PI + z - TOL && y + z < PI + x - TOL && x + z < PI + y - TOL
}

/// Reciprocal distance `1 / (p · base)` of the polar plane of `base` along `p`.
#[inline]
pub fn catalan_distance<const N: usize>(p: &Point<N>, base: &Point<N>) -> f64 {
    1.0 / p.dot(base)
}

/// Scale `t` such that `t · v` lies on the plane `{x : normal · x = normal · on_plane}`.
#[inline]
pub fn cross_point<const N: usize>(v: &Point<N>, normal: &Point<N>, on_plane: &Point<N>) -> f64 {
    normal.dot(on_plane) / normal.dot(v)
}

/// Great-circle interpolation from `a` (t = 0) to `b` (t = 1); `t` is clamped.
/// Nearly parallel endpoints return `a`.
pub fn slerp<V: SphereCoord<N>, const N: usize>(a: &V, b: &V, t: f64) -> V {
    let t = t.clamp(0.0, 1.0);
    let omega = a.dot(b).clamp(-1.0, 1.0).acos();
    let s = omega.sin();
    if s.abs() < 1e-12 {
        return *a;
    }
    a.scale(((1.0 - t) * omega).sin() / s)
        .add(&b.scale((t * omega).sin() / s))
}
