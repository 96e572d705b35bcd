//! Output vertex layouts and their position updates.
//!
//! Three layouts exist:
//! - chamber-indexed (Normal, Snub, Ionic, Dirhombic): one vertex per chamber,
//!   the copy cascade of the base point;
//! - tiling-vertex-indexed (Tiling, Dual): one vertex per tiling vertex;
//! - both (SnubDual): chamber vertices first, then tiling vertices.

use super::{Construction, PolyVertex};
use crate::sphere::{
    catalan_distance, cross_point, mirror_normal, reflect_exact, Point3, SphereCoord,
};
use crate::tiling::{ChamberId, Tiling3};

pub(super) fn initial_vertices<V: SphereCoord<3>>(
    t: &Tiling3,
    construction: Construction,
) -> Vec<PolyVertex<V>> {
    let chambers = t.chambers().iter().map(|c| PolyVertex {
        position: V::zero(),
        element: c.element(),
    });
    let tiling_vertices = t.vertices().iter().map(|v| PolyVertex {
        position: V::from_exact(&v.point),
        element: v.element(),
    });
    match construction {
        Construction::Tiling | Construction::Dual => tiling_vertices.collect(),
        Construction::SnubDual => chambers.chain(tiling_vertices).collect(),
        Construction::Normal
        | Construction::Snub
        | Construction::Ionic1
        | Construction::Ionic2
        | Construction::Dirhombic => chambers.collect(),
    }
}

pub(super) fn update<V: SphereCoord<3>>(
    t: &Tiling3,
    construction: Construction,
    base: &Point3,
    vertices: &mut [PolyVertex<V>],
    scratch: &mut Vec<V>,
) {
    match construction {
        Construction::Tiling => {}
        Construction::Dual => {
            let distances = dual_distances(t, base);
            place_tiling_vertices(t, &distances, vertices);
        }
        Construction::SnubDual => {
            let (snub, distances) = snub_dual_solve(t, base);
            place_chambers(t, V::from_exact(&snub), vertices, scratch);
            let offset = t.order();
            place_tiling_vertices(t, &distances, &mut vertices[offset..]);
        }
        Construction::Normal
        | Construction::Snub
        | Construction::Ionic1
        | Construction::Ionic2
        | Construction::Dirhombic => place_chambers(t, V::from_exact(base), vertices, scratch),
    }
}

fn place_chambers<V: SphereCoord<3>>(
    t: &Tiling3,
    base: V,
    vertices: &mut [PolyVertex<V>],
    scratch: &mut Vec<V>,
) {
    t.propagate_into(base, scratch);
    for (v, p) in vertices.iter_mut().zip(scratch.iter()) {
        v.position = *p;
    }
}

fn place_tiling_vertices<V: SphereCoord<3>>(
    t: &Tiling3,
    distances: &[f64; 3],
    vertices: &mut [PolyVertex<V>],
) {
    for (out, v) in vertices.iter_mut().zip(t.vertices()) {
        out.position = V::from_exact(&(v.point * distances[v.kind]));
    }
}

/// Reciprocal distances `1 / (v_k · base)` over the fundamental chamber,
/// scaled so the largest magnitude is 1.
pub(super) fn dual_distances(t: &Tiling3, base: &Point3) -> [f64; 3] {
    let chamber = t.chamber_points(ChamberId(0));
    let ds = chamber.map(|v| catalan_distance(&v, base));
    let max = largest(&ds, 0.0);
    if max > 0.0 {
        ds.map(|d| d / max)
    } else {
        ds
    }
}

/// Snub point of `base` and the tiling-vertex distances of the snub dual.
///
/// The snub point is the normalized centroid of the base point's three mirror
/// images in the fundamental chamber. Its own mirror images span a plane; each
/// tiling vertex of the chamber is pushed out to meet it. Both families are then
/// scaled to a common circumradius.
pub(super) fn snub_dual_solve(t: &Tiling3, base: &Point3) -> (Point3, [f64; 3]) {
    let chamber = t.chamber_points(ChamberId(0));
    let mirrors: [Point3; 3] = std::array::from_fn(|i| mirror_normal(&chamber, (i + 2) % 3));
    let images = |p: &Point3| mirrors.map(|n| reflect_exact(p, &n));

    let [a0, a1, a2] = images(base);
    let snub = SphereCoord::normalize(&(a0 + a1 + a2));
    let [s0, s1, s2] = images(&snub);
    let normal = SphereCoord::normalize(&(s1 - s0).cross(&(s2 - s0)));
    let ds = chamber.map(|v| cross_point(&v, &normal, &s0));

    // The snub vertices sit at distance 1 before rescaling.
    let max = largest(&ds, 1.0);
    (snub / max, ds.map(|d| d / max))
}

/// Largest finite magnitude among `ds` and `floor`.
fn largest(ds: &[f64; 3], floor: f64) -> f64 {
    ds.iter()
        .filter(|d| d.is_finite())
        .fold(floor, |m, d| m.max(d.abs()))
}
