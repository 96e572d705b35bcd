//! Fundamental chambers: the closed-form simplex a symbol's mirrors bound.
//!
//! Purpose
//! - `ChamberSymbol<N>` ties a symbol type to its chamber dimension and supplies
//!   everything the tiling generator needs up front: valences, the order ceiling,
//!   the default merge tolerance, and the chamber vertices themselves.
//! - `FundamentalChamber<N>` carries the diagnostic points the picker UI offers
//!   (incenter, bisector intersections) plus random interior sampling.
//!
//! Why this design
//! - Vertex placement is closed form (cosine rule on the polar triangle, cascaded
//!   for the tetrahedron); there is no iteration that could fail to converge.
//! - Feasibility is decided here, before any chamber exists, so the tiling
//!   generator only ever reports `DoesNotTile`.

mod tables;
mod tetrahedron;
mod triangle;

#[cfg(test)]
mod tests;

pub use tables::{dirhombic_point, snub_point};

use std::fmt;

use nalgebra::{DMatrix, SVector};
use rand::Rng;

use crate::error::WythoffError;
use crate::sphere::cfg::{DEGENERATE_EPS, PICK_EPS};
use crate::sphere::{mirror_normal, Point};

/// A symbol whose mirrors bound an `(N-1)`-simplex on the sphere in R^N.
pub trait ChamberSymbol<const N: usize>:
    Copy + fmt::Display + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Chambers that must meet at a tiling vertex of each type.
    fn valences(&self) -> [usize; N];

    /// Closed-form upper bound on the group order (chamber count).
    fn max_chambers(&self) -> usize;

    /// Vertex ceiling implied by the chamber ceiling and the valences.
    fn max_vertices(&self) -> usize {
        let limit = self.max_chambers();
        self.valences().iter().map(|v| limit / (*v).max(1)).sum()
    }

    /// Default per-component tolerance for merging reflected vertices.
    fn default_merge_eps(&self) -> f64;

    /// Symbol entry giving the dihedral angle around the edge joining vertex
    /// types `a` and `b` (`a != b`).
    fn edge_kind(a: usize, b: usize) -> usize;

    /// Vertices of the fundamental chamber, vertex `i` carrying angle entry `i`.
    fn fundamental_chamber(&self) -> Result<[Point<N>; N], WythoffError>;
}

/// Reject simplices whose vertices are not finite or span less than R^N.
pub(crate) fn check_simplex<const N: usize>(
    symbol: &impl fmt::Display,
    vertices: [Point<N>; N],
) -> Result<[Point<N>; N], WythoffError> {
    let finite = vertices.iter().all(|v| v.iter().all(|x| x.is_finite()));
    if !finite {
        return Err(WythoffError::infeasible(symbol));
    }
    let m = DMatrix::<f64>::from_fn(N, N, |r, c| vertices[r][c]);
    if m.determinant().abs() < DEGENERATE_EPS {
        return Err(WythoffError::infeasible(symbol));
    }
    Ok(vertices.map(|v| v.normalize()))
}

/// The fundamental chamber of a tiling, with diagnostic constructions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FundamentalChamber<const N: usize> {
    pub vertices: [Point<N>; N],
}

impl<const N: usize> FundamentalChamber<N> {
    pub fn new(vertices: [Point<N>; N]) -> Self {
        Self { vertices }
    }

    /// Unit normal of the mirror opposite vertex `i`.
    pub fn mirror(&self, i: usize) -> Point<N> {
        mirror_normal(&self.vertices, i)
    }

    /// Normalized positive combination of the vertices.
    pub fn interior_point(&self, weights: &[f64; N]) -> Point<N> {
        let sum = self
            .vertices
            .iter()
            .zip(weights.iter())
            .fold(SVector::<f64, N>::zeros(), |acc, (v, w)| acc + v * w.abs());
        let len = sum.norm();
        if len > 0.0 {
            sum / len
        } else {
            self.vertices[0]
        }
    }

    /// Random interior point from strictly positive barycentric weights.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<N> {
        let weights: [f64; N] = std::array::from_fn(|_| rng.gen_range(0.05..1.0));
        self.interior_point(&weights)
    }

    /// Chamber vertex that `p` picks, if any lies within `PICK_EPS` per component.
    pub fn pick_vertex(&self, p: &Point<N>) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| (v - p).iter().all(|x| x.abs() <= PICK_EPS))
    }

    /// Whether `p` lies on the inner side of every mirror (with slack `eps`).
    pub fn contains(&self, p: &Point<N>, eps: f64) -> bool {
        (0..N).all(|i| {
            let n = self.mirror(i);
            let side = n.dot(&self.vertices[i]).signum();
            side * n.dot(p) >= -eps
        })
    }
}

fn sin_between<const N: usize>(a: &Point<N>, b: &Point<N>) -> f64 {
    crate::sphere::sin_from_cos(a.dot(b))
}

impl FundamentalChamber<3> {
    /// Intersection of the angle bisector from vertex `i` with the opposite side.
    pub fn bisector_cross(&self, i: usize) -> Point<3> {
        let a = &self.vertices[i];
        let b = &self.vertices[(i + 1) % 3];
        let c = &self.vertices[(i + 2) % 3];
        (b * sin_between(a, c) + c * sin_between(a, b)).normalize()
    }

    /// Point equidistant from all three sides.
    pub fn incenter(&self) -> Point<3> {
        let [a, b, c] = &self.vertices;
        (a * sin_between(b, c) + b * sin_between(a, c) + c * sin_between(a, b)).normalize()
    }
}

impl FundamentalChamber<4> {
    /// Vertex `i` scaled by the volume sine of the opposite face.
    pub fn weighted_vertex(&self, i: usize) -> Point<4> {
        let v = &self.vertices;
        let a = v[(i + 1) % 4].dot(&v[(i + 2) % 4]);
        let b = v[(i + 2) % 4].dot(&v[(i + 3) % 4]);
        let c = v[(i + 3) % 4].dot(&v[(i + 1) % 4]);
        v[i] * (1.0 - a * a - b * b - c * c + 2.0 * a * b * c).max(0.0).sqrt()
    }

    pub fn bisector_cross(&self, i: usize, j: usize) -> Point<4> {
        (self.weighted_vertex(i) + self.weighted_vertex(j)).normalize()
    }

    pub fn trisector_cross(&self, i: usize) -> Point<4> {
        (self.weighted_vertex((i + 1) % 4)
            + self.weighted_vertex((i + 2) % 4)
            + self.weighted_vertex((i + 3) % 4))
        .normalize()
    }

    pub fn incenter(&self) -> Point<4> {
        (0..4)
            .map(|i| self.weighted_vertex(i))
            .fold(Point::<4>::zeros(), |acc, w| acc + w)
            .normalize()
    }
}
