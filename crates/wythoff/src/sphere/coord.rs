//! Coordinate abstraction shared by tiling generation and polytope output.
//!
//! The tiling is computed on exact `Point<N>` (f64) values; polytope vertices may
//! be stored at reduced precision. `reflect` always runs in f64 so that long
//! copy cascades do not accumulate single-precision error.

use std::fmt;

use nalgebra::{DMatrix, Matrix, SVector};

/// Exact point on (or direction in) R^N.
pub type Point<const N: usize> = SVector<f64, N>;
pub type Point3 = Point<3>;
pub type Point4 = Point<4>;

/// Operator set every coordinate representation provides.
pub trait SphereCoord<const N: usize>:
    Copy + fmt::Debug + PartialEq + Send + Sync + 'static
{
    fn zero() -> Self;
    fn from_exact(p: &Point<N>) -> Self;
    fn to_exact(&self) -> Point<N>;

    /// Missing trailing scalars are zero; extra scalars are ignored.
    fn from_scalars(xs: &[f64]) -> Self {
        Self::from_exact(&Point::<N>::from_fn(|i, _| xs.get(i).copied().unwrap_or(0.0)))
    }

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn scale(&self, k: f64) -> Self;
    fn dot(&self, other: &Self) -> f64;

    fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    fn normalize(&self) -> Self {
        let n2 = self.norm_squared();
        if n2 > 0.0 {
            self.scale(1.0 / n2.sqrt())
        } else {
            *self
        }
    }

    /// Normal of the hyperplane spanned by `N - 1` vectors.
    fn cross(span: &[Self]) -> Self {
        let exact: Vec<Point<N>> = span.iter().map(|v| v.to_exact()).collect();
        Self::from_exact(&generalized_cross(&exact))
    }

    /// Mirror image across the hyperplane through the origin with normal `normal`.
    fn reflect(&self, normal: &Point<N>) -> Self {
        Self::from_exact(&reflect_exact(&self.to_exact(), normal))
    }

    /// Per-component comparison `|a_i - b_i| <= eps`.
    fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        let (a, b) = (self.to_exact(), other.to_exact());
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= eps)
    }
}

macro_rules! impl_sphere_coord {
    ($t:ty) => {
        impl<const N: usize> SphereCoord<N> for SVector<$t, N> {
            #[inline]
            fn zero() -> Self {
                Self::zeros()
            }
            #[inline]
            fn from_exact(p: &Point<N>) -> Self {
                p.map(|x| x as $t)
            }
            #[inline]
            fn to_exact(&self) -> Point<N> {
                self.map(|x| x as f64)
            }
            #[inline]
            fn add(&self, other: &Self) -> Self {
                self + other
            }
            #[inline]
            fn sub(&self, other: &Self) -> Self {
                self - other
            }
            #[inline]
            fn scale(&self, k: f64) -> Self {
                self * (k as $t)
            }
            #[inline]
            fn dot(&self, other: &Self) -> f64 {
                Matrix::dot(self, other) as f64
            }
        }
    };
}

impl_sphere_coord!(f32);
impl_sphere_coord!(f64);

/// Generalized cross product of `N - 1` vectors in R^N.
///
/// The result `n` satisfies `n · x = det(span_0, …, span_{N-2}, x)`, so it is
/// orthogonal to every input and reduces to the usual cross product for N = 3.
pub fn generalized_cross<const N: usize>(span: &[Point<N>]) -> Point<N> {
    debug_assert_eq!(span.len() + 1, N, "need N-1 vectors");
    let m = N - 1;
    Point::<N>::from_fn(|i, _| {
        let minor = DMatrix::<f64>::from_fn(m, m, |r, c| {
            let col = if c < i { c } else { c + 1 };
            span.get(r).map_or(0.0, |v| v[col])
        });
        let sign = if (m + i) % 2 == 0 { 1.0 } else { -1.0 };
        sign * minor.determinant()
    })
}

/// `v − 2 (n·v / n·n) n`; a zero normal leaves `v` unchanged.
#[inline]
pub fn reflect_exact<const N: usize>(v: &Point<N>, normal: &Point<N>) -> Point<N> {
    let nn = normal.norm_squared();
    if nn <= f64::MIN_POSITIVE {
        return *v;
    }
    v - normal * (2.0 * normal.dot(v) / nn)
}

/// Unit normal of the mirror through every vertex of `chamber` except `facet`.
pub fn mirror_normal<const N: usize>(chamber: &[Point<N>; N], facet: usize) -> Point<N> {
    let span: Vec<Point<N>> = chamber
        .iter()
        .enumerate()
        .filter(|(k, _)| *k != facet)
        .map(|(_, p)| *p)
        .collect();
    let n = generalized_cross(&span);
    let len = n.norm();
    if len > 0.0 {
        n / len
    } else {
        n
    }
}
