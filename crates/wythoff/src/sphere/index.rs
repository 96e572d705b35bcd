//! Epsilon-bucketed hash grid for approximate vertex lookup.
//!
//! Points are bucketed by `floor(x_i / eps)`. Two points within `eps` of each
//! other per component differ by at most one cell per axis, so a lookup scans the
//! `3^N` neighbouring cells and compares components only there.

use std::collections::HashMap;

use super::coord::Point;

#[derive(Clone, Debug)]
pub struct SpatialIndex<const N: usize> {
    eps: f64,
    cells: HashMap<[i64; N], Vec<(usize, Point<N>)>>,
    len: usize,
}

impl<const N: usize> SpatialIndex<N> {
    pub fn new(eps: f64) -> Self {
        Self {
            eps: eps.max(f64::EPSILON),
            cells: HashMap::new(),
            len: 0,
        }
    }

    #[inline]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn cell_of(&self, p: &Point<N>) -> [i64; N] {
        std::array::from_fn(|i| (p[i] / self.eps).floor() as i64)
    }

    pub fn insert(&mut self, p: Point<N>, id: usize) {
        let key = self.cell_of(&p);
        self.cells.entry(key).or_default().push((id, p));
        self.len += 1;
    }

    /// Lowest id whose point matches `p` within `eps` per component.
    pub fn find(&self, p: &Point<N>) -> Option<usize> {
        let base = self.cell_of(p);
        let mut best: Option<usize> = None;
        let neighbourhood = 3usize.pow(N as u32);
        for code in 0..neighbourhood {
            let mut rest = code;
            let key: [i64; N] = std::array::from_fn(|i| {
                let off = (rest % 3) as i64 - 1;
                rest /= 3;
                base[i] + off
            });
            let Some(bucket) = self.cells.get(&key) else {
                continue;
            };
            for (id, q) in bucket {
                let close = q.iter().zip(p.iter()).all(|(a, b)| (a - b).abs() <= self.eps);
                if close && best.map_or(true, |b| *id < b) {
                    best = Some(*id);
                }
            }
        }
        best
    }
}
