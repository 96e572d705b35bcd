//! Ionic (half-symmetric) constructions: keep half of the Normal faces' corners,
//! chosen by two-colouring the chambers.
//!
//! The colouring is seeded with chamber 0 picked and spread breadth first:
//! - around the chiral vertex of each dequeued chamber, by the variant's rule
//!   (Ionic1: same parity keeps the flag, opposite parity flips it; Ionic2: the
//!   whole ring shares the flag);
//! - around its two other vertices, from the first two consecutive decided
//!   chambers of the ring, extrapolating the period-4 pattern `a, b, !a, !b`.
//!
//! The seed pair is the first one found in ring order at the moment the chamber
//! is dequeued, so the result depends on queue order; keep that order stable.
//! If the queue drains before every chamber is decided, the colouring fails and
//! the caller falls back to Normal.

use std::collections::VecDeque;

use super::PolyFace;
use crate::symbol::Symbol3;
use crate::tiling::{ChamberId, Tiling3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChiralRule {
    Alternate,
    Uniform,
}

#[derive(Clone, Debug)]
pub(super) struct Colouring {
    pub chiral: usize,
    pub picked: Vec<bool>,
}

/// Chiral vertex type, or `None` when fewer than two entries have an even
/// numerator. The chiral type is the last entry with an odd numerator (0 if
/// every entry is even).
pub(super) fn chiral_type(symbol: &Symbol3) -> Option<usize> {
    let even = |k: usize| symbol[k].numerator() % 2 == 0;
    if (0..3).filter(|&k| even(k)).count() < 2 {
        return None;
    }
    Some(if !even(2) {
        2
    } else if !even(1) {
        1
    } else {
        0
    })
}

fn colour(t: &Tiling3, rule: ChiralRule) -> Option<Colouring> {
    let chiral = chiral_type(t.symbol())?;
    let rings: Vec<Vec<ChamberId>> = t.vertices().iter().map(|v| t.ring(&[v.id])).collect();
    let mut flags: Vec<Option<bool>> = vec![None; t.order()];
    flags[0] = Some(true);
    let mut left = t.order() - 1;
    let mut queue = VecDeque::from([ChamberId(0)]);

    while left > 0 {
        let target = queue.pop_front()?;
        let tc = t.chamber(target);
        let flag = flags[target.0]?;

        for &f in &rings[tc.vertices[chiral].0] {
            if flags[f.0].is_none() {
                let same = t.chamber(f).kind == tc.kind;
                flags[f.0] = Some(match rule {
                    ChiralRule::Alternate => flag == same,
                    ChiralRule::Uniform => flag,
                });
                queue.push_back(f);
                left -= 1;
            }
        }

        for offset in 1..3 {
            let ring = &rings[tc.vertices[(chiral + offset) % 3].0];
            let len = ring.len();
            let seed = (0..len).find_map(|i| {
                let pair = (flags[ring[i].0], flags[ring[(i + 1) % len].0]);
                match pair {
                    (Some(a), Some(b)) => Some((i, [a, b, !a, !b])),
                    _ => None,
                }
            });
            let Some((base, pattern)) = seed else {
                continue;
            };
            for i in 2..len {
                let f = ring[(base + i) % len];
                if flags[f.0].is_none() {
                    flags[f.0] = Some(pattern[i % 4]);
                    queue.push_back(f);
                    left -= 1;
                }
            }
        }
    }
    let picked = flags.into_iter().map(|f| f.unwrap_or(false)).collect();
    Some(Colouring { chiral, picked })
}

/// Picked corners around every vertex, plus one quadrilateral per unpicked
/// chamber pair across the chiral facet.
pub(super) fn ionic1(t: &Tiling3) -> Option<Vec<PolyFace>> {
    let Colouring { chiral, picked } = colour(t, ChiralRule::Alternate)?;
    let mut faces = rotation_faces(t, &picked);
    let across = |c: ChamberId, k: usize| t.neighbor(c, k % 3);
    for face in t.chambers().iter().filter(|c| !picked[c.id.0]) {
        let Some(pair) = across(face.id, chiral) else {
            continue;
        };
        if face.id > pair {
            continue;
        }
        let element = if face.kind == 0 {
            t.chamber(pair).element()
        } else {
            face.element()
        };
        let corners = [
            across(face.id, chiral + 1),
            across(face.id, chiral + 2),
            across(pair, chiral + 2),
            across(pair, chiral + 1),
        ];
        faces.push(PolyFace::of_chambers(element, corners.into_iter().flatten()));
    }
    Some(faces)
}

/// Picked corners around every vertex. Chiral vertices are either fully picked
/// or fully unpicked; an unpicked one takes the ring one step further out.
pub(super) fn ionic2(t: &Tiling3) -> Option<Vec<PolyFace>> {
    let Colouring { chiral, picked } = colour(t, ChiralRule::Uniform)?;
    let faces = t
        .vertices()
        .iter()
        .map(|v| {
            let ring = t.ring(&[v.id]);
            let kept: Vec<ChamberId> = ring.iter().copied().filter(|c| picked[c.0]).collect();
            if !kept.is_empty() {
                return PolyFace::of_chambers(v.element(), kept);
            }
            let element = ring
                .iter()
                .map(|c| t.chamber(*c))
                .find(|c| c.kind == 1)
                .map_or(v.element(), |c| c.element());
            PolyFace::of_chambers(element, ring.iter().filter_map(|c| t.neighbor(*c, chiral)))
        })
        .collect();
    Some(faces)
}

fn rotation_faces(t: &Tiling3, picked: &[bool]) -> Vec<PolyFace> {
    t.vertices()
        .iter()
        .map(|v| {
            let ring = t.ring(&[v.id]);
            PolyFace::of_chambers(v.element(), ring.into_iter().filter(|c| picked[c.0]))
        })
        .collect()
}

#[cfg(test)]
pub(super) fn picked(t: &Tiling3, uniform: bool) -> Option<Vec<bool>> {
    let rule = if uniform {
        ChiralRule::Uniform
    } else {
        ChiralRule::Alternate
    };
    colour(t, rule).map(|c| c.picked)
}
