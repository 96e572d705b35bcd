//! Face rules per construction. All of them read the tiling only; none looks at
//! positions, so faces never change when the base point moves.

use super::{ionic, Construction, PolyFace};
use crate::tiling::{ChamberId, Element, ElementCategory, Tiling3};

/// Faces for `construction`, together with the variant actually applied.
pub(super) fn faces_for(t: &Tiling3, construction: Construction) -> (Construction, Vec<PolyFace>) {
    match construction {
        Construction::Tiling | Construction::Dual => (construction, chamber_faces(t)),
        Construction::Normal => (construction, normal(t)),
        Construction::Snub => (construction, snub(t)),
        Construction::Dirhombic => match dirhombic(t) {
            Some(faces) => (construction, faces),
            None => (Construction::Snub, snub(t)),
        },
        Construction::Ionic1 => match ionic::ionic1(t) {
            Some(faces) => (construction, faces),
            None => (Construction::Normal, normal(t)),
        },
        Construction::Ionic2 => match ionic::ionic2(t) {
            Some(faces) => (construction, faces),
            None => (Construction::Normal, normal(t)),
        },
        Construction::SnubDual => (construction, snub_dual(t)),
    }
}

/// One face per chamber over its tiling vertices (Tiling and Dual layouts).
fn chamber_faces(t: &Tiling3) -> Vec<PolyFace> {
    t.chambers()
        .iter()
        .map(|c| PolyFace::new(c.element(), c.vertices.iter().map(|v| v.0).collect()))
        .collect()
}

/// One face per tiling vertex, around its ring of chambers.
pub(super) fn normal(t: &Tiling3) -> Vec<PolyFace> {
    t.vertices()
        .iter()
        .map(|v| PolyFace::of_chambers(v.element(), t.ring(&[v.id])))
        .collect()
}

/// Chambers of `ring` with parity `kind`, in ring order.
fn rotation(t: &Tiling3, ring: &[ChamberId], kind: usize) -> Vec<ChamberId> {
    ring.iter()
        .copied()
        .filter(|c| t.chamber(*c).kind == kind)
        .collect()
}

/// Rotation faces (every other chamber around each vertex) plus one snub
/// triangle per odd chamber over its three neighbours.
pub(super) fn snub(t: &Tiling3) -> Vec<PolyFace> {
    let rotation_faces = t.vertices().iter().map(|v| {
        let ring = t.ring(&[v.id]);
        PolyFace::of_chambers(v.element(), rotation(t, &ring, 0))
    });
    let snub_faces = t
        .chambers()
        .iter()
        .filter(|c| c.kind == 1)
        .map(|c| PolyFace::of_chambers(c.element(), t.neighbors(c.id)));
    rotation_faces.chain(snub_faces).collect()
}

/// Requires `symbol[0] == 2`; otherwise `None` and the caller falls back to Snub.
///
/// Each tiling vertex yields two rotation faces: its even chambers, and the
/// chambers across the facet opposite it from its odd chambers. The two families
/// are told apart by element kind `(1 + 2·type) mod 4` and its successor.
fn dirhombic(t: &Tiling3) -> Option<Vec<PolyFace>> {
    if t.symbol()[0] != 2 {
        return None;
    }
    let mut faces = Vec::new();
    for v in t.vertices() {
        let ring = t.ring(&[v.id]);
        let base = (1 + 2 * v.kind) % 4;
        faces.push(PolyFace::of_chambers(
            Element::new(ElementCategory::Vertex, base, v.id.0),
            rotation(t, &ring, 0),
        ));
        let across = rotation(t, &ring, 1)
            .into_iter()
            .filter_map(|c| t.single_next(c, v.id));
        faces.push(PolyFace::of_chambers(
            Element::new(ElementCategory::Vertex, (base + 1) % 4, v.id.0),
            across,
        ));
    }
    for c in t.chambers().iter().filter(|c| c.kind == 1) {
        faces.push(PolyFace::of_chambers(
            Element::new(ElementCategory::Face, 1, c.id.0),
            t.neighbors(c.id),
        ));
    }
    for c in t.chambers().iter().filter(|c| c.kind == 0) {
        // Type-0 vertices of the neighbours: this chamber's own and the one
        // across facet 0.
        let mut hubs = Vec::new();
        for n in t.neighbors(c.id) {
            let hub = t.chamber(n).vertices[0];
            if !hubs.contains(&hub) {
                hubs.push(hub);
            }
        }
        let corners = hubs.into_iter().flat_map(move |hub| {
            t.ring(&[hub])
                .into_iter()
                .filter(move |n| *n != c.id && t.chamber(*n).kind == 0)
        });
        faces.push(PolyFace::of_chambers(
            Element::new(ElementCategory::Face, 1, c.id.0),
            corners.collect::<Vec<_>>(),
        ));
    }
    Some(faces)
}

/// One face per odd chamber interleaving its neighbours (uniform vertices) with
/// its own tiling vertices (offset by the chamber count); tiling vertices of
/// types whose entry is 2 are skipped.
fn snub_dual(t: &Tiling3) -> Vec<PolyFace> {
    let offset = t.order();
    let symbol = *t.symbol();
    t.chambers()
        .iter()
        .filter(|c| c.kind == 1)
        .map(|c| {
            let mut vertices = Vec::with_capacity(6);
            for k in 0..3 {
                if symbol[k].numerator() != 2 {
                    vertices.push(offset + c.vertices[k].0);
                }
                // Neighbour across facet k+2 shares vertices k and k+1.
                if let Some(n) = c.neighbor((k + 2) % 3) {
                    vertices.push(n.0);
                }
            }
            PolyFace::new(c.element(), vertices)
        })
        .collect()
}
