//! JSON summaries of a built polytope: counts, base point, face-size histogram.
//!
//! Summaries describe an artifact; they never carry the tiling itself.

use std::collections::BTreeMap;

use serde::Serialize;
use wythoff::api::{tolerances::RENDER_EPS, Point3, Point4, Polychoron, Polyhedron};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuildSummary {
    pub symbol: String,
    pub dim: usize,
    pub construction: String,
    /// Construction actually applied after fallbacks.
    pub effective: String,
    pub base: Vec<f64>,
    pub chambers: usize,
    pub vertices: usize,
    pub distinct_vertices: usize,
    pub faces: usize,
    /// Faces with at least three distinct corners (S² only).
    pub visible_faces: Option<usize>,
    pub cells: Option<usize>,
    /// Face size (corner count) to number of faces.
    pub face_sizes: BTreeMap<usize, usize>,
}

fn histogram(sizes: impl IntoIterator<Item = usize>) -> BTreeMap<usize, usize> {
    let mut out = BTreeMap::new();
    for s in sizes {
        *out.entry(s).or_insert(0) += 1;
    }
    out
}

impl BuildSummary {
    pub fn of_polyhedron(p: &Polyhedron<Point3>) -> Self {
        let base = p.base_point();
        Self {
            symbol: p.tiling().symbol().to_string(),
            dim: 3,
            construction: p.construction().to_string(),
            effective: p.effective().to_string(),
            base: base.iter().copied().collect(),
            chambers: p.tiling().order(),
            vertices: p.vertices().len(),
            distinct_vertices: p.distinct_vertex_count(RENDER_EPS),
            faces: p.faces().len(),
            visible_faces: Some(p.visible_faces(RENDER_EPS).count()),
            cells: None,
            face_sizes: histogram(
                p.faces()
                    .iter()
                    .map(|f| f.distinct_len(p.vertices(), RENDER_EPS)),
            ),
        }
    }

    pub fn of_polychoron(p: &Polychoron<Point4>) -> Self {
        let base = p.base_point();
        Self {
            symbol: p.tiling().symbol().to_string(),
            dim: 4,
            construction: "normal".to_string(),
            effective: "normal".to_string(),
            base: base.iter().copied().collect(),
            chambers: p.tiling().order(),
            vertices: p.vertices().len(),
            distinct_vertices: p.distinct_vertex_count(RENDER_EPS),
            faces: p.faces().len(),
            visible_faces: None,
            cells: Some(p.cells().len()),
            face_sizes: histogram(p.faces().iter().map(|f| f.vertices.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wythoff::api::{Construction, Symbol3, Symbol4, Tiling3, Tiling4};

    #[test]
    fn octahedron_summary() {
        let t = Arc::new(Tiling3::new(Symbol3::from([2, 3, 3])).unwrap());
        let p = Polyhedron::new(t, Construction::Normal);
        let s = BuildSummary::of_polyhedron(&p);
        assert_eq!(s.chambers, 24);
        assert_eq!(s.vertices, 24);
        assert_eq!(s.distinct_vertices, 6);
        assert_eq!(s.visible_faces, Some(8));
        assert_eq!(s.face_sizes.get(&3), Some(&8));
        assert_eq!(s.face_sizes.values().sum::<usize>(), s.faces);
        assert_eq!(s.base.len(), 3);
    }

    #[test]
    fn polychoron_summary_serializes() {
        let t = Arc::new(Tiling4::new(Symbol4::from([2, 2, 3, 3, 3, 2])).unwrap());
        let p = Polychoron::new(t);
        let s = BuildSummary::of_polychoron(&p);
        assert_eq!(s.vertices, 120);
        assert_eq!(s.cells, Some(30));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["dim"], 4);
        assert!(json["visible_faces"].is_null());
        assert_eq!(json["base"][3], 1.0);
    }
}
