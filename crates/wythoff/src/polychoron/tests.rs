use super::*;
use crate::sphere::cfg::RENDER_EPS;
use crate::symbol::Symbol4;
use crate::tiling::ElementCategory;
use nalgebra::Vector4;
use rand::{rngs::StdRng, SeedableRng};

fn polychoron(s: [i32; 6]) -> Polychoron<Point4> {
    Polychoron::new(Arc::new(Tiling4::new(Symbol4::from(s)).unwrap()))
}

#[test]
fn simplex_group_layout() {
    let p = polychoron([2, 2, 3, 3, 3, 2]);
    let t = p.tiling().clone();
    assert_eq!(p.vertices().len(), 120);
    assert_eq!(p.faces().len(), t.edges().len());
    assert_eq!(p.cells().len(), t.vertices().len());
    assert_eq!(p.base_point(), Point4::new(0.0, 0.0, 0.0, 1.0));
    for v in p.vertices() {
        assert_eq!(v.element.category, ElementCategory::Cell);
        assert!((v.position.norm() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn faces_go_around_edges() {
    let p = polychoron([2, 2, 3, 3, 4, 2]);
    let symbol = *p.tiling().symbol();
    for (f, e) in p.faces().iter().zip(p.tiling().edges()) {
        assert_eq!(f.element, e.element());
        assert_eq!(f.cells, [e.a.0, e.b.0]);
        let n = symbol[e.kind].numerator() as usize;
        assert_eq!(f.vertices.len(), 2 * n);
    }
}

#[test]
fn cells_list_their_faces() {
    let p = polychoron([2, 2, 3, 3, 3, 2]);
    let total: usize = p.cells().iter().map(|c| c.faces.len()).sum();
    assert_eq!(total, 2 * p.faces().len());
    for (i, cell) in p.cells().iter().enumerate() {
        assert_eq!(cell.element.category, ElementCategory::Vertex);
        assert!(cell.faces.windows(2).all(|w| w[0] < w[1]));
        for &f in &cell.faces {
            assert!(p.faces()[f].cells.contains(&i));
        }
    }
}

#[test]
fn base_at_a_chamber_vertex_collapses_onto_its_type() {
    let mut p = polychoron([2, 2, 3, 3, 3, 2]);
    let chamber = p.tiling().chamber_points(ChamberId(0));
    p.set_base_point(chamber[0]);
    let counts = p.tiling().vertex_counts();
    assert_eq!(p.distinct_vertex_count(RENDER_EPS), counts[0]);

    for cell in p.cells() {
        let expected = cell.normal * chamber[cell.element.kind].dot(&chamber[0]);
        assert!((cell.center - expected).norm() < 1e-12);
        if cell.element.kind == 0 {
            assert!((cell.center - cell.normal).norm() < 1e-12);
        }
    }
}

#[test]
fn random_base_keeps_topology() {
    let mut p = polychoron([2, 2, 3, 3, 4, 2]);
    let faces = p.faces().to_vec();
    let mut rng = StdRng::seed_from_u64(7);
    let base = p.tiling().fundamental().random_point(&mut rng);
    p.set_base_point(base * 3.0);
    assert_eq!(p.faces(), &faces[..]);
    assert!((p.base_point().norm() - 1.0).abs() < 1e-12);
    assert_eq!(p.distinct_vertex_count(RENDER_EPS), p.tiling().order());
}

#[test]
fn single_precision_tracks_double() {
    let t = Arc::new(Tiling4::new(Symbol4::from([2, 2, 3, 3, 3, 2])).unwrap());
    let base = t.fundamental().incenter();
    let mut hi: Polychoron<Point4> = Polychoron::new(t.clone());
    let mut lo: Polychoron<Vector4<f32>> = Polychoron::new(t);
    hi.set_base_point(base);
    lo.set_base_point(base);
    for (a, b) in hi.vertices().iter().zip(lo.vertices()) {
        assert!((a.position - b.position.to_exact()).norm() < 1e-5);
    }
    for (a, b) in hi.cells().iter().zip(lo.cells()) {
        assert!((a.center - b.center.to_exact()).norm() < 1e-5);
    }
}
