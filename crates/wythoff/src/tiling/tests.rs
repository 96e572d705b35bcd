//! Tiling generator and query tests.

use super::*;
use crate::sphere::{Point3, Point4, SphereCoord};
use crate::symbol::Fraction;
use nalgebra::Vector3;
use proptest::prelude::*;

fn tiling3(s: [i32; 3]) -> Tiling3 {
    Tiling3::new(Symbol3::from(s)).unwrap()
}

fn tiling4(s: [i32; 6]) -> Tiling4 {
    Tiling4::new(Symbol4::from(s)).unwrap()
}

fn assert_closed<S: ChamberSymbol<N>, const N: usize>(t: &Tiling<S, N>) {
    for v in t.vertices() {
        assert_eq!(v.chambers().len(), v.valence, "vertex {:?}", v.id);
        assert!((v.point.norm() - 1.0).abs() < 1e-9);
    }
    for c in t.chambers() {
        for facet in 0..N {
            let n = c.neighbor(facet).expect("open facet");
            let other = t.chamber(n);
            assert_eq!(other.neighbor(facet), Some(c.id));
            assert_ne!(other.kind, c.kind);
            for k in 0..N {
                assert_eq!(other.vertices[k] == c.vertices[k], k != facet);
            }
        }
    }
}

#[test]
fn tetrahedral_group_counts() {
    let t = tiling3([2, 3, 3]);
    assert_eq!(t.order(), 24);
    assert_eq!(t.vertex_counts(), [6, 4, 4]);
    assert_eq!(t.edges().len(), 36);
    assert_closed(&t);
}

#[test]
fn every_catalog_symbol_tiles_to_its_order() {
    for s in Symbol3::catalog() {
        let t = Tiling3::new(s).unwrap_or_else(|e| panic!("{s}: {e}"));
        assert_eq!(t.order(), s.order(), "{s}");
        assert_closed(&t);
        for (kind, count) in t.vertex_counts().into_iter().enumerate() {
            assert_eq!(count * s.valences()[kind], t.order(), "{s}");
        }
    }
}

#[test]
fn star_symbols_tile() {
    let five_halves = Fraction::new(5, 2).unwrap();
    let t = Tiling3::new(Symbol3::new(2.into(), 3.into(), five_halves)).unwrap();
    assert_eq!(t.order(), 120);
    assert_eq!(t.vertex_counts(), [30, 20, 12]);
}

#[test]
fn a4_tiles_the_three_sphere() {
    let t = tiling4([2, 2, 3, 3, 3, 2]);
    assert_eq!(t.symbol().valences(), [12, 24, 12, 24]);
    assert_eq!(t.order(), 120);
    assert_eq!(t.vertex_counts(), [10, 5, 10, 5]);
    assert_closed(&t);
}

#[test]
fn bc4_and_prism_groups() {
    let b4 = tiling4([2, 2, 3, 3, 4, 2]);
    assert_eq!(b4.order(), 384);
    assert_closed(&b4);
    let a3a1 = tiling4([2, 2, 2, 3, 3, 2]);
    assert_eq!(a3a1.order(), 48);
    assert_eq!(a3a1.vertex_counts(), [4, 4, 6, 2]);
    assert_closed(&a3a1);
}

#[test]
fn infeasible_fails_before_generation() {
    let err = Tiling3::new(Symbol3::from([2, 2, 1])).unwrap_err();
    assert!(matches!(err, WythoffError::Infeasible { .. }));
    let err = Tiling4::new(Symbol4::from([2, 2, 4, 3, 4, 2])).unwrap_err();
    assert!(matches!(err, WythoffError::Infeasible { .. }));
}

#[test]
fn dense_groups_do_not_tile() {
    let seven_halves = Fraction::new(7, 2).unwrap();
    let s = Symbol3::new(2.into(), 3.into(), seven_halves);
    match Tiling3::new(s) {
        Err(WythoffError::DoesNotTile { chambers, limit, .. }) => {
            assert_eq!(limit, s.order());
            assert!(chambers <= limit + 1);
        }
        other => panic!("expected DoesNotTile, got {other:?}"),
    }
}

#[test]
fn ceiling_override_is_honoured() {
    let cfg = TilingCfg {
        max_chambers: Some(60),
        ..TilingCfg::default()
    };
    let err = Tiling3::with_cfg(Symbol3::from([2, 3, 5]), cfg).unwrap_err();
    assert!(matches!(err, WythoffError::DoesNotTile { limit: 60, .. }));

    let bad_eps = TilingCfg {
        merge_eps: Some(0.0),
        ..TilingCfg::default()
    };
    let err = Tiling3::with_cfg(Symbol3::from([2, 3, 5]), bad_eps).unwrap_err();
    assert!(matches!(err, WythoffError::InvalidArgument { .. }));
}

#[test]
fn vertex_rings_are_cycles() {
    let t = tiling3([2, 3, 4]);
    for v in t.vertices() {
        let ring = t.ring(&[v.id]);
        assert_eq!(ring.len(), v.valence);
        assert_eq!(ring[0], *v.chambers().iter().min().unwrap());
        for w in 0..ring.len() {
            let (a, b) = (ring[w], ring[(w + 1) % ring.len()]);
            assert!(t.neighbors(a).contains(&b), "ring breaks at {w}");
        }
    }
}

#[test]
fn edge_rings_match_dihedral_angle() {
    let t = tiling4([2, 2, 3, 3, 4, 2]);
    let symbol = *t.symbol();
    for e in t.edges() {
        let ring = t.edge_ring(e);
        let n = symbol[e.kind].numerator() as usize;
        assert_eq!(ring.len(), 2 * n, "edge {:?}", e);
        for c in &ring {
            assert!(t.chamber(*c).contains(e.a) && t.chamber(*c).contains(e.b));
        }
    }
}

#[test]
fn edges_are_ordered_and_unique() {
    let t = tiling4([2, 2, 3, 3, 3, 2]);
    let mut seen = std::collections::HashSet::new();
    let mut last = VertexId(0);
    for e in t.edges() {
        assert!(e.a < e.b);
        assert!(e.a >= last);
        last = e.a;
        assert!(seen.insert((e.a, e.b)));
        let (ka, kb) = (t.vertex(e.a).kind, t.vertex(e.b).kind);
        assert_eq!(e.kind, Symbol4::edge_kind(ka, kb));
    }
    assert_eq!(Symbol4::edge_kind(0, 3), 4);
    assert_eq!(Symbol4::edge_kind(3, 2), 5);
    assert_eq!(Symbol3::edge_kind(0, 2), 1);
}

#[test]
fn chamber_queries() {
    let t = tiling3([2, 3, 3]);
    let c0 = ChamberId(0);
    let ns = t.neighbors(c0);
    assert_eq!(ns.len(), 3);
    assert!(ns.windows(2).all(|w| w[0] < w[1]));
    for facet in 0..3 {
        let n = t.neighbor(c0, facet).unwrap();
        assert_eq!(t.unshared_index(c0, n), Some(facet));
        let v = t.chamber(c0).vertices[facet];
        assert_eq!(t.single_next(c0, v), Some(n));
    }
    assert_eq!(t.unshared_index(c0, c0), None);
}

#[test]
fn copy_plan_reaches_every_vertex_position() {
    let t = tiling4([2, 2, 3, 3, 3, 2]);
    let plan = t.copy_plan();
    assert_eq!(plan.len(), t.order());
    for (i, step) in plan.iter().enumerate().skip(1) {
        assert!(step.source.0 < i);
        assert_eq!(t.chamber(step.source).neighbor(step.facet), Some(ChamberId(i)));
    }
    let fundamental = t.chamber_points(ChamberId(0));
    for k in 0..4 {
        let images = t.propagate(fundamental[k]);
        for c in t.chambers() {
            let expected = t.vertex(c.vertices[k]).point;
            assert!((images[c.id.0] - expected).norm() < 1e-6);
        }
    }
}

#[test]
fn propagate_in_single_precision() {
    let t = tiling3([2, 3, 5]);
    let base: Point3 = t.fundamental().incenter();
    let exact = t.propagate(base);
    let mut low = Vec::new();
    t.propagate_into(Vector3::<f32>::from_exact(&base), &mut low);
    assert_eq!(low.len(), exact.len());
    for (a, b) in low.iter().zip(&exact) {
        assert!((a.to_exact() - b).norm() < 1e-5);
    }
}

#[test]
fn fundamental_matches_symbol_chamber() {
    let s = Symbol4::from([2, 2, 3, 3, 3, 2]);
    let t = Tiling4::new(s).unwrap();
    let expected: [Point4; 4] = s.fundamental_chamber().unwrap();
    assert_eq!(t.fundamental().vertices, expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn copies_land_in_their_chambers(w0 in 0.05f64..1.0, w1 in 0.05f64..1.0, w2 in 0.05f64..1.0) {
        let t = tiling3([2, 3, 4]);
        let base = t.fundamental().interior_point(&[w0, w1, w2]);
        let images = t.propagate(base);
        for c in t.chambers() {
            let ch = FundamentalChamber::new(t.chamber_points(c.id));
            prop_assert!(ch.contains(&images[c.id.0], 1e-9));
            prop_assert!((images[c.id.0].norm() - 1.0).abs() < 1e-9);
        }
        // Deterministic: same base, same images.
        prop_assert_eq!(t.propagate(base), images);
    }
}
