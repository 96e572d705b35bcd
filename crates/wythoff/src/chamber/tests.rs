use super::*;
use crate::symbol::{Fraction, Symbol3, Symbol4};
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::PI;

/// Sorted interior dihedral angles of the mirrors through vertex `i`.
fn dihedrals_at<const N: usize>(ch: &FundamentalChamber<N>, i: usize) -> Vec<f64> {
    let inward = |k: usize| {
        let n = ch.mirror(k);
        if n.dot(&ch.vertices[k]) < 0.0 {
            -n
        } else {
            n
        }
    };
    let others: Vec<usize> = (0..N).filter(|&k| k != i).collect();
    let mut out = Vec::new();
    for (a, &p) in others.iter().enumerate() {
        for &q in &others[a + 1..] {
            out.push((-inward(p).dot(&inward(q))).clamp(-1.0, 1.0).acos());
        }
    }
    out.sort_by(|x, y| x.total_cmp(y));
    out
}

fn sorted_angles(fs: &[Fraction]) -> Vec<f64> {
    let mut v: Vec<f64> = fs.iter().map(|f| f.angle()).collect();
    v.sort_by(|x, y| x.total_cmp(y));
    v
}

fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        assert!((x - y).abs() < tol, "{a:?} vs {b:?}");
    }
}

#[test]
fn triangle_angles_match_symbol() {
    for symbol in Symbol3::catalog() {
        let ch = FundamentalChamber::new(symbol.fundamental_chamber().unwrap());
        for v in &ch.vertices {
            assert!((v.norm() - 1.0).abs() < 1e-12);
        }
        for i in 0..3 {
            // The two mirrors through vertex i meet at angle π / symbol[i].
            let got = dihedrals_at(&ch, i);
            assert_close(&got, &[symbol[i].angle()], 1e-9);
        }
    }
}

#[test]
fn tetrahedron_vertex_figures_match_symbol() {
    for page in Symbol4::catalog() {
        for symbol in page.symbols {
            let ch = FundamentalChamber::new(symbol.fundamental_chamber().unwrap());
            for i in 0..4 {
                let fig = symbol.vertex_figure(i);
                let got = dihedrals_at(&ch, i);
                assert_close(&got, &sorted_angles(fig.fractions()), 1e-4);
            }
        }
    }
}

#[test]
fn infeasible_symbols_are_rejected_up_front() {
    let bad3 = [
        Symbol3::from([2, 2, 1]),
        Symbol3::from([2, 3, 6]),
        Symbol3::from([2, 3, 7]),
    ];
    for s in bad3 {
        assert!(matches!(
            s.fundamental_chamber(),
            Err(WythoffError::Infeasible { .. })
        ));
    }
    let bad4 = [
        Symbol4::from([2, 2, 4, 3, 4, 2]),
        Symbol4::from([2, 2, 5, 3, 5, 2]),
        Symbol4::from([2, 2, 3, 6, 2, 2]),
    ];
    for s in bad4 {
        assert!(matches!(
            s.fundamental_chamber(),
            Err(WythoffError::Infeasible { .. })
        ));
    }
}

#[test]
fn valences_and_ceilings() {
    let s = Symbol3::from([2, 3, 5]);
    assert_eq!(s.valences(), [4, 6, 10]);
    assert_eq!(s.max_chambers(), 120);
    assert_eq!(s.max_vertices(), 30 + 20 + 12);

    let a4 = Symbol4::from([2, 2, 3, 3, 3, 2]);
    assert_eq!(a4.valences(), [12, 24, 12, 24]);
    assert_eq!(a4.max_chambers(), 384);
    assert_eq!(a4.max_vertices(), 32 + 16 + 32 + 16);
    assert_eq!(Symbol4::from([2, 2, 3, 4, 3, 2]).max_chambers(), 1152);
    assert_eq!(Symbol4::from([2, 2, 3, 3, 5, 2]).max_chambers(), 14400);
}

#[test]
fn triangle_diagnostic_points() {
    let s = Symbol3::from([2, 3, 4]);
    let ch = FundamentalChamber::new(s.fundamental_chamber().unwrap());
    let inc = ch.incenter();
    assert!(ch.contains(&inc, 1e-12));
    // Incenter is equidistant from the three sides.
    let d: Vec<f64> = (0..3).map(|i| ch.mirror(i).dot(&inc).abs()).collect();
    assert!((d[0] - d[1]).abs() < 1e-9 && (d[1] - d[2]).abs() < 1e-9);
    for i in 0..3 {
        let p = ch.bisector_cross(i);
        assert!(ch.mirror(i).dot(&p).abs() < 1e-12);
        assert!(ch.contains(&p, 1e-9));
    }
    assert_eq!(ch.pick_vertex(&ch.vertices[1]), Some(1));
    assert_eq!(ch.pick_vertex(&(ch.vertices[2] * 0.99)), Some(2));
    assert_eq!(ch.pick_vertex(&inc), None);
}

#[test]
fn tetrahedron_diagnostic_points() {
    let s = Symbol4::from([2, 2, 3, 4, 3, 2]);
    let ch = FundamentalChamber::new(s.fundamental_chamber().unwrap());
    assert!(ch.contains(&ch.incenter(), 1e-12));
    for i in 0..4 {
        let t = ch.trisector_cross(i);
        assert!(ch.mirror(i).dot(&t).abs() < 1e-9);
        for j in (i + 1)..4 {
            let b = ch.bisector_cross(i, j);
            for k in (0..4).filter(|k| *k != i && *k != j) {
                assert!(ch.mirror(k).dot(&b).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn random_points_are_interior_and_seeded() {
    let s = Symbol3::from([2, 3, 5]);
    let ch = FundamentalChamber::new(s.fundamental_chamber().unwrap());
    let mut rng = StdRng::seed_from_u64(7);
    let first: Vec<_> = (0..16).map(|_| ch.random_point(&mut rng)).collect();
    for p in &first {
        assert!((p.norm() - 1.0).abs() < 1e-12);
        assert!(ch.contains(p, 1e-12));
    }
    let mut again = StdRng::seed_from_u64(7);
    assert_eq!(ch.random_point(&mut again), first[0]);
}

#[test]
fn lookup_tables() {
    let p = snub_point(&Symbol3::from([2, 3, 5])).unwrap();
    assert!((p.x - 0.154168844).abs() < 1e-12);
    assert!(snub_point(&Symbol3::from([3, 3, 3])).is_none());
    let five_halves = Fraction::new(5, 2).unwrap();
    let sym = Symbol3::new(2.into(), 3.into(), five_halves);
    assert!(dirhombic_point(&sym).is_some());
    assert!(dirhombic_point(&Symbol3::from([2, 3, 5])).is_none());
    assert_eq!(PI / 2.0, Fraction::integer(2).angle());
}
