use super::*;
use proptest::prelude::*;

fn f(n: i32, d: i32) -> Fraction {
    Fraction::new(n, d).unwrap()
}

#[test]
fn symmetry_order_families() {
    assert_eq!(Symbol3::from([2, 3, 3]).order(), 24);
    assert_eq!(Symbol3::from([2, 3, 4]).order(), 48);
    assert_eq!(Symbol3::from([2, 3, 5]).order(), 120);
    assert_eq!(Symbol3::from([2, 2, 7]).order(), 28);
    assert_eq!(Symbol3::new(f(2, 1), f(2, 1), f(7, 3)).order(), 28);
    assert_eq!(Symbol3::new(f(3, 1), f(3, 1), f(3, 2)).order(), 24);
    assert_eq!(Symbol3::new(f(2, 1), f(3, 1), f(5, 2)).order(), 120);
}

#[test]
fn symbol3_display_and_parse() {
    let s = Symbol3::new(f(2, 1), f(3, 2), f(5, 3));
    assert_eq!(s.to_string(), "2 3' $'");
    assert_eq!("2 3' $'".parse::<Symbol3>().unwrap(), s);
    assert_eq!("(2, 3/2, 5/3)".parse::<Symbol3>().unwrap(), s);
    assert!("2 3".parse::<Symbol3>().is_err());
    assert!("".parse::<Symbol3>().is_err());
}

#[test]
fn symbol4_linear_and_display() {
    let s = Symbol4::linear(3.into(), 3.into(), 5.into());
    assert_eq!(s, Symbol4::from([2, 2, 3, 3, 5, 2]));
    assert_eq!(s.to_string(), "3 3 5");
    assert_eq!("3 3 5".parse::<Symbol4>().unwrap(), s);

    let d4 = Symbol4::from([2, 2, 3, 3, 2, 3]);
    assert_eq!(d4.to_string(), "3 (3 _ 3)");
    assert_eq!("2 2 3 3 2 3".parse::<Symbol4>().unwrap(), d4);

    let full = Symbol4::new([f(3, 2), f(3, 2), f(3, 2), f(3, 2), f(3, 2), f(3, 2)]);
    assert_eq!(full.to_string(), "[(3' (3' 3') 3' 3') 3']");
    assert!("2 2 3 3".parse::<Symbol4>().is_err());
}

#[test]
fn vertex_figures_of_linear_symbol() {
    let s = Symbol4::from([2, 2, 3, 4, 5, 2]);
    assert_eq!(s.vertex_figure(0), Symbol3::from([2, 2, 5]));
    assert_eq!(s.vertex_figure(1), Symbol3::from([2, 4, 3]));
    assert_eq!(s.vertex_figure(2), Symbol3::from([2, 2, 3]));
    assert_eq!(s.vertex_figure(3), Symbol3::from([2, 4, 5]));
}

#[test]
fn catalogs_have_expected_shape() {
    let s3 = Symbol3::catalog();
    assert_eq!(s3.len(), 60);
    assert_eq!(s3[0], Symbol3::from([2, 3, 3]));
    assert_eq!(s3[12], Symbol3::from([2, 3, 5]));

    let pages = Symbol4::catalog();
    let titles: Vec<_> = pages.iter().map(|p| p.title).collect();
    assert_eq!(
        titles,
        ["I2 × A1 × A1", "I2 × I2", "A3 × A1", "BC3 × A1", "H3 × A1", "A4", "D4", "BC4", "F4"]
    );
    assert_eq!(pages[0].symbols[0], Symbol4::from([2, 2, 2, 2, 2, 2]));
    assert_eq!(pages[5].symbols[0], Symbol4::from([2, 2, 3, 3, 3, 2]));
    let total: usize = pages.iter().map(|p| p.symbols.len()).sum();
    assert_eq!(total, 159);
}

#[test]
fn schwarz_table_is_order_insensitive() {
    assert!(is_schwarz_triangle(5.into(), 3.into(), 2.into()));
    assert!(is_schwarz_triangle(f(5, 2), 2.into(), 3.into()));
    assert!(is_schwarz_triangle(2.into(), 2.into(), f(7, 4)));
    assert!(!is_schwarz_triangle(2.into(), 3.into(), 6.into()));
    assert!(!is_schwarz_triangle(2.into(), 3.into(), f(7, 2)));
}

proptest! {
    #[test]
    fn symbol3_text_round_trips(idx in 0usize..60) {
        let s = Symbol3::catalog()[idx];
        let back: Symbol3 = s.to_string().parse().unwrap();
        prop_assert_eq!(back, s);
    }
}
