//! Symbol catalogs of the interactive tools and the Schwarz triangle table.
//!
//! Entries are `(numerator, denominator)` pairs already in lowest terms.

use super::{Fraction, Symbol3, Symbol4};

type Entry = (i32, i32);

fn frac((n, d): Entry) -> Fraction {
    Fraction::from_reduced(n, d)
}

const SYMBOLS3: [[Entry; 3]; 60] = [
    [(2, 1), (3, 1), (3, 1)],
    [(2, 1), (3, 1), (3, 2)],
    [(2, 1), (3, 2), (3, 2)],
    [(3, 1), (3, 1), (3, 2)],
    [(3, 2), (3, 2), (3, 2)],
    [(2, 1), (3, 1), (4, 1)],
    [(2, 1), (3, 1), (4, 3)],
    [(2, 1), (3, 2), (4, 1)],
    [(2, 1), (3, 2), (4, 3)],
    [(3, 1), (4, 1), (4, 3)],
    [(3, 2), (4, 1), (4, 1)],
    [(3, 2), (4, 3), (4, 3)],
    [(2, 1), (3, 1), (5, 1)],
    [(2, 1), (3, 1), (5, 4)],
    [(2, 1), (3, 2), (5, 1)],
    [(2, 1), (3, 2), (5, 4)],
    [(2, 1), (3, 1), (5, 2)],
    [(2, 1), (3, 1), (5, 3)],
    [(2, 1), (3, 2), (5, 2)],
    [(2, 1), (3, 2), (5, 3)],
    [(2, 1), (5, 1), (5, 2)],
    [(2, 1), (5, 1), (5, 3)],
    [(2, 1), (5, 4), (5, 2)],
    [(2, 1), (5, 4), (5, 3)],
    [(3, 1), (3, 1), (5, 4)],
    [(3, 1), (3, 2), (5, 1)],
    [(3, 2), (3, 2), (5, 4)],
    [(3, 1), (3, 1), (5, 2)],
    [(3, 1), (3, 2), (5, 3)],
    [(3, 2), (3, 2), (5, 2)],
    [(3, 1), (5, 1), (5, 4)],
    [(3, 2), (5, 1), (5, 1)],
    [(3, 2), (5, 4), (5, 4)],
    [(3, 1), (5, 1), (5, 3)],
    [(3, 1), (5, 4), (5, 2)],
    [(3, 2), (5, 1), (5, 2)],
    [(3, 2), (5, 4), (5, 3)],
    [(3, 1), (5, 2), (5, 3)],
    [(3, 2), (5, 2), (5, 2)],
    [(3, 2), (5, 3), (5, 3)],
    [(5, 1), (5, 1), (5, 4)],
    [(5, 4), (5, 4), (5, 4)],
    [(5, 2), (5, 2), (5, 2)],
    [(5, 2), (5, 3), (5, 3)],
    [(2, 1), (2, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1)],
    [(2, 1), (2, 1), (4, 1)],
    [(2, 1), (2, 1), (4, 3)],
    [(2, 1), (2, 1), (5, 1)],
    [(2, 1), (2, 1), (5, 4)],
    [(2, 1), (2, 1), (5, 2)],
    [(2, 1), (2, 1), (5, 3)],
    [(2, 1), (2, 1), (6, 1)],
    [(2, 1), (2, 1), (6, 5)],
    [(2, 1), (2, 1), (7, 1)],
    [(2, 1), (2, 1), (7, 6)],
    [(2, 1), (2, 1), (7, 2)],
    [(2, 1), (2, 1), (7, 5)],
    [(2, 1), (2, 1), (7, 3)],
    [(2, 1), (2, 1), (7, 4)],
];

/// Finite triangle groups (Schwarz triangles) with entries in any order.
const SCHWARZ: [[Entry; 3]; 60] = [
    [(2, 1), (2, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1)],
    [(2, 1), (2, 1), (3, 2)],
    [(2, 1), (2, 1), (4, 1)],
    [(2, 1), (2, 1), (4, 3)],
    [(2, 1), (2, 1), (5, 1)],
    [(2, 1), (2, 1), (5, 2)],
    [(2, 1), (2, 1), (5, 3)],
    [(2, 1), (2, 1), (5, 4)],
    [(2, 1), (2, 1), (6, 1)],
    [(2, 1), (2, 1), (7, 1)],
    [(2, 1), (2, 1), (7, 2)],
    [(2, 1), (2, 1), (7, 3)],
    [(2, 1), (2, 1), (7, 4)],
    [(2, 1), (2, 1), (7, 5)],
    [(2, 1), (2, 1), (7, 6)],
    [(2, 1), (3, 1), (3, 1)],
    [(2, 1), (3, 1), (3, 2)],
    [(2, 1), (3, 2), (3, 2)],
    [(3, 1), (3, 1), (3, 2)],
    [(3, 2), (3, 2), (3, 2)],
    [(2, 1), (3, 1), (4, 1)],
    [(2, 1), (3, 1), (4, 3)],
    [(2, 1), (3, 2), (4, 1)],
    [(2, 1), (3, 2), (4, 3)],
    [(3, 1), (4, 1), (4, 3)],
    [(3, 2), (4, 1), (4, 1)],
    [(3, 2), (4, 3), (4, 3)],
    [(2, 1), (3, 1), (5, 1)],
    [(2, 1), (3, 1), (5, 2)],
    [(2, 1), (3, 1), (5, 3)],
    [(2, 1), (3, 1), (5, 4)],
    [(2, 1), (3, 2), (5, 1)],
    [(2, 1), (3, 2), (5, 2)],
    [(2, 1), (3, 2), (5, 3)],
    [(2, 1), (3, 2), (5, 4)],
    [(2, 1), (5, 1), (5, 2)],
    [(2, 1), (5, 1), (5, 3)],
    [(2, 1), (5, 2), (5, 4)],
    [(2, 1), (5, 3), (5, 4)],
    [(3, 1), (3, 1), (5, 2)],
    [(3, 1), (3, 1), (5, 4)],
    [(3, 1), (3, 2), (5, 1)],
    [(3, 1), (3, 2), (5, 3)],
    [(3, 2), (3, 2), (5, 2)],
    [(3, 2), (3, 2), (5, 4)],
    [(3, 1), (5, 1), (5, 3)],
    [(3, 1), (5, 1), (5, 4)],
    [(3, 1), (5, 2), (5, 3)],
    [(3, 1), (5, 2), (5, 4)],
    [(3, 2), (5, 1), (5, 1)],
    [(3, 2), (5, 1), (5, 2)],
    [(3, 2), (5, 2), (5, 2)],
    [(3, 2), (5, 3), (5, 3)],
    [(3, 2), (5, 3), (5, 4)],
    [(3, 2), (5, 4), (5, 4)],
    [(5, 1), (5, 1), (5, 4)],
    [(5, 2), (5, 2), (5, 2)],
    [(5, 2), (5, 3), (5, 3)],
    [(5, 4), (5, 4), (5, 4)],
];

const PAGE0: [[Entry; 6]; 9] = [
    [(2, 1), (2, 1), (2, 1), (2, 1), (2, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (2, 1), (3, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (2, 1), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (2, 1), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (2, 1), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (2, 1), (5, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (2, 1), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (2, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (2, 1), (5, 4), (2, 1)],
];

const PAGE1: [[Entry; 6]; 28] = [
    [(2, 1), (2, 1), (3, 1), (2, 1), (3, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (2, 1), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (2, 1), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (2, 1), (5, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (2, 1), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (2, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (2, 1), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (4, 1), (2, 1), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (4, 1), (2, 1), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (4, 1), (2, 1), (5, 1), (2, 1)],
    [(2, 1), (2, 1), (4, 1), (2, 1), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (4, 1), (2, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (4, 1), (2, 1), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (4, 3), (2, 1), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (4, 3), (2, 1), (5, 1), (2, 1)],
    [(2, 1), (2, 1), (4, 3), (2, 1), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (4, 3), (2, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (4, 3), (2, 1), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (5, 1), (2, 1), (5, 1), (2, 1)],
    [(2, 1), (2, 1), (5, 1), (2, 1), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (5, 1), (2, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (5, 1), (2, 1), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (5, 2), (2, 1), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (5, 2), (2, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (5, 2), (2, 1), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (5, 3), (2, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (5, 3), (2, 1), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (5, 4), (2, 1), (5, 4), (2, 1)],
];

const PAGE2: [[Entry; 6]; 5] = [
    [(2, 1), (2, 1), (2, 1), (3, 1), (3, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (3, 1), (3, 2)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (3, 2), (3, 2)],
];

const PAGE3: [[Entry; 6]; 7] = [
    [(2, 1), (2, 1), (2, 1), (3, 1), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (4, 1), (4, 3)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (4, 1), (4, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (4, 3), (4, 3)],
];

const PAGE4: [[Entry; 6]; 32] = [
    [(2, 1), (2, 1), (2, 1), (3, 1), (5, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 1), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (5, 1), (5, 2), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (5, 1), (5, 3), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (5, 2), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (5, 3), (5, 4), (2, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (3, 1), (5, 2)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (3, 1), (5, 4)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (3, 2), (5, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (3, 2), (5, 3)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (3, 2), (5, 2)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (3, 2), (5, 4)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (5, 1), (5, 3)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (5, 1), (5, 4)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (5, 2), (5, 3)],
    [(2, 1), (2, 1), (2, 1), (3, 1), (5, 2), (5, 4)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 1), (5, 1)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 1), (5, 2)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 2), (5, 2)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 3), (5, 3)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 3), (5, 4)],
    [(2, 1), (2, 1), (2, 1), (3, 2), (5, 4), (5, 4)],
    [(2, 1), (2, 1), (2, 1), (5, 1), (5, 1), (5, 4)],
    [(2, 1), (2, 1), (2, 1), (5, 2), (5, 2), (5, 2)],
    [(2, 1), (2, 1), (2, 1), (5, 2), (5, 3), (5, 3)],
    [(2, 1), (2, 1), (2, 1), (5, 4), (5, 4), (5, 4)],
];

const PAGE5: [[Entry; 6]; 15] = [
    [(2, 1), (2, 1), (3, 1), (3, 1), (3, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 1), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 2), (3, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 2), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 1), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 2), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 1), (3, 1), (3, 2)],
    [(2, 1), (2, 1), (3, 1), (3, 1), (3, 2), (3, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 2), (3, 2), (3, 2)],
    [(2, 1), (2, 1), (3, 2), (3, 1), (3, 1), (3, 2)],
    [(2, 1), (2, 1), (3, 2), (3, 1), (3, 2), (3, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 2), (3, 2), (3, 2)],
    [(3, 2), (3, 2), (3, 1), (3, 1), (3, 2), (3, 1)],
    [(3, 1), (3, 2), (3, 1), (3, 2), (3, 1), (3, 1)],
    [(3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2)],
];

const PAGE6: [[Entry; 6]; 11] = [
    [(2, 1), (2, 1), (3, 1), (3, 1), (2, 1), (3, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 1), (2, 1), (3, 2)],
    [(2, 1), (2, 1), (3, 1), (3, 2), (2, 1), (3, 2)],
    [(2, 1), (2, 1), (3, 2), (3, 2), (2, 1), (3, 2)],
    [(2, 1), (3, 2), (3, 1), (3, 1), (3, 1), (2, 1)],
    [(2, 1), (3, 2), (3, 1), (3, 2), (3, 2), (2, 1)],
    [(2, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 2)],
    [(2, 1), (3, 2), (3, 1), (3, 1), (3, 2), (3, 1)],
    [(2, 1), (3, 2), (3, 1), (3, 2), (3, 1), (3, 1)],
    [(2, 1), (3, 1), (3, 1), (3, 2), (3, 2), (3, 2)],
    [(2, 1), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2)],
];

const PAGE7: [[Entry; 6]; 26] = [
    [(2, 1), (2, 1), (3, 1), (3, 1), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 1), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 2), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 2), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 1), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 1), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 2), (4, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 2), (4, 3), (2, 1)],
    [(2, 1), (2, 1), (4, 1), (3, 1), (3, 1), (3, 2)],
    [(2, 1), (2, 1), (4, 1), (3, 1), (3, 2), (3, 1)],
    [(2, 1), (2, 1), (4, 1), (3, 2), (3, 2), (3, 2)],
    [(2, 1), (2, 1), (4, 3), (3, 1), (3, 1), (3, 2)],
    [(2, 1), (2, 1), (4, 3), (3, 1), (3, 2), (3, 1)],
    [(2, 1), (2, 1), (4, 3), (3, 2), (3, 2), (3, 2)],
    [(2, 1), (2, 1), (3, 1), (3, 1), (4, 1), (4, 3)],
    [(2, 1), (2, 1), (3, 1), (3, 1), (4, 3), (4, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 2), (4, 1), (4, 1)],
    [(2, 1), (2, 1), (3, 1), (3, 2), (4, 3), (4, 3)],
    [(2, 1), (2, 1), (3, 2), (3, 1), (4, 1), (4, 3)],
    [(2, 1), (2, 1), (3, 2), (3, 1), (4, 3), (4, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 2), (4, 1), (4, 1)],
    [(2, 1), (2, 1), (3, 2), (3, 2), (4, 3), (4, 3)],
    [(3, 1), (4, 3), (3, 1), (3, 2), (4, 1), (4, 1)],
    [(3, 1), (4, 3), (3, 2), (3, 1), (4, 1), (4, 3)],
    [(3, 2), (4, 1), (3, 2), (3, 2), (4, 1), (4, 1)],
    [(3, 2), (4, 3), (3, 2), (3, 2), (4, 3), (4, 3)],
];

const PAGE8: [[Entry; 6]; 26] = [
    [(2, 1), (2, 1), (3, 1), (4, 1), (3, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (4, 1), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (4, 3), (3, 1), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (4, 3), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 2), (4, 1), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 2), (4, 3), (3, 2), (2, 1)],
    [(2, 1), (2, 1), (3, 1), (4, 1), (3, 1), (4, 3)],
    [(2, 1), (2, 1), (3, 1), (4, 1), (3, 2), (4, 1)],
    [(2, 1), (2, 1), (3, 1), (4, 3), (3, 2), (4, 3)],
    [(2, 1), (2, 1), (3, 2), (4, 1), (3, 1), (4, 3)],
    [(2, 1), (2, 1), (3, 2), (4, 1), (3, 2), (4, 1)],
    [(2, 1), (2, 1), (3, 2), (4, 3), (3, 2), (4, 3)],
    [(2, 1), (4, 3), (3, 1), (4, 1), (3, 1), (2, 1)],
    [(2, 1), (4, 1), (3, 1), (4, 1), (3, 2), (2, 1)],
    [(2, 1), (4, 3), (3, 1), (4, 3), (3, 2), (2, 1)],
    [(2, 1), (4, 3), (3, 2), (4, 1), (3, 2), (2, 1)],
    [(2, 1), (4, 1), (3, 1), (4, 1), (3, 1), (4, 3)],
    [(2, 1), (4, 3), (3, 1), (4, 1), (3, 2), (4, 1)],
    [(2, 1), (4, 3), (3, 1), (4, 3), (3, 1), (4, 1)],
    [(2, 1), (4, 3), (3, 2), (4, 1), (3, 1), (4, 3)],
    [(2, 1), (4, 1), (3, 2), (4, 1), (3, 2), (4, 1)],
    [(2, 1), (4, 3), (3, 2), (4, 3), (3, 2), (4, 3)],
    [(4, 1), (4, 3), (3, 1), (4, 3), (3, 1), (4, 1)],
    [(4, 1), (4, 3), (3, 2), (4, 1), (3, 1), (4, 3)],
    [(4, 1), (4, 1), (3, 2), (4, 1), (3, 2), (4, 1)],
    [(4, 3), (4, 3), (3, 2), (4, 3), (3, 2), (4, 3)],
];

/// A titled group of 3-sphere symbols sharing one Coxeter family.
#[derive(Clone, Debug)]
pub struct SymbolPage {
    pub title: &'static str,
    pub symbols: Vec<Symbol4>,
}

pub(super) fn symbols3() -> Vec<Symbol3> {
    SYMBOLS3.iter().map(|row| Symbol3(row.map(frac))).collect()
}

pub(super) fn pages4() -> Vec<SymbolPage> {
    let page = |title: &'static str, rows: &[[Entry; 6]]| SymbolPage {
        title,
        symbols: rows.iter().map(|row| Symbol4(row.map(frac))).collect(),
    };
    vec![
        page("I2 × A1 × A1", &PAGE0),
        page("I2 × I2", &PAGE1),
        page("A3 × A1", &PAGE2),
        page("BC3 × A1", &PAGE3),
        page("H3 × A1", &PAGE4),
        page("A4", &PAGE5),
        page("D4", &PAGE6),
        page("BC4", &PAGE7),
        page("F4", &PAGE8),
    ]
}

/// Whether `(a, b, c)` generates a finite triangle group (order-insensitive).
pub fn is_schwarz_triangle(a: Fraction, b: Fraction, c: Fraction) -> bool {
    let mut target = [a, b, c];
    target.sort();
    SCHWARZ.iter().any(|row| {
        let mut entry = row.map(frac);
        entry.sort();
        entry == target
    })
}
