//! Tabulated generating points for chiral constructions.
//!
//! These were found numerically for the symbols listed; symbols without an entry
//! simply have no known regular snub or dirhombic point.

use crate::sphere::Point3;
use crate::symbol::{Fraction, Symbol3};

type Entry = ([(i32, i32); 3], [f64; 3]);

const SNUB_POINTS: [Entry; 23] = [
    ([(2, 1), (3, 1), (3, 1)], [0.371197164, 0.371198600, 0.851132452]),
    ([(2, 1), (3, 2), (3, 2)], [0.601587057, 0.603128135, 0.523770750]),
    ([(2, 1), (3, 1), (4, 1)], [0.250971645, 0.275597400, 0.927934647]),
    ([(2, 1), (3, 1), (5, 1)], [0.154168844, 0.174078420, 0.972590500]),
    ([(2, 1), (3, 1), (5, 2)], [0.454520700, 0.410087200, 0.790723860]),
    ([(2, 1), (3, 1), (5, 3)], [0.717561960, 0.292423278, 0.632141500]),
    ([(2, 1), (3, 2), (5, 3)], [0.288367659, 0.812833548, 0.506125400]),
    ([(2, 1), (5, 1), (5, 2)], [0.305307329, 0.243639067, 0.920562000]),
    ([(2, 1), (5, 1), (5, 3)], [0.556042500, 0.185382977, 0.810220361]),
    ([(3, 1), (3, 1), (5, 2)], [0.351679564, 0.184971556, 0.917670100]),
    ([(3, 1), (5, 1), (5, 3)], [0.503708541, 0.094354870, 0.858710800]),
    ([(3, 1), (5, 2), (5, 3)], [0.790710900, 0.205797911, 0.576572100]),
    ([(3, 2), (3, 2), (5, 2)], [0.040170700, 0.993558347, 0.106017649]),
    ([(2, 1), (2, 1), (3, 1)], [0.407704830, 0.577367900, 0.707410600]),
    ([(2, 1), (2, 1), (4, 1)], [0.330173900, 0.511891400, 0.793072200]),
    ([(2, 1), (2, 1), (5, 1)], [0.275600284, 0.447595954, 0.850711400]),
    ([(2, 1), (2, 1), (5, 2)], [0.471330822, 0.599416256, 0.646955600]),
    ([(2, 1), (2, 1), (5, 3)], [0.723797739, 0.447400779, 0.525316100]),
    ([(2, 1), (2, 1), (6, 1)], [0.238152936, 0.393012315, 0.888159700]),
    ([(2, 1), (2, 1), (7, 1)], [0.208528623, 0.348602800, 0.913784266]),
    ([(2, 1), (2, 1), (7, 2)], [0.363304049, 0.546076953, 0.754859200]),
    ([(2, 1), (2, 1), (7, 3)], [0.499450862, 0.600404143, 0.624553200]),
    ([(2, 1), (2, 1), (7, 4)], [0.674680300, 0.504504740, 0.538780570]),
];

const DIRHOMBIC_SYMBOLS: [[(i32, i32); 3]; 4] = [
    [(2, 1), (3, 1), (5, 2)],
    [(2, 1), (3, 1), (5, 3)],
    [(2, 1), (3, 2), (5, 2)],
    [(2, 1), (3, 2), (5, 3)],
];

const DIRHOMBIC_POINT: [f64; 3] = [0.618033989, 0.786151378, 0.0];

fn symbol_of(entries: &[(i32, i32); 3]) -> Symbol3 {
    Symbol3(entries.map(|(n, d)| Fraction::from_reduced(n, d)))
}

/// Generating point at which the Snub construction of `symbol` is regular.
pub fn snub_point(symbol: &Symbol3) -> Option<Point3> {
    SNUB_POINTS
        .iter()
        .find(|(s, _)| symbol_of(s) == *symbol)
        .map(|(_, [x, y, z])| Point3::new(*x, *y, *z))
}

/// Generating point at which the Dirhombic construction of `symbol` is regular.
pub fn dirhombic_point(symbol: &Symbol3) -> Option<Point3> {
    DIRHOMBIC_SYMBOLS
        .iter()
        .any(|s| symbol_of(s) == *symbol)
        .then(|| Point3::from(DIRHOMBIC_POINT))
}
