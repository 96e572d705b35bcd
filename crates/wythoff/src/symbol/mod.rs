//! Wythoff/Coxeter symbols on the 2-sphere (three entries) and the 3-sphere (six entries).
//!
//! Purpose
//! - Immutable, structurally compared records of mirror angles (`Fraction`s).
//! - Symbol-level closed forms: group order bounds and vertex valences.
//!
//! Why this design
//! - Feasibility is geometric and lives with chamber construction
//!   (`chamber::ChamberSymbol`), not in these value types.
//! - Six-entry symbols label the edges of a Coxeter diagram on four mirrors
//!   (see `Symbol4`); `Symbol4::linear` builds the common `(2, 2, c, d, e, 2)` chain.

mod catalog;
mod fraction;

#[cfg(test)]
mod tests;

pub use catalog::{is_schwarz_triangle, SymbolPage};
pub use fraction::Fraction;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::WythoffError;

/// Order of the finite triangle group spanned by mirrors at angles `π/a, π/b, π/c`.
///
/// Dihedral families `(2, 2, n)` give `4n`; otherwise the presence of a 5 or a 4
/// selects the icosahedral or octahedral group, and the tetrahedral group remains.
pub fn symmetry_order(a: Fraction, b: Fraction, c: Fraction) -> usize {
    let mut nums = [a.numerator(), b.numerator(), c.numerator()];
    nums.sort_unstable();
    if nums[0] == 2 && nums[1] == 2 {
        return 4 * nums[2].unsigned_abs() as usize;
    }
    if nums.contains(&5) {
        120
    } else if nums.contains(&4) {
        48
    } else {
        24
    }
}

fn parse_entries(s: &str) -> Result<Vec<Fraction>, WythoffError> {
    let cleaned: String = s
        .chars()
        .map(|c| if matches!(c, '(' | ')' | ',') { ' ' } else { c })
        .collect();
    let entries = cleaned
        .split_whitespace()
        .map(Fraction::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    if entries.is_empty() {
        return Err(WythoffError::invalid("empty symbol"));
    }
    Ok(entries)
}

/// Symbol of a triangle group `(f0 f1 f2)`; entry `i` is the angle at chamber vertex `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol3(pub [Fraction; 3]);

impl Symbol3 {
    pub fn new(f0: Fraction, f1: Fraction, f2: Fraction) -> Self {
        Self([f0, f1, f2])
    }

    pub fn fractions(&self) -> &[Fraction; 3] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fraction> {
        self.0.iter()
    }

    /// Number of entries whose numerator is even (gates the ionic constructions).
    pub fn even_numerators(&self) -> usize {
        self.0.iter().filter(|f| f.numerator() % 2 == 0).count()
    }

    /// Order of the group, which is also the chamber count of a complete tiling.
    pub fn order(&self) -> usize {
        symmetry_order(self.0[0], self.0[1], self.0[2])
    }

    /// The 2-sphere symbols offered by the interactive tool.
    pub fn catalog() -> Vec<Symbol3> {
        catalog::symbols3()
    }
}

impl From<[i32; 3]> for Symbol3 {
    fn from(v: [i32; 3]) -> Self {
        Self(v.map(Fraction::integer))
    }
}

impl Index<usize> for Symbol3 {
    type Output = Fraction;
    fn index(&self, i: usize) -> &Fraction {
        &self.0[i]
    }
}

impl fmt::Display for Symbol3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Symbol3 {
    type Err = WythoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = parse_entries(s)?;
        let arr: [Fraction; 3] = entries.try_into().map_err(|v: Vec<Fraction>| {
            WythoffError::invalid(format!("expected 3 symbol entries, got {}", v.len()))
        })?;
        Ok(Self(arr))
    }
}

/// Symbol of a tetrahedral chamber on the 3-sphere.
///
/// Entries label the six edges of the Coxeter diagram:
/// ```text
///        ┌───── 5 ─────┐
/// ① -2- ④ -3- ② -4- ③ -1-
/// └───── 0 ─────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol4(pub [Fraction; 6]);

/// Vertex-figure triangles: entry triples meeting at each chamber vertex.
pub(crate) const VERTEX_FIGURES: [[usize; 3]; 4] = [[0, 1, 4], [0, 3, 2], [5, 1, 2], [5, 3, 4]];

impl Symbol4 {
    pub fn new(f: [Fraction; 6]) -> Self {
        Self(f)
    }

    /// Linear diagram `c - d - e` with the remaining mirrors orthogonal.
    pub fn linear(c: Fraction, d: Fraction, e: Fraction) -> Self {
        let two = Fraction::integer(2);
        Self([two, two, c, d, e, two])
    }

    pub fn fractions(&self) -> &[Fraction; 6] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fraction> {
        self.0.iter()
    }

    /// Triangle symbol of the vertex figure at chamber vertex `i`.
    pub fn vertex_figure(&self, i: usize) -> Symbol3 {
        let [a, b, c] = VERTEX_FIGURES[i];
        Symbol3([self.0[a], self.0[b], self.0[c]])
    }

    /// Titled pages of 3-sphere symbols, grouped by Coxeter family.
    pub fn catalog() -> Vec<SymbolPage> {
        catalog::pages4()
    }
}

impl From<[i32; 6]> for Symbol4 {
    fn from(v: [i32; 6]) -> Self {
        Self(v.map(Fraction::integer))
    }
}

impl Index<usize> for Symbol4 {
    type Output = Fraction;
    fn index(&self, i: usize) -> &Fraction {
        &self.0[i]
    }
}

impl fmt::Display for Symbol4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: [String; 6] = self.0.map(|x| {
            if x.is_integer(2) {
                "_".to_string()
            } else {
                x.to_string()
            }
        });
        let elided = |t: &str| t == "_";
        if !elided(&s[1]) {
            write!(f, "[")?;
        }
        if !elided(&s[0]) {
            write!(f, "(")?;
        }
        write!(f, "{} ", s[2])?;
        if !elided(&s[5]) {
            write!(f, "(")?;
        }
        write!(f, "{}", s[3])?;
        if !elided(&s[0]) {
            write!(f, " {})", s[0])?;
        }
        write!(f, " {}", s[4])?;
        if !elided(&s[5]) {
            write!(f, " {})", s[5])?;
        }
        if !elided(&s[1]) {
            write!(f, " {}]", s[1])?;
        }
        Ok(())
    }
}

/// Accepts six entries in index order, or three entries for `Symbol4::linear`.
impl FromStr for Symbol4 {
    type Err = WythoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = parse_entries(s)?;
        match entries.as_slice() {
            [c, d, e] => Ok(Self::linear(*c, *d, *e)),
            [a, b, c, d, e, f] => Ok(Self([*a, *b, *c, *d, *e, *f])),
            other => Err(WythoffError::invalid(format!(
                "expected 3 or 6 symbol entries, got {}",
                other.len()
            ))),
        }
    }
}
