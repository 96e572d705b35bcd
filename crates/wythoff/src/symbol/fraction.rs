//! Exact rational mirror angles.
//!
//! A symbol entry `p/q` stands for the dihedral angle `π·q/p`. Only angle
//! computation goes through `f64`; equality and ordering stay exact.

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::WythoffError;

/// Reduced fraction with positive denominator; zero is stored as `0/1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: i32,
    den: i32,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Fraction {
    /// Reduce `num/den` to lowest terms. Fails on a zero denominator.
    pub fn new(num: i32, den: i32) -> Result<Self, WythoffError> {
        if den == 0 {
            return Err(WythoffError::invalid(format!(
                "fraction {num}/0 has a zero denominator"
            )));
        }
        if num == 0 {
            return Ok(Self { num: 0, den: 1 });
        }
        let (mut n, mut d) = (num as i64, den as i64);
        if d < 0 {
            n = -n;
            d = -d;
        }
        let g = gcd(n, d);
        let (n, d) = (n / g, d / g);
        match (i32::try_from(n), i32::try_from(d)) {
            (Ok(num), Ok(den)) => Ok(Self { num, den }),
            _ => Err(WythoffError::invalid(format!(
                "fraction {num}/{den} overflows after normalization"
            ))),
        }
    }

    /// Caller guarantees `den > 0` and `gcd(num, den) == 1`.
    pub(crate) const fn from_reduced(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    pub const fn integer(n: i32) -> Self {
        Self { num: n, den: 1 }
    }

    #[inline]
    pub fn numerator(&self) -> i32 {
        self.num
    }

    #[inline]
    pub fn denominator(&self) -> i32 {
        self.den
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Mirror angle `π / self` in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        PI / self.to_f64()
    }

    #[inline]
    pub fn is_integer(&self, n: i32) -> bool {
        self.den == 1 && self.num == n
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::integer(n)
    }
}

impl PartialEq<i32> for Fraction {
    fn eq(&self, other: &i32) -> bool {
        self.is_integer(*other)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as i64 * other.den as i64;
        let rhs = other.num as i64 * self.den as i64;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Symbol notation: `5`, `5/2` as `$`, `5/3` as `$'`, `4/3` as `4'`, `7/5` as `7/2'`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, d) = (self.num, self.den);
        if d == 1 {
            write!(f, "{n}")
        } else if n <= 0 {
            write!(f, "{n}/{d}")
        } else if (n, d) == (5, 2) {
            write!(f, "$")
        } else if (n, d) == (5, 3) {
            write!(f, "$'")
        } else if d == n - 1 {
            write!(f, "{n}'")
        } else if 2 * d as i64 > n as i64 {
            write!(f, "{}/{}'", n, n - d)
        } else {
            write!(f, "{n}/{d}")
        }
    }
}

/// Inverse of `Display`; also accepts plain `p/q` and `_` (the elided 2).
/// A trailing `'` maps `p/q` to its supplement `p/(p-q)`.
impl FromStr for Fraction {
    type Err = WythoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "_" {
            return Ok(Self::integer(2));
        }
        let (body, primed) = match s.strip_suffix('\'') {
            Some(body) => (body, true),
            None => (s, false),
        };
        let parse = |t: &str| {
            t.trim()
                .parse::<i32>()
                .map_err(|_| WythoffError::invalid(format!("cannot parse '{s}' as a fraction")))
        };
        let base = if body == "$" {
            Self::from_reduced(5, 2)
        } else if let Some((n, d)) = body.split_once('/') {
            Self::new(parse(n)?, parse(d)?)?
        } else {
            Self::integer(parse(body)?)
        };
        if primed {
            let supplement = i32::try_from(base.num as i64 - base.den as i64)
                .map_err(|_| WythoffError::invalid(format!("'{s}' overflows as a supplement")))?;
            Self::new(base.num, supplement)
        } else {
            Ok(base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn frac(n: i32, d: i32) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn reduces_and_normalizes_sign() {
        assert_eq!(frac(10, 4), frac(5, 2));
        assert_eq!(frac(3, -6).numerator(), -1);
        assert_eq!(frac(3, -6).denominator(), 2);
        assert_eq!(frac(0, -7), Fraction::integer(0));
        assert_eq!(frac(0, -7).denominator(), 1);
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert!(matches!(
            Fraction::new(3, 0),
            Err(WythoffError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn ordering_is_exact() {
        assert!(frac(5, 3) < frac(2, 1));
        assert!(frac(5, 4) < frac(4, 3));
        assert!(frac(7, 2) > frac(3, 1));
        assert_eq!(frac(6, 4).cmp(&frac(3, 2)), Ordering::Equal);
    }

    #[test]
    fn symbol_notation() {
        let cases = [
            ((3, 1), "3"),
            ((5, 2), "$"),
            ((5, 3), "$'"),
            ((4, 3), "4'"),
            ((5, 4), "5'"),
            ((7, 5), "7/2'"),
            ((7, 2), "7/2"),
            ((7, 3), "7/3"),
        ];
        for ((n, d), text) in cases {
            assert_eq!(frac(n, d).to_string(), text, "{n}/{d}");
        }
    }

    #[test]
    fn parses_notation_and_plain_forms() {
        assert_eq!("_".parse::<Fraction>().unwrap(), Fraction::integer(2));
        assert_eq!("$'".parse::<Fraction>().unwrap(), frac(5, 3));
        assert_eq!("3/2".parse::<Fraction>().unwrap(), frac(3, 2));
        assert_eq!("3'".parse::<Fraction>().unwrap(), frac(3, 2));
        assert_eq!(" 6/5 ".parse::<Fraction>().unwrap(), frac(6, 5));
        assert!("x/2".parse::<Fraction>().is_err());
        assert!("2/0".parse::<Fraction>().is_err());
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert!(matches!(
            "-2147483648'".parse::<Fraction>(),
            Err(WythoffError::InvalidArgument { .. })
        ));
        assert_eq!("2147483647'".parse::<Fraction>().unwrap(), frac(i32::MAX, i32::MAX - 1));

        let wide = frac(i32::MAX, 1 << 30);
        assert_eq!(wide.to_string(), "2147483647/1073741823'");
        assert_eq!(wide.to_string().parse::<Fraction>().unwrap(), wide);
        assert_eq!(frac(i32::MAX, 3).to_string(), "2147483647/3");
    }

    #[test]
    fn angle_matches_ratio() {
        assert!((frac(5, 2).angle() - std::f64::consts::PI * 0.4).abs() < 1e-15);
    }

    proptest! {
        #[test]
        fn new_is_lowest_terms(n in -500i32..500, d in 1i32..500) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert!(f.denominator() > 0);
            prop_assert_eq!(gcd(f.numerator() as i64, f.denominator() as i64).max(1), 1);
            prop_assert!((f.to_f64() - n as f64 / d as f64).abs() < 1e-12);
        }

        #[test]
        fn notation_round_trips(n in 2i32..40, d in 1i32..40) {
            prop_assume!(d < n);
            let f = Fraction::new(n, d).unwrap();
            let back: Fraction = f.to_string().parse().unwrap();
            prop_assert_eq!(back, f);
        }
    }
}
