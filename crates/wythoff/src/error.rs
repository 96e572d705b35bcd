//! Error type shared by symbols, chamber construction, and tiling generation.
//!
//! Only two geometric failures exist: a symbol whose angles cannot close into a
//! chamber (`Infeasible`), and a feasible chamber whose reflections never close up
//! within the closed-form group order (`DoesNotTile`). `InvalidArgument` covers
//! malformed input before any geometry runs. Once a `Tiling` exists, nothing
//! downstream can fail.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WythoffError {
    /// Zero denominator or unparsable symbol text.
    InvalidArgument { reason: String },
    /// Angles do not form a spherical triangle / tetrahedron.
    Infeasible { symbol: String },
    /// Closure search exceeded the chamber (or vertex) ceiling.
    DoesNotTile {
        symbol: String,
        chambers: usize,
        limit: usize,
    },
}

impl WythoffError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn infeasible(symbol: impl fmt::Display) -> Self {
        Self::Infeasible {
            symbol: symbol.to_string(),
        }
    }

    pub(crate) fn does_not_tile(symbol: impl fmt::Display, chambers: usize, limit: usize) -> Self {
        Self::DoesNotTile {
            symbol: symbol.to_string(),
            chambers,
            limit,
        }
    }
}

impl fmt::Display for WythoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Infeasible { symbol } => {
                write!(f, "symbol ({symbol}) cannot form a fundamental chamber")
            }
            Self::DoesNotTile {
                symbol,
                chambers,
                limit,
            } => write!(
                f,
                "symbol ({symbol}) does not tile the sphere ({chambers} chambers, limit {limit})"
            ),
        }
    }
}

impl std::error::Error for WythoffError {}
