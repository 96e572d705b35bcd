//! Catalog tables: one row per symbol with tiling counts and per-construction
//! face counts, written with polars as CSV or Parquet.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use polars::prelude::*;
use wythoff::api::{Construction, Fraction, Point3, Polyhedron, Symbol3, Symbol4, Tiling3, Tiling4};
use wythoff::WythoffError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Parquet,
}

impl Format {
    /// Explicit choice, else the output extension, else CSV.
    pub fn resolve(explicit: Option<Format>, out: &Path) -> Format {
        explicit.unwrap_or_else(|| match out.extension().and_then(|e| e.to_str()) {
            Some("parquet") => Format::Parquet,
            _ => Format::Csv,
        })
    }
}

/// One catalog row. Face counts are `None` on S³ and for failed symbols.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub symbol: String,
    pub dim: u32,
    pub chambers: Option<u64>,
    pub vertices: Option<u64>,
    pub status: String,
    pub faces: Vec<Option<u64>>,
}

/// Plain `n` / `n/d` entries, space separated; parseable back into a symbol.
pub fn plain(fractions: &[Fraction]) -> String {
    fractions
        .iter()
        .map(|f| match f.denominator() {
            1 => f.numerator().to_string(),
            d => format!("{}/{d}", f.numerator()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn status(err: &WythoffError) -> &'static str {
    match err {
        WythoffError::InvalidArgument { .. } => "invalid",
        WythoffError::Infeasible { .. } => "infeasible",
        WythoffError::DoesNotTile { .. } => "does-not-tile",
    }
}

fn failed(symbol: String, dim: u32, err: &WythoffError) -> Row {
    tracing::warn!(symbol, dim, error = %err, "catalog_symbol_failed");
    Row {
        symbol,
        dim,
        chambers: None,
        vertices: None,
        status: status(err).to_string(),
        faces: vec![None; Construction::ALL.len()],
    }
}

pub fn row3(symbol: Symbol3) -> Row {
    let text = plain(symbol.fractions());
    match Tiling3::new(symbol) {
        Ok(t) => {
            let t = Arc::new(t);
            let faces = Construction::ALL
                .into_iter()
                .map(|c| Some(Polyhedron::<Point3>::new(t.clone(), c).faces().len() as u64))
                .collect();
            Row {
                symbol: text,
                dim: 3,
                chambers: Some(t.order() as u64),
                vertices: Some(t.vertices().len() as u64),
                status: "ok".to_string(),
                faces,
            }
        }
        Err(e) => failed(text, 3, &e),
    }
}

pub fn row4(symbol: Symbol4) -> Row {
    let text = plain(symbol.fractions());
    match Tiling4::new(symbol) {
        Ok(t) => Row {
            symbol: text,
            dim: 4,
            chambers: Some(t.order() as u64),
            vertices: Some(t.vertices().len() as u64),
            status: "ok".to_string(),
            faces: vec![None; Construction::ALL.len()],
        },
        Err(e) => failed(text, 4, &e),
    }
}

/// Symbols from the `symbol` column of a CSV file.
pub fn read_symbols(input: &Path) -> Result<Vec<String>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", input.display()))?
        .select([col("symbol")])
        .collect()?;
    let column = df.column("symbol")?.str()?;
    Ok(column.into_iter().flatten().map(str::to_string).collect())
}

/// Rows for `dim`, from the built-in catalog or the given symbol texts.
/// Unparsable texts become `invalid` rows.
pub fn rows(dim: u32, texts: Option<Vec<String>>) -> Result<Vec<Row>> {
    let rows = match (dim, texts) {
        (3, None) => Symbol3::catalog().into_iter().map(row3).collect(),
        (4, None) => Symbol4::catalog()
            .into_iter()
            .flat_map(|page| page.symbols)
            .map(row4)
            .collect(),
        (3, Some(texts)) => texts
            .into_iter()
            .map(|s| match s.parse::<Symbol3>() {
                Ok(symbol) => row3(symbol),
                Err(e) => failed(s, 3, &e),
            })
            .collect(),
        (4, Some(texts)) => texts
            .into_iter()
            .map(|s| match s.parse::<Symbol4>() {
                Ok(symbol) => row4(symbol),
                Err(e) => failed(s, 4, &e),
            })
            .collect(),
        (d, _) => bail!("unsupported dimension {d}; expected 3 or 4"),
    };
    Ok(rows)
}

pub fn table(rows: &[Row]) -> Result<DataFrame> {
    let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    let dims: Vec<u32> = rows.iter().map(|r| r.dim).collect();
    let chambers: Vec<Option<u64>> = rows.iter().map(|r| r.chambers).collect();
    let vertices: Vec<Option<u64>> = rows.iter().map(|r| r.vertices).collect();
    let status: Vec<&str> = rows.iter().map(|r| r.status.as_str()).collect();
    let mut columns = vec![
        Series::new("symbol".into(), symbols),
        Series::new("dim".into(), dims),
        Series::new("chambers".into(), chambers),
        Series::new("vertices".into(), vertices),
        Series::new("status".into(), status),
    ];
    for (k, c) in Construction::ALL.into_iter().enumerate() {
        let name = format!("faces_{}", c.name().replace('-', "_"));
        let values: Vec<Option<u64>> = rows.iter().map(|r| r.faces[k]).collect();
        columns.push(Series::new(name.as_str().into(), values));
    }
    Ok(DataFrame::new(columns)?)
}

pub fn write(df: &mut DataFrame, out: &Path, format: Format) -> Result<()> {
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        Format::Csv => CsvWriter::new(&mut file).finish(df)?,
        Format::Parquet => {
            ParquetWriter::new(&mut file).finish(df)?;
        }
    }
    Ok(())
}
