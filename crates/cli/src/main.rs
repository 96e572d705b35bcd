use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;
use wythoff::api::{
    Construction, Point3, Point4, Polychoron, Polyhedron, Symbol3, Symbol4, Tiling3, Tiling4,
};

mod catalog;
mod provenance;
mod summary;

use catalog::Format;
use provenance::Payload;
use summary::BuildSummary;

#[derive(Parser)]
#[command(name = "wythoff-cli")]
#[command(about = "Uniform polytopes from Wythoff symbols")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a tiling and log its counts
    Tile {
        /// Symbol text, e.g. "2 3 5" or "2 2 3 3 3 2"
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value_t = 3)]
        dim: u32,
    },
    /// Build a construction and write a JSON summary plus provenance sidecar
    Build {
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value_t = 3)]
        dim: u32,
        /// Construction name (S² only; S³ always builds the Normal polychoron)
        #[arg(long, default_value = "normal")]
        construction: Construction,
        /// Comma-separated generating point
        #[arg(long, conflicts_with = "seed")]
        base: Option<String>,
        /// Seed for a random interior generating point
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Tile every catalog symbol (or those listed in --input) into a table
    Catalog {
        #[arg(long, default_value_t = 3)]
        dim: u32,
        #[arg(long)]
        out: PathBuf,
        /// CSV with a `symbol` column
        #[arg(long)]
        input: Option<PathBuf>,
        /// Defaults to the output extension
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Tile { symbol, dim } => tile(&symbol, dim),
        Action::Build {
            symbol,
            dim,
            construction,
            base,
            seed,
            out,
        } => build(&symbol, dim, construction, base.as_deref(), seed, &out),
        Action::Catalog {
            dim,
            out,
            input,
            format,
        } => run_catalog(dim, &out, input.as_deref(), format),
        Action::Report => report(),
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}

fn tile(symbol: &str, dim: u32) -> Result<()> {
    let start = Instant::now();
    let (chambers, counts) = match dim {
        3 => {
            let t = Tiling3::new(symbol.parse::<Symbol3>()?)?;
            (t.order(), t.vertex_counts().to_vec())
        }
        4 => {
            let t = Tiling4::new(symbol.parse::<Symbol4>()?)?;
            (t.order(), t.vertex_counts().to_vec())
        }
        d => bail!("unsupported dimension {d}; expected 3 or 4"),
    };
    tracing::info!(
        symbol,
        dim,
        chambers,
        vertices = counts.iter().sum::<usize>(),
        counts = ?counts,
        elapsed_ms = elapsed_ms(start),
        "tile"
    );
    Ok(())
}

fn parse_base(text: &str, dim: usize) -> Result<Vec<f64>> {
    let xs = text
        .split(',')
        .map(|x| x.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parsing base point {text:?}"))?;
    if xs.len() != dim {
        bail!("base point needs {dim} coordinates, got {}", xs.len());
    }
    if xs.iter().all(|x| *x == 0.0) {
        bail!("base point must be nonzero");
    }
    Ok(xs)
}

fn build(
    symbol: &str,
    dim: u32,
    construction: Construction,
    base: Option<&str>,
    seed: Option<u64>,
    out: &Path,
) -> Result<()> {
    let start = Instant::now();
    let summary = match dim {
        3 => {
            let t = Arc::new(Tiling3::new(symbol.parse::<Symbol3>()?)?);
            let mut p: Polyhedron<Point3> = Polyhedron::new(t.clone(), construction);
            if let Some(text) = base {
                p.set_base_point(Point3::from_column_slice(&parse_base(text, 3)?));
            } else if let Some(seed) = seed {
                let mut rng = StdRng::seed_from_u64(seed);
                p.set_base_point(t.fundamental().random_point(&mut rng));
            }
            if p.effective() != construction {
                tracing::warn!(
                    requested = %construction,
                    effective = %p.effective(),
                    "construction_fallback"
                );
            }
            BuildSummary::of_polyhedron(&p)
        }
        4 => {
            if construction != Construction::Normal {
                tracing::warn!(requested = %construction, "s3_builds_normal_only");
            }
            let t = Arc::new(Tiling4::new(symbol.parse::<Symbol4>()?)?);
            let mut p: Polychoron<Point4> = Polychoron::new(t.clone());
            if let Some(text) = base {
                p.set_base_point(Point4::from_column_slice(&parse_base(text, 4)?));
            } else if let Some(seed) = seed {
                let mut rng = StdRng::seed_from_u64(seed);
                p.set_base_point(t.fundamental().random_point(&mut rng));
            }
            BuildSummary::of_polychoron(&p)
        }
        d => bail!("unsupported dimension {d}; expected 3 or 4"),
    };
    tracing::info!(
        symbol = %summary.symbol,
        construction = %summary.effective,
        vertices = summary.distinct_vertices,
        faces = summary.faces,
        elapsed_ms = elapsed_ms(start),
        "build"
    );

    provenance::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&summary)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "symbol": symbol,
        "dim": dim,
        "construction": construction.name(),
        "base": base,
        "seed": seed,
    });
    provenance::write_sidecar(out, Payload::new(params))?;
    Ok(())
}

fn run_catalog(dim: u32, out: &Path, input: Option<&Path>, format: Option<Format>) -> Result<()> {
    let start = Instant::now();
    let texts = input.map(catalog::read_symbols).transpose()?;
    let rows = catalog::rows(dim, texts)?;
    let failed = rows.iter().filter(|r| r.status != "ok").count();
    let mut df = catalog::table(&rows)?;

    let format = Format::resolve(format, out);
    provenance::ensure_parent(out)?;
    catalog::write(&mut df, out, format)?;
    tracing::info!(
        dim,
        rows = df.height(),
        failed,
        format = ?format,
        elapsed_ms = elapsed_ms(start),
        "catalog"
    );

    let params = serde_json::json!({
        "dim": dim,
        "format": format!("{format:?}").to_lowercase(),
    });
    let mut payload = Payload::new(params);
    if let Some(input) = input {
        payload = payload.with_input(input.to_string_lossy());
    }
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::block())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_build_flags() {
        let cmd = Cmd::try_parse_from([
            "wythoff-cli",
            "build",
            "--symbol",
            "2 3 5",
            "--construction",
            "snub-dual",
            "--seed",
            "3",
            "--out",
            "out/a.json",
        ])
        .unwrap();
        match cmd.action {
            Action::Build {
                construction, seed, ..
            } => {
                assert_eq!(construction, Construction::SnubDual);
                assert_eq!(seed, Some(3));
            }
            _ => panic!("expected build"),
        }
        let clash = Cmd::try_parse_from([
            "wythoff-cli",
            "build",
            "--symbol",
            "2 3 5",
            "--base",
            "0,0,1",
            "--seed",
            "1",
            "--out",
            "a.json",
        ]);
        assert!(clash.is_err());
    }

    #[test]
    fn base_point_checks_arity() {
        assert_eq!(parse_base("0, 0.5, 1", 3).unwrap(), vec![0.0, 0.5, 1.0]);
        assert!(parse_base("0,1", 3).is_err());
        assert!(parse_base("0,0,0", 3).is_err());
        assert!(parse_base("a,b,c", 3).is_err());
    }

    #[test]
    fn build_writes_summary_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("octa.json");
        build("2 3 3", 3, Construction::Normal, None, None, &out).unwrap();
        let summary: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(summary["distinct_vertices"], 6);
        assert!(dir.path().join("runs").join("octa.provenance.json").exists());
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        build("2 2 3 3 3 2", 4, Construction::Normal, None, Some(9), &a).unwrap();
        build("2 2 3 3 3 2", 4, Construction::Normal, None, Some(9), &b).unwrap();
        assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
    }
}
