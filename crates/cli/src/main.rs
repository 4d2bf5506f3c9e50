use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polyrot::cfg::ViewCfg;
use polyrot::error::EngineError;
use polyrot::phase::PhaseOffsets;
use polyrot::polytope::ShapeKind;
use polyrot::rotation::{degrees_of_freedom, rotation_matrix_with_phase};
use polyrot::view::Viewer;
use polyrot::DMatrix;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polyrot")]
#[command(about = "Rotate regular polytopes in 2-7 dimensions and project them to 2D")]
struct Cmd {
    /// JSON view config (canvas size, unit length, dimension range)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the per-run phase offsets added to every parameter
    #[arg(long, global = true)]
    phase_seed: Option<u64>,

    /// Draw the phase offsets from OS entropy instead
    #[arg(long, global = true, conflicts_with = "phase_seed")]
    random_phase: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Rotate, project and write one segment table (.csv, .parquet or .json)
    Render {
        /// Dimension; defaults to the config's start dimension
        #[arg(long)]
        dim: Option<usize>,
        #[arg(long, default_value = "cube")]
        shape: ShapeKind,
        /// Comma-separated fractions of a turn, one per rotation plane
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        params: Vec<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the rotation matrix as JSON rows
    Matrix {
        #[arg(long)]
        dim: usize,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        params: Vec<f64>,
    },
    /// Draw a segment table as SVG
    Figure {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print dimension range, dof and edge counts per shape
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = config::load(cmd.config.as_deref())?;
    let phase = phase_offsets(&cfg, cmd.phase_seed, cmd.random_phase);
    match cmd.action {
        Action::Render {
            dim,
            shape,
            params,
            out,
        } => render(cfg, phase, dim, shape, params, out),
        Action::Matrix { dim, params } => matrix(&cfg, dim, params, &phase),
        Action::Figure { from, out } => figure(&cfg, from, out),
        Action::Report => report(&cfg),
    }
}

/// Drawn once per process; zeros unless a seed or `--random-phase` is given.
fn phase_offsets(cfg: &ViewCfg, seed: Option<u64>, random: bool) -> PhaseOffsets {
    let len = cfg.max_dof();
    match (seed, random) {
        (Some(seed), _) => PhaseOffsets::seeded(len, seed),
        (None, true) => PhaseOffsets::from_entropy(len),
        (None, false) => PhaseOffsets::zeros(len),
    }
}

/// Empty means "all sliders at zero", the start state of a fresh view.
fn params_or_zeros(dim: usize, params: Vec<f64>) -> Vec<f64> {
    if params.is_empty() {
        vec![0.0; degrees_of_freedom(dim)]
    } else {
        params
    }
}

fn render(
    cfg: ViewCfg,
    phase: PhaseOffsets,
    dim: Option<usize>,
    shape: ShapeKind,
    params: Vec<f64>,
    out: PathBuf,
) -> Result<()> {
    let dim = dim.unwrap_or(cfg.start_dimension);
    check_dimension_range(&cfg, dim)?;
    let phase_values = phase.values().to_vec();
    let mut viewer = Viewer::new(cfg, phase)?;
    if !viewer.set_dimension(dim) {
        bail!("viewer refused dimension {dim}");
    }
    viewer.set_shape(shape);
    let params = params_or_zeros(dim, params);
    viewer
        .set_parameters(&params)
        .with_context(|| format!("dimension {dim} takes {} parameters", degrees_of_freedom(dim)))?;

    let frame = viewer.frame()?;
    tracing::info!(
        dimension = dim,
        shape = %shape,
        edges = frame.segments.len(),
        out = %out.display(),
        "render"
    );
    let format = table::write_frame(&frame, &out)?;
    let sidecar = write_sidecar(
        &out,
        Payload::new(
            "render",
            json!({
                "dimension": dim,
                "shape": shape.name(),
                "params": viewer.parameters(),
                "phase_offsets": &phase_values[..degrees_of_freedom(dim)],
                "format": format!("{format:?}").to_lowercase(),
                "edges": frame.segments.len(),
            }),
        ),
    )?;
    tracing::info!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}

/// Reject dimensions the configured view cannot show.
fn check_dimension_range(cfg: &ViewCfg, dim: usize) -> Result<()> {
    let (min, max) = (cfg.min_dimension, cfg.max_dimension);
    if !(min..=max).contains(&dim) {
        bail!("dimension {dim} outside configured range {min}..={max}");
    }
    Ok(())
}

/// Rotation for `matrix`, with the same checks `render` applies.
fn rotation_for(
    cfg: &ViewCfg,
    dim: usize,
    params: Vec<f64>,
    phase: &PhaseOffsets,
) -> Result<DMatrix<f64>> {
    check_dimension_range(cfg, dim)?;
    let params = params_or_zeros(dim, params);
    if let Some(index) = params.iter().position(|v| !v.is_finite()) {
        return Err(EngineError::NonFiniteParameter { index }.into());
    }
    Ok(rotation_matrix_with_phase(dim, &params, phase)?)
}

fn matrix(cfg: &ViewCfg, dim: usize, params: Vec<f64>, phase: &PhaseOffsets) -> Result<()> {
    let m = rotation_for(cfg, dim, params, phase)?;
    tracing::info!(dimension = dim, "matrix");
    let rows: Vec<Vec<f64>> = m
        .row_iter()
        .map(|row| row.iter().copied().collect())
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "dimension": dim, "rows": rows }))?
    );
    Ok(())
}

fn figure(cfg: &ViewCfg, from: PathBuf, out: PathBuf) -> Result<()> {
    let segments = table::read_screen_segments(&from)?;
    tracing::info!(
        from = %from.display(),
        out = %out.display(),
        segments = segments.len(),
        "figure"
    );
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&out, table::render_svg(&segments, cfg.width, cfg.height))
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        &out,
        Payload::new(
            "figure",
            json!({
                "from": from.to_string_lossy(),
                "width": cfg.width,
                "height": cfg.height,
            }),
        ),
    )?;
    Ok(())
}

fn report(cfg: &ViewCfg) -> Result<()> {
    let dims: Vec<_> = (cfg.min_dimension..=cfg.max_dimension)
        .map(|d| {
            let edges: serde_json::Map<String, serde_json::Value> = ShapeKind::ALL
                .iter()
                .map(|k| (k.name().to_string(), json!(k.expected_edges(d))))
                .collect();
            json!({ "dimension": d, "dof": degrees_of_freedom(d), "edges": edges })
        })
        .collect();
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "engine_version": polyrot::VERSION,
        "dimension_range": [cfg.min_dimension, cfg.max_dimension],
        "dimensions": dims,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
