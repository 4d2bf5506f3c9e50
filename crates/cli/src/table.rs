//! Segment tables (polars) and SVG output.
//!
//! Columns: `edge` (u32), `x1, y1, x2, y2` (pixels, i32) and the pre-affine
//! endpoints `ax, ay, bx, by` (f64).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polyrot::project::ScreenSegment;
use polyrot::view::Frame;
use serde_json::json;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::path::Path;

/// Output encoding chosen from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
    Json,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => TableFormat::Csv,
            Some("parquet") => TableFormat::Parquet,
            _ => TableFormat::Json,
        }
    }
}

pub fn frame_table(frame: &Frame) -> PolarsResult<DataFrame> {
    let n = frame.segments.len();
    let edge: Vec<u32> = (0..n as u32).collect();
    let px = |f: fn(&ScreenSegment) -> i32| frame.screen.iter().map(f).collect::<Vec<i32>>();
    df!(
        "edge" => edge,
        "x1" => px(|s| s.x1),
        "y1" => px(|s| s.y1),
        "x2" => px(|s| s.x2),
        "y2" => px(|s| s.y2),
        "ax" => frame.segments.iter().map(|s| s.a.x).collect::<Vec<f64>>(),
        "ay" => frame.segments.iter().map(|s| s.a.y).collect::<Vec<f64>>(),
        "bx" => frame.segments.iter().map(|s| s.b.x).collect::<Vec<f64>>(),
        "by" => frame.segments.iter().map(|s| s.b.y).collect::<Vec<f64>>()
    )
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write the frame's segments in the format implied by `path`.
pub fn write_frame(frame: &Frame, path: &Path) -> Result<TableFormat> {
    ensure_parent(path)?;
    let format = TableFormat::from_path(path);
    match format {
        TableFormat::Csv | TableFormat::Parquet => {
            let mut df = frame_table(frame)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            if format == TableFormat::Csv {
                CsvWriter::new(&mut file)
                    .include_header(true)
                    .finish(&mut df)?;
            } else {
                ParquetWriter::new(&mut file).finish(&mut df)?;
            }
        }
        TableFormat::Json => {
            let rows: Vec<_> = frame
                .screen
                .iter()
                .zip(&frame.segments)
                .map(|(px, s)| {
                    json!({
                        "screen": [px.x1, px.y1, px.x2, px.y2],
                        "points": [[s.a.x, s.a.y], [s.b.x, s.b.y]],
                    })
                })
                .collect();
            let doc = json!({
                "dimension": frame.dimension,
                "shape": frame.shape.name(),
                "segments": rows,
            });
            fs::write(path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(format)
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<i32>> {
    let series = df
        .column(name)
        .with_context(|| format!("segment table lacks column `{name}`"))?
        .cast(&DataType::Int64)?;
    let values = series
        .i64()?
        .into_iter()
        .map(|v| v.and_then(|v| i32::try_from(v).ok()))
        .collect::<Option<Vec<i32>>>();
    match values {
        Some(v) => Ok(v),
        None => bail!("column `{name}` has nulls or out-of-range values"),
    }
}

/// Read pixel segments back from a CSV or Parquet table.
pub fn read_screen_segments(path: &Path) -> Result<Vec<ScreenSegment>> {
    let lf = match TableFormat::from_path(path) {
        TableFormat::Csv => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        TableFormat::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        TableFormat::Json => bail!("figure input must be .csv or .parquet: {}", path.display()),
    };
    let df = lf
        .select([col("x1"), col("y1"), col("x2"), col("y2")])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let (x1, y1) = (int_column(&df, "x1")?, int_column(&df, "y1")?);
    let (x2, y2) = (int_column(&df, "x2")?, int_column(&df, "y2")?);
    Ok((0..x1.len())
        .map(|i| ScreenSegment {
            x1: x1[i],
            y1: y1[i],
            x2: x2[i],
            y2: y2[i],
        })
        .collect())
}

/// Black-on-white line drawing of `segments` on a `width×height` canvas.
pub fn render_svg(segments: &[ScreenSegment], width: u32, height: u32) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    for s in segments {
        let _ = writeln!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="1"/>"#,
            s.x1, s.y1, s.x2, s.y2
        );
    }
    svg.push_str("</svg>\n");
    svg
}
