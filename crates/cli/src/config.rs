//! Optional JSON view config, overlaid on the built-in defaults.
//!
//! Every field is optional; missing fields keep the `ViewCfg` default.
//!
//! ```json
//! { "width": 1024, "height": 768, "unit_length": 90.0, "max_dimension": 6 }
//! ```

use anyhow::{Context, Result};
use polyrot::cfg::ViewCfg;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewFile {
    pub width: u32,
    pub height: u32,
    pub unit_length: f64,
    pub min_dimension: usize,
    pub max_dimension: usize,
    pub start_dimension: usize,
}

impl Default for ViewFile {
    fn default() -> Self {
        let cfg = ViewCfg::default();
        Self {
            width: cfg.width,
            height: cfg.height,
            unit_length: cfg.unit_length,
            min_dimension: cfg.min_dimension,
            max_dimension: cfg.max_dimension,
            start_dimension: cfg.start_dimension,
        }
    }
}

impl From<ViewFile> for ViewCfg {
    fn from(f: ViewFile) -> Self {
        ViewCfg {
            width: f.width,
            height: f.height,
            unit_length: f.unit_length,
            min_dimension: f.min_dimension,
            max_dimension: f.max_dimension,
            start_dimension: f.start_dimension,
        }
    }
}

/// Defaults when `path` is `None`; otherwise parse and validate the file.
pub fn load(path: Option<&Path>) -> Result<ViewCfg> {
    let cfg: ViewCfg = match path {
        None => ViewCfg::default(),
        Some(p) => {
            let raw = fs::read(p).with_context(|| format!("reading config {}", p.display()))?;
            let file: ViewFile = serde_json::from_slice(&raw)
                .with_context(|| format!("parsing config {}", p.display()))?;
            file.into()
        }
    };
    cfg.validate()?;
    Ok(cfg)
}
