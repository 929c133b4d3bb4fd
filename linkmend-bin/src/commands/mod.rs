pub(crate) mod check;
pub(crate) mod extract;
pub(crate) mod fix;

pub(crate) use check::check;
pub(crate) use extract::extract;
pub(crate) use fix::fix;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::options::Config;

/// Discover the documents a command works on
fn collect_files(path: &Path, cfg: &Config) -> Result<Vec<PathBuf>> {
    cfg.collector(path)?
        .collect_files()
        .with_context(|| format!("Cannot collect files from `{}`", path.display()))
}
