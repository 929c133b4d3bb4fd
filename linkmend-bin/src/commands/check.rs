use anyhow::Result;
use linkmend_lib::{InputContent, check_document};
use log::{info, warn};
use std::io::{self, Write};
use std::path::Path;

use crate::ExitCode;
use crate::formatters::get_stats_formatter;
use crate::options::Config;
use crate::stats::CheckStats;

/// Check all internal links of the documents below `path`.
///
/// Unreadable documents are reported and counted but do not stop the run.
pub(crate) fn check(path: &Path, cfg: &Config) -> Result<ExitCode> {
    let files = super::collect_files(path, cfg)?;
    let checker = cfg.file_checker(path);

    if files.is_empty() {
        warn!("No files to check in {}", path.display());
    }
    info!(
        "Checking {} files against {}",
        files.len(),
        checker.base().display()
    );

    let mut stats = CheckStats::new();
    for file in &files {
        match InputContent::from_path(file) {
            Ok(input) => stats.add_document(file, check_document(&checker, &input)),
            Err(e) => {
                warn!("{e}");
                stats.add_error(file, &e);
            }
        }
    }

    let formatter = get_stats_formatter(&cfg.format, &cfg.mode);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", formatter.format(&stats)?)?;

    Ok(if stats.is_success() {
        ExitCode::Success
    } else {
        ExitCode::LinkCheckFailure
    })
}
