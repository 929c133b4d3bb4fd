use anyhow::Result;
use linkmend_lib::{FileFix, fix_file};
use log::{error, info};
use std::io::{self, Write};
use std::path::Path;

use crate::ExitCode;
use crate::formatters::color::{BOLD_GREEN, BOLD_PINK, DIM, GREEN, PINK, color};
use crate::options::Config;

/// Apply the configured fix rules to every document below `path`
pub(crate) fn fix(path: &Path, cfg: &Config) -> Result<ExitCode> {
    let files = super::collect_files(path, cfg)?;
    let rules = cfg.fix_rules();
    info!("Applying {} fix rules", rules.len());

    let mut stdout = io::stdout().lock();
    let f = &mut stdout;
    writeln!(f, "Fixing links in {} files...", files.len())?;

    let mut processed = 0;
    for file in &files {
        writeln!(f, "Processing {}...", file.display())?;
        match fix_file(file, &rules, cfg.dry_run) {
            Ok(FileFix::Unchanged) => {
                processed += 1;
                color!(f, DIM, "  {}\n", "No changes needed.")?;
            }
            Ok(FileFix::Fixed(applied)) => {
                processed += 1;
                let verb = if cfg.dry_run { "Would fix" } else { "Fixed" };
                color!(f, GREEN, "  \u{2713} {verb}: {}\n", applied.join(", "))?;
            }
            Err(e) => {
                error!("{e}");
                color!(f, PINK, "  ERROR: {}\n", e)?;
            }
        }
    }

    writeln!(f, "\nSuccessfully processed {processed}/{} files.", files.len())?;
    if processed == files.len() {
        color!(f, BOLD_GREEN, "{}\n", "\u{2713} All files processed successfully!")?;
        Ok(ExitCode::Success)
    } else {
        color!(f, BOLD_PINK, "{}\n", "\u{2717} Some files had errors.")?;
        Ok(ExitCode::LinkCheckFailure)
    }
}
