use super::{StatsFormatter, status_icon};
use crate::formatters::color::{BOLD_YELLOW, DIM, GREEN, PINK, color};
use crate::{options, stats::CheckStats};

use anyhow::Result;
use pad::{Alignment, PadStr};
use std::fmt::{self, Display};

// Maximum padding for each entry in the final statistics output
const MAX_PADDING: usize = 20;

fn write_stat(f: &mut fmt::Formatter, title: &str, stat: usize, newline: bool) -> fmt::Result {
    let fill = title.chars().count();
    f.write_str(title)?;
    f.write_str(
        &stat
            .to_string()
            .pad(MAX_PADDING - fill, '.', Alignment::Right, false),
    )?;

    if newline {
        f.write_str("\n")?;
    }

    Ok(())
}

/// Wrap as newtype because multiple `Display` implementations are not allowed
/// for `CheckStats`
struct DetailedCheckStats<'a> {
    stats: &'a CheckStats,
    mode: options::OutputMode,
}

impl Display for DetailedCheckStats<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;

        for document in &stats.documents {
            if document.links.is_empty() {
                continue;
            }
            color!(f, BOLD_YELLOW, "{}\n", document.path.display())?;
            for result in &document.links {
                let icon = status_icon(result, &self.mode);
                if result.is_broken() {
                    color!(f, PINK, "  {} {}", icon, result.link.original)?;
                    color!(f, DIM, " (line {})\n", result.line)?;
                    writeln!(
                        f,
                        "    -> Target file not found: {}",
                        result.resolution.path.display()
                    )?;
                } else {
                    color!(f, GREEN, "  {} {}\n", icon, result.link.original)?;
                }
            }
            writeln!(f)?;
        }

        for error in &stats.errors {
            color!(
                f,
                PINK,
                "Cannot read {}: {}\n",
                error.path.display(),
                error.error
            )?;
        }
        if !stats.errors.is_empty() {
            writeln!(f)?;
        }

        let separator = "-".repeat(MAX_PADDING + 1);

        writeln!(f, "\u{1f4dd} Summary")?; // 📝
        writeln!(f, "{separator}")?;
        write_stat(f, "\u{1f4c4} Files", stats.files, true)?; // 📄
        write_stat(f, "\u{1f50d} Links", stats.total, true)?; // 🔍
        write_stat(f, "\u{2705} Successful", stats.successful, true)?; // ✅
        write_stat(f, "\u{1f6ab} Broken", stats.broken, true)?; // 🚫
        write_stat(f, "\u{26d4} Unreadable", stats.unreadable(), false)?; // ⛔

        Ok(())
    }
}

pub(crate) struct Detailed {
    mode: options::OutputMode,
}

impl Detailed {
    pub(crate) const fn new(mode: options::OutputMode) -> Self {
        Self { mode }
    }
}

impl StatsFormatter for Detailed {
    fn format(&self, stats: &CheckStats) -> Result<String> {
        let detailed = DetailedCheckStats {
            stats,
            mode: self.mode.clone(),
        };
        Ok(detailed.to_string())
    }
}
