use anyhow::Result;
use console::Style;
use std::{
    fmt::{self, Display},
    sync::LazyLock,
};

use crate::formatters::color::{BOLD_GREEN, BOLD_PINK, BOLD_YELLOW, DIM, NORMAL, PINK, color};
use crate::{options, stats::CheckStats};

use super::{StatsFormatter, status_icon};

struct CompactCheckStats<'a> {
    stats: &'a CheckStats,
    mode: options::OutputMode,
}

impl Display for CompactCheckStats<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;

        let failing: Vec<_> = stats.failing_documents().collect();
        if !failing.is_empty() {
            let input = if failing.len() == 1 { "file" } else { "files" };
            color!(
                f,
                BOLD_PINK,
                "Broken links found in {} {input}. Find details below.\n\n",
                failing.len()
            )?;
        }

        for document in failing {
            color!(f, BOLD_YELLOW, "[{}]:\n", document.path.display())?;
            for result in document.broken() {
                color!(
                    f,
                    PINK,
                    "{} {}",
                    status_icon(result, &self.mode),
                    result.link.original
                )?;
                color!(
                    f,
                    DIM,
                    " (line {}): {}\n",
                    result.line,
                    result.resolution.path.display()
                )?;
            }
            writeln!(f)?;
        }

        for error in &stats.errors {
            color!(f, BOLD_PINK, "[{}]: {}\n", error.path.display(), error.error)?;
        }
        if !stats.errors.is_empty() {
            writeln!(f)?;
        }

        color!(
            f,
            NORMAL,
            "\u{1f50d} {} Links ({} {})",
            stats.total,
            stats.files,
            if stats.files == 1 { "file" } else { "files" }
        )?;
        color!(f, BOLD_GREEN, " \u{2705} {} OK", stats.successful)?;

        color!(f, BOLD_PINK, " \u{1f6ab} {} Broken", stats.broken)?;

        write_if_any(stats.unreadable(), "\u{26d4}", "Unreadable", &BOLD_YELLOW, f)?;

        Ok(())
    }
}

fn write_if_any(
    value: usize,
    symbol: &str,
    text: &str,
    style: &LazyLock<Style>,
    f: &mut fmt::Formatter<'_>,
) -> Result<(), fmt::Error> {
    if value > 0 {
        color!(f, style, " {} {} {}", symbol, value, text)?;
    }
    Ok(())
}

pub(crate) struct Compact {
    mode: options::OutputMode,
}

impl Compact {
    pub(crate) const fn new(mode: options::OutputMode) -> Self {
        Self { mode }
    }
}

impl StatsFormatter for Compact {
    fn format(&self, stats: &CheckStats) -> Result<String> {
        let compact = CompactCheckStats {
            stats,
            mode: self.mode.clone(),
        };
        Ok(compact.to_string())
    }
}
