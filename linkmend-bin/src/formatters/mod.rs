pub(crate) mod color;
pub(crate) mod links;
pub(crate) mod log;
pub(crate) mod stats;

use self::{links::LinksFormatter, stats::StatsFormatter};
use crate::options::{OutputMode, StatsFormat};
use supports_color::Stream;

/// Detects whether a terminal supports color, and gives details about that
/// support. It takes into account the `NO_COLOR` environment variable.
fn supports_color() -> bool {
    supports_color::on(Stream::Stdout).is_some()
}

/// Turn off styling globally when it would end up as escape codes in a pipe
/// or when plain output was requested
pub(crate) fn configure_colors(mode: &OutputMode) {
    if mode.is_plain() || !supports_color() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

pub(crate) fn get_stats_formatter(
    format: &StatsFormat,
    mode: &OutputMode,
) -> Box<dyn StatsFormatter> {
    match format {
        StatsFormat::Compact => Box::new(stats::Compact::new(mode.clone())),
        StatsFormat::Detailed => Box::new(stats::Detailed::new(mode.clone())),
        StatsFormat::Json => Box::new(stats::Json::new()),
    }
}

/// Create a formatter for the `extract` listing
pub(crate) fn get_links_formatter(format: &StatsFormat) -> Box<dyn LinksFormatter> {
    match format {
        StatsFormat::Json => Box::new(links::Json),
        StatsFormat::Compact | StatsFormat::Detailed => Box::new(links::Grouped),
    }
}
