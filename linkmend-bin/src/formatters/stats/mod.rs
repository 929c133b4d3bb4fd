mod compact;
mod detailed;
mod json;

pub(crate) use compact::Compact;
pub(crate) use detailed::Detailed;
pub(crate) use json::Json;

use crate::{options::OutputMode, stats::CheckStats};
use anyhow::Result;
use linkmend_lib::LinkResult;

pub(crate) trait StatsFormatter {
    /// Format the result of a `check` run
    fn format(&self, stats: &CheckStats) -> Result<String>;
}

/// The marker printed in front of a checked link
fn status_icon(result: &LinkResult, mode: &OutputMode) -> &'static str {
    match (mode.is_emoji(), result.is_broken()) {
        (true, false) => "\u{2705}", // ✅
        (true, true) => "\u{1f6ab}", // 🚫
        (false, _) => result.resolution.icon(),
    }
}
