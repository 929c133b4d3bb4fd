//! Output of the `extract` command

use anyhow::{Context, Result};
use std::fmt::{self, Display};

use crate::formatters::color::{BOLD_PINK, BOLD_YELLOW, DIM, NORMAL, YELLOW, color};
use crate::stats::LinkListing;

pub(crate) trait LinksFormatter {
    /// Format all links found by `extract`
    fn format(&self, listing: &LinkListing) -> Result<String>;
}

/// One numbered block per category followed by a summary of counts
pub(crate) struct Grouped;

struct GroupedListing<'a>(&'a LinkListing);

impl Display for GroupedListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listing = self.0;

        for error in &listing.errors {
            color!(f, BOLD_PINK, "Cannot read {}: {}\n", error.path.display(), error.error)?;
        }

        if listing.total == 0 {
            return writeln!(f, "No links found.");
        }

        for (category, links) in &listing.categories {
            let title = category.to_string().replace('_', " ").to_uppercase();
            color!(f, BOLD_YELLOW, "\n{} LINKS ({}):\n", title, links.len())?;
            color!(f, DIM, "{}\n", "-".repeat(40))?;
            for (i, link) in links.iter().enumerate() {
                writeln!(f, "{:3}. {link}", i + 1)?;
            }
        }

        color!(f, NORMAL, "\n{}\n", "SUMMARY:")?;
        writeln!(f, "Total href attributes found: {}", listing.total)?;
        writeln!(f, "Unique links: {}", listing.unique())?;
        for (category, links) in &listing.categories {
            color!(f, YELLOW, "{}: {} unique links\n", category, links.len())?;
        }
        Ok(())
    }
}

impl LinksFormatter for Grouped {
    fn format(&self, listing: &LinkListing) -> Result<String> {
        Ok(GroupedListing(listing).to_string())
    }
}

pub(crate) struct Json;

impl LinksFormatter for Json {
    fn format(&self, listing: &LinkListing) -> Result<String> {
        serde_json::to_string_pretty(listing).context("Cannot format links as JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkmend_lib::classify;
    use pretty_assertions::assert_eq;

    fn listing() -> LinkListing {
        let mut listing = LinkListing::new();
        listing.files = 1;
        for href in ["/b", "/a", "/a", "mailto:me@example.com", "#top"] {
            listing.add(&classify(href));
        }
        listing
    }

    #[test]
    fn test_grouped() {
        console::set_colors_enabled(false);
        let output = Grouped.format(&listing()).unwrap();

        assert!(output.contains("\nINTERNAL LINKS (2):\n"));
        assert!(output.contains("  1. /a\n  2. /b\n"));
        assert!(output.contains("ANCHOR ONLY LINKS (1):"));
        assert!(output.contains("Total href attributes found: 5"));
        assert!(output.contains("Unique links: 4"));
        assert!(output.contains("email: 1 unique links"));
    }

    #[test]
    fn test_no_links() {
        let output = Grouped.format(&LinkListing::new()).unwrap();
        assert_eq!(output, "No links found.\n");
    }

    #[test]
    fn test_json() {
        let output = Json.format(&listing()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 5);
        assert_eq!(value["categories"]["internal"], serde_json::json!(["/a", "/b"]));
        assert_eq!(value["categories"]["anchor_only"], serde_json::json!(["#top"]));
    }
}
