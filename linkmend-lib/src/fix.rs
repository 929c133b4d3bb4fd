//! Rewriting known-broken `href` values in place.
//!
//! A [`FixRules`] table is an ordered list of `(pattern, replacement,
//! description)` entries. Rules run in sequence over the full text, each one
//! seeing the output of the previous. Replacements may refer to capture
//! groups with `$1` or `${name}`.

use std::fs;
use std::path::Path;

use log::{debug, info};
use regex::Regex;
use serde::Deserialize;

use crate::{ErrorKind, InputContent, Result};

/// Built-in rules as `(pattern, replacement, description)`.
///
/// No pattern matches the output of any replacement, so applying the table
/// to already fixed text is a no-op.
const BUILTIN_RULES: [(&str, &str, &str); 7] = [
    (
        r#"href=["']\{\{src\}\}["']"#,
        r##"href="#""##,
        "Template variable {{src}}",
    ),
    (
        r#"href=["']\$\{post\.link\}["']"#,
        r##"href="#""##,
        "Template variable ${post.link}",
    ),
    (
        r#"href=["']\$\{post\.link\} target=["']"#,
        r##"href="#" target=""##,
        "Malformed template variable",
    ),
    (
        r#"href=["']\$\{post\.link\}\s+target="#,
        r##"href="#" target="##,
        "Malformed template variable with space",
    ),
    (
        r#"href=["']null([^"'\s@]+@[^"'\s]+)["']"#,
        r#"href="mailto:${1}""#,
        "Fix email link",
    ),
    (
        r#"href=["']null(\+?[0-9][0-9-]*)["']"#,
        r#"href="tel:${1}""#,
        "Fix phone link",
    ),
    (
        r#"href=["']nullvoid\(0\);?["']"#,
        r#"href="javascript:void(0);""#,
        "Fix JavaScript void link",
    ),
];

/// A single find/replace rule
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawFixRule")]
pub struct FixRule {
    pattern: Regex,
    replacement: String,
    description: String,
}

/// The on-disk shape of a rule, before the pattern is compiled
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFixRule {
    pattern: String,
    replacement: String,
    description: String,
}

impl TryFrom<RawFixRule> for FixRule {
    type Error = ErrorKind;

    fn try_from(raw: RawFixRule) -> Result<Self> {
        FixRule::new(&raw.pattern, raw.replacement, raw.description)
    }
}

impl FixRule {
    /// Compile a new rule
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFixPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn new(
        pattern: &str,
        replacement: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| ErrorKind::InvalidFixPattern(pattern.to_string(), e))?;
        Ok(Self {
            pattern: regex,
            replacement: replacement.into(),
            description: description.into(),
        })
    }

    /// Human-readable label used when reporting the fix
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The regular expression this rule looks for
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Result of running a rule table over some text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed {
    /// The rewritten text
    pub content: String,
    /// Descriptions of the rules that matched, in rule order
    pub applied: Vec<String>,
}

impl Fixed {
    /// Whether at least one rule matched
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// An immutable, ordered list of fix rules
#[derive(Debug, Clone)]
pub struct FixRules(Vec<FixRule>);

impl FixRules {
    /// A table with exactly the given rules
    #[must_use]
    pub const fn new(rules: Vec<FixRule>) -> Self {
        Self(rules)
    }

    /// The built-in rules for common template and `null`-prefix breakage
    #[must_use]
    pub fn builtin() -> Self {
        Self(
            BUILTIN_RULES
                .iter()
                .map(|(pattern, replacement, description)| FixRule {
                    pattern: Regex::new(pattern).expect("built-in fix patterns are valid"),
                    replacement: (*replacement).to_string(),
                    description: (*description).to_string(),
                })
                .collect(),
        )
    }

    /// Append more rules after the existing ones
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = FixRule>) -> Self {
        self.0.extend(rules);
        self
    }

    /// Number of rules in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &FixRule> {
        self.0.iter()
    }

    /// Apply all rules to `content`
    #[must_use]
    pub fn apply(&self, content: &str) -> Fixed {
        let mut content = content.to_string();
        let mut applied = Vec::new();

        for rule in &self.0 {
            if !rule.pattern.is_match(&content) {
                continue;
            }
            debug!("Applying fix rule: {}", rule.description);
            content = rule
                .pattern
                .replace_all(&content, rule.replacement.as_str())
                .into_owned();
            applied.push(rule.description.clone());
        }

        Fixed { content, applied }
    }
}

impl Default for FixRules {
    fn default() -> Self {
        Self::builtin()
    }
}

/// What happened to a file passed to [`fix_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFix {
    /// No rule matched; the file was left alone
    Unchanged,
    /// The listed rules matched and the file was rewritten (or would have
    /// been, in a dry run)
    Fixed(Vec<String>),
}

/// Apply `rules` to the file at `path`, writing it back if anything changed.
///
/// The file is only touched if at least one rule matched. With `dry_run`
/// set, nothing is written but the outcome is reported the same way.
///
/// # Errors
///
/// Returns [`ErrorKind::ReadFile`] if the file cannot be read and
/// [`ErrorKind::WriteFile`] if the rewritten content cannot be stored.
pub fn fix_file(path: &Path, rules: &FixRules, dry_run: bool) -> Result<FileFix> {
    let input = InputContent::from_path(path)?;
    let fixed = rules.apply(&input.content);
    if !fixed.is_changed() {
        return Ok(FileFix::Unchanged);
    }

    if dry_run {
        info!("Would fix {} (dry run)", path.display());
    } else {
        fs::write(path, &fixed.content).map_err(|e| ErrorKind::WriteFile(path.to_path_buf(), e))?;
        info!("Fixed {}", path.display());
    }
    Ok(FileFix::Fixed(fixed.applied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(r#"<img href="{{src}}">"#, r##"<img href="#">"##)]
    #[case(r#"<a href='${post.link}'>"#, r##"<a href="#">"##)]
    #[case(r#"<a href="${post.link} target="_blank">"#, r##"<a href="#" target="_blank">"##)]
    #[case(r#"<a href="${post.link}   target=_blank>"#, r##"<a href="#" target=_blank>"##)]
    #[case(
        r#"<a href="nullinfo@example.com">"#,
        r#"<a href="mailto:info@example.com">"#
    )]
    #[case(r#"<a href="null+17134916004">"#, r#"<a href="tel:+17134916004">"#)]
    #[case(r#"<a href="nullvoid(0);">"#, r#"<a href="javascript:void(0);">"#)]
    fn test_builtin_rules(#[case] input: &str, #[case] expected: &str) {
        let fixed = FixRules::builtin().apply(input);
        assert_eq!(fixed.content, expected);
        assert_eq!(fixed.applied.len(), 1);
    }

    #[test]
    fn test_untouched_content() {
        let html = r#"<a href="/about">About</a><a href="mailto:me@example.com">"#;
        let fixed = FixRules::default().apply(html);
        assert!(!fixed.is_changed());
        assert_eq!(fixed.content, html);
    }

    #[test]
    fn test_reports_each_matching_rule_once() {
        let html = r#"<a href="{{src}}"></a><a href="{{src}}"></a><a href="null+1">"#;
        let fixed = FixRules::builtin().apply(html);
        assert_eq!(
            fixed.applied,
            vec!["Template variable {{src}}", "Fix phone link"]
        );
        assert_eq!(
            fixed.content,
            r##"<a href="#"></a><a href="#"></a><a href="tel:+1">"##
        );
    }

    #[test]
    fn test_fixing_twice_changes_nothing() {
        let html = concat!(
            r#"<a href="{{src}}">"#,
            r#"<a href="${post.link}">"#,
            r#"<a href="${post.link} target="_blank">"#,
            r#"<a href='${post.link}' target=x>"#,
            r#"<a href="nullhello@example.org">"#,
            r#"<a href="null713-491-6004">"#,
            r#"<a href="nullvoid(0);">"#,
        );
        let rules = FixRules::builtin();
        let once = rules.apply(html);
        assert!(once.is_changed());
        let twice = rules.apply(&once.content);
        assert!(!twice.is_changed());
        assert_eq!(twice.content, once.content);
    }

    #[test]
    fn test_custom_rule_with_capture_group() -> Result<()> {
        let rules = FixRules::new(vec![FixRule::new(
            r#"href="/old/([a-z-]+)\.php""#,
            r#"href="/new/$1""#,
            "Legacy PHP pages",
        )?]);
        let fixed = rules.apply(r#"<a href="/old/contact-us.php">"#);
        assert_eq!(fixed.content, r#"<a href="/new/contact-us">"#);
        Ok(())
    }

    #[test]
    fn test_invalid_custom_rule() {
        let err = FixRule::new("href=(", "", "broken").unwrap_err();
        assert!(matches!(err, ErrorKind::InvalidFixPattern(p, _) if p == "href=("));
    }

    #[test]
    fn test_rule_deserializes() {
        let rule: FixRule = serde_json::from_str(
            r##"{"pattern": "href=\"#top\"", "replacement": "href=\"#\"", "description": "top"}"##,
        )
        .unwrap();
        assert_eq!(rule.description(), "top");
        assert_eq!(rule.pattern(), r##"href="#top""##);
    }

    #[test]
    fn test_fix_file_rewrites_only_on_match() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.html");
        let clean = dir.path().join("clean.html");
        fs::write(&broken, r#"<a href="{{src}}">"#).unwrap();
        fs::write(&clean, r#"<a href="/">"#).unwrap();

        let rules = FixRules::builtin();
        assert_eq!(
            fix_file(&broken, &rules, false)?,
            FileFix::Fixed(vec!["Template variable {{src}}".to_string()])
        );
        assert_eq!(fs::read_to_string(&broken).unwrap(), r##"<a href="#">"##);
        assert_eq!(fix_file(&broken, &rules, false)?, FileFix::Unchanged);
        assert_eq!(fix_file(&clean, &rules, false)?, FileFix::Unchanged);
        Ok(())
    }

    #[test]
    fn test_fix_file_dry_run_leaves_file_alone() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, r#"<a href="nullvoid(0);">"#).unwrap();

        let outcome = fix_file(&path, &FixRules::builtin(), true)?;
        assert!(matches!(outcome, FileFix::Fixed(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"<a href="nullvoid(0);">"#);
        Ok(())
    }

    #[test]
    fn test_fix_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.html");
        assert!(matches!(
            fix_file(&path, &FixRules::builtin(), false),
            Err(ErrorKind::ReadFile(..))
        ));
    }
}
