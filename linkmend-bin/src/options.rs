use crate::verbosity::Verbosity;
use anyhow::{Context, Error, Result, anyhow};
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand, builder::TypedValueParser};
use const_format::formatcp;
use linkmend_lib::{
    Collector, DEFAULT_FALLBACK_EXTENSION, DEFAULT_INDEX_FILE, FileChecker, FileExtensions,
    FixRule, FixRules, PathExcludes,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, str::FromStr};
use strum::{Display, EnumIter, EnumString, VariantNames};

pub(crate) const LINKMEND_CONFIG_FILE: &str = "linkmend.toml";

// We use a custom help message here because we want to show the default
// value of the config file, but also be able to check if the user has
// provided a custom value. If they didn't, we won't throw an error if
// the file doesn't exist.
const HELP_MSG_CONFIG_FILE: &str = formatcp!(
    "Configuration file to use\n\n[default: {}]",
    LINKMEND_CONFIG_FILE,
);

/// The format to use for the final report of `check`
#[derive(Debug, Deserialize, Default, Clone, Display, EnumIter, VariantNames, PartialEq, Eq)]
#[non_exhaustive]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub(crate) enum StatsFormat {
    /// Only broken links, grouped by file, and a one-line summary
    Compact,
    /// Every internal link with its pass/fail status, then a summary table
    #[default]
    Detailed,
    /// Machine-readable report
    Json,
}

impl FromStr for StatsFormat {
    type Err = Error;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format.to_lowercase().as_str() {
            "compact" | "string" => Ok(StatsFormat::Compact),
            "detailed" => Ok(StatsFormat::Detailed),
            "json" => Ok(StatsFormat::Json),
            _ => Err(anyhow!("Unknown format {format}")),
        }
    }
}

/// The different formatter modes
///
/// This decides over whether to use color, emojis, or plain text for the
/// output.
#[derive(
    Debug, Deserialize, Default, Clone, Display, EnumIter, EnumString, VariantNames, PartialEq, Eq,
)]
#[non_exhaustive]
pub(crate) enum OutputMode {
    /// Plain text output.
    ///
    /// Useful for terminals without color support, for scripting, or when
    /// piping the output to another program.
    #[serde(rename = "plain")]
    #[strum(serialize = "plain", ascii_case_insensitive)]
    Plain,

    /// Colorful output.
    ///
    /// This is the default output mode.
    #[serde(rename = "color")]
    #[strum(serialize = "color", ascii_case_insensitive)]
    #[default]
    Color,

    /// Emoji output.
    ///
    /// Uses emojis instead of check marks to represent the status of links.
    #[serde(rename = "emoji")]
    #[strum(serialize = "emoji", ascii_case_insensitive)]
    Emoji,
}

impl OutputMode {
    /// Returns `true` if the response format is `Plain`
    pub(crate) const fn is_plain(&self) -> bool {
        matches!(self, OutputMode::Plain)
    }

    /// Returns `true` if the response format is `Emoji`
    pub(crate) const fn is_emoji(&self) -> bool {
        matches!(self, OutputMode::Emoji)
    }
}

// Macro for generating default functions to be used by serde
macro_rules! default_function {
    ( $( $name:ident : $T:ty = $e:expr; )* ) => {
        $(
            #[allow(clippy::missing_const_for_fn)]
            fn $name() -> $T {
                $e
            }
        )*
    };
}

// Generate the functions for serde defaults
default_function! {
    root_index: String = DEFAULT_INDEX_FILE.to_string();
    fallback_extensions: Vec<String> = vec![DEFAULT_FALLBACK_EXTENSION.to_string()];
    index_files: Vec<String> = vec![DEFAULT_INDEX_FILE.to_string()];
    verbosity: Verbosity = Verbosity::default();
}

// Macro for merging configuration values
macro_rules! fold_in {
    ($cli:ident , $toml:ident ; $ty:ident { $(..$ignore:ident,)* $( $key:ident : $default:expr, )* } ) => {
        if (false) {
            #[allow(dead_code, unused, clippy::diverging_sub_expression)]
            let _check_fold_in_exhaustivity = $ty {
                $($key: unreachable!(), )*
                $($ignore: unreachable!(), )*
            };
        };
        $(
            if $cli.$key == $default && $toml.$key != $default {
                $cli.$key = $toml.$key;
            }
        )*
    };
}

/// Check, list and repair links in static HTML sites
#[derive(Parser, Debug)]
#[command(version, about, next_display_order = None)]
pub(crate) struct LinkmendOptions {
    /// Configuration file to use
    #[arg(short, long = "config", global = true)]
    #[arg(help = HELP_MSG_CONFIG_FILE)]
    pub(crate) config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,

    #[clap(flatten)]
    pub(crate) config: Config,
}

/// The three things `linkmend` can do with a site
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Verify that every internal link resolves to a file
    ///
    /// Exits with status 2 if any link is broken or any file could not be
    /// read.
    Check {
        /// Site directory (or a single HTML file) to check
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List every link of a document, grouped by category
    Extract {
        /// HTML file (or directory of HTML files) to list links from
        #[arg(default_value = DEFAULT_INDEX_FILE)]
        path: PathBuf,
    },

    /// Rewrite known-broken link patterns in place
    ///
    /// A file is only rewritten if at least one fix rule matched.
    Fix {
        /// Site directory (or a single HTML file) to repair
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// The main configuration for linkmend
#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Verbose program output
    #[clap(flatten)]
    #[serde(default = "verbosity")]
    pub(crate) verbose: Verbosity,

    /// Output display mode
    #[arg(
        long,
        global = true,
        default_value_t = OutputMode::default(),
        value_parser = PossibleValuesParser::new(OutputMode::VARIANTS).map(|s| s.parse::<OutputMode>().unwrap())
    )]
    #[serde(default)]
    pub(crate) mode: OutputMode,

    /// Output format of the final report of `check` and of `extract`
    #[arg(long, global = true, default_value_t = StatsFormat::default())]
    #[serde(default)]
    pub(crate) format: StatsFormat,

    /// Descend into sub-directories when collecting HTML files
    #[arg(short, long, global = true)]
    #[serde(default)]
    pub(crate) recursive: bool,

    /// Do not skip files and directories whose name starts with a dot
    #[arg(long, global = true)]
    #[serde(default)]
    pub(crate) hidden: bool,

    /// File extensions of documents to collect from a directory
    #[arg(
        long,
        global = true,
        default_value_t = FileExtensions::default(),
        long_help = "File extensions of documents to collect when a directory is given.

Multiple extensions can be separated by commas, e.g. `--extensions html,htm,xhtml`."
    )]
    #[serde(default)]
    pub(crate) extensions: FileExtensions,

    /// Exclude file paths matching the given regular expression
    #[arg(long, global = true)]
    #[serde(default)]
    pub(crate) exclude_path: Vec<String>,

    /// Directory that root-relative links are resolved against
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        long_help = "Directory that root-relative links (e.g. `/about`) are resolved against.

Defaults to the directory given to `check` (or the parent directory when a
single file is given)."
    )]
    #[serde(default)]
    pub(crate) base: Option<PathBuf>,

    /// File that must exist for links to `/` to resolve
    #[arg(long, global = true, default_value = DEFAULT_INDEX_FILE)]
    #[serde(default = "root_index")]
    pub(crate) root_index: String,

    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        default_value = DEFAULT_FALLBACK_EXTENSION,
        long_help = "Extensions tried, in order, for links whose last path segment has no
extension of its own. `/about` resolves if `about.html` exists.

Example: --fallback-extensions html,htm,php
Use `--fallback-extensions ''` to disable extension completion."
    )]
    #[serde(default = "fallback_extensions")]
    pub(crate) fallback_extensions: Vec<String>,

    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        default_value = DEFAULT_INDEX_FILE,
        long_help = "Index files looked up, in order, when a link points at a directory.
`/blog/` resolves if `blog/index.html` exists.

Example: --index-files index.html,index.htm
Use `--index-files ''` to reject all directory links."
    )]
    #[serde(default = "index_files")]
    pub(crate) index_files: Vec<String>,

    /// Report what `fix` would change without writing any file
    #[arg(long, global = true)]
    #[serde(default)]
    pub(crate) dry_run: bool,

    /// Only apply fix rules from the configuration file
    #[arg(long, global = true)]
    #[serde(default)]
    pub(crate) no_builtin_fixes: bool,

    /// Additional fix rules; only configurable through the config file
    #[arg(skip)]
    #[serde(default)]
    pub(crate) fix: Vec<FixRule>,
}

impl Config {
    /// Load configuration from a file
    pub(crate) fn load_from_file(path: &Path) -> Result<Config> {
        // Read configuration file
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).with_context(|| "Failed to parse configuration file")
    }

    /// Merge the configuration from TOML into the CLI configuration
    pub(crate) fn merge(&mut self, toml: Config) {
        // Fix rules are only available in TOML (not in the CLI), and
        // `Regex` doesn't implement `Eq`, so they are handled outside of
        // fold_in!
        self.fix = toml.fix;

        // NOTE: if you see an error within this macro call, check to make sure that
        // that the fields provided to fold_in! match all the fields of the Config struct.
        fold_in! {
            // Destination and source configs
            self, toml;

            Config {
                // Keys which are handled outside of fold_in
                ..fix,

                // Keys with defaults to assign
                base: None,
                dry_run: false,
                exclude_path: Vec::<String>::new(),
                extensions: FileExtensions::default(),
                fallback_extensions: fallback_extensions(),
                format: StatsFormat::default(),
                hidden: false,
                index_files: index_files(),
                mode: OutputMode::default(),
                no_builtin_fixes: false,
                recursive: false,
                root_index: root_index(),
                verbose: Verbosity::default(),
            }
        }
    }

    /// The compiled `--exclude-path` patterns
    pub(crate) fn path_excludes(&self) -> Result<PathExcludes> {
        PathExcludes::new(&self.exclude_path).context("Cannot parse `--exclude-path` patterns")
    }

    /// A collector for the given input honoring the discovery options
    pub(crate) fn collector(&self, path: &Path) -> Result<Collector> {
        let excludes = self.path_excludes()?;
        Ok(Collector::new(path)
            .recursive(self.recursive)
            .skip_hidden(!self.hidden)
            .extensions(self.extensions.clone())
            .excluded_paths(excludes))
    }

    /// A file checker rooted at `--base`, or at `path` itself
    pub(crate) fn file_checker(&self, path: &Path) -> FileChecker {
        let base = self.base.clone().unwrap_or_else(|| default_base(path));
        FileChecker::builder()
            .base(base)
            .root_index(self.root_index.clone())
            .fallback_extensions(without_empty(&self.fallback_extensions))
            .index_files(without_empty(&self.index_files))
            .build()
    }

    /// The fix rules to apply: built-ins (unless disabled) followed by the
    /// rules from the config file
    pub(crate) fn fix_rules(&self) -> FixRules {
        let rules = if self.no_builtin_fixes {
            FixRules::new(Vec::new())
        } else {
            FixRules::builtin()
        };
        rules.with_rules(self.fix.iter().cloned())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: Verbosity::default(),
            mode: OutputMode::default(),
            format: StatsFormat::default(),
            recursive: false,
            hidden: false,
            extensions: FileExtensions::default(),
            exclude_path: Vec::new(),
            base: None,
            root_index: root_index(),
            fallback_extensions: fallback_extensions(),
            index_files: index_files(),
            dry_run: false,
            no_builtin_fixes: false,
            fix: Vec::new(),
        }
    }
}

// A single file is checked relative to the directory it lives in
fn default_base(path: &Path) -> PathBuf {
    if path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    } else {
        path.to_path_buf()
    }
}

// `--index-files ''` yields a single empty entry, which means "none"
fn without_empty(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .collect()
}
