//! `linkmend` checks, lists and repairs the links of a static HTML site.
//!
//! The binary is a thin wrapper around `linkmend-lib`, which provides the
//! link classification, the file system resolution of internal links and the
//! fix rules.
//!
//! Check all internal links of the HTML files in the current directory:
//! ```sh
//! linkmend check
//! ```
//!
//! Check a generated site, including sub-directories:
//! ```sh
//! linkmend check --recursive public/
//! ```
//!
//! List every link of a page, grouped by category:
//! ```sh
//! linkmend extract public/index.html
//! ```
//!
//! Rewrite known-broken template leftovers, showing what would change first:
//! ```sh
//! linkmend fix --dry-run public/
//! linkmend fix public/
//! ```
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    missing_debug_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates,
    variant_size_differences,
    clippy::missing_const_for_fn
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![deny(missing_docs)]

use std::io;
use std::path::PathBuf;

use anyhow::{Error, Result, bail};
use clap::Parser;
use formatters::log::init_logging;
use log::error;

mod commands;
mod formatters;
mod options;
mod stats;
mod verbosity;

use crate::options::{Command, Config, LINKMEND_CONFIG_FILE, LinkmendOptions};

/// A C-like enum that can be cast to `i32` and used as process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    // NOTE: exit code 1 is used for any `Result::Err` bubbled up to `main()`
    // using the `?` operator. It acts as a catch-all for everything that is
    // neither a broken link nor a bad configuration.
    #[allow(unused)]
    UnexpectedFailure = 1,
    LinkCheckFailure = 2,
    ConfigFile = 3,
}

fn main() -> Result<()> {
    // std::process::exit doesn't guarantee that all destructors will be run,
    // therefore we wrap the main code in another function to ensure that.
    // See: https://doc.rust-lang.org/stable/std/process/fn.exit.html
    let exit_code = run_main()?;
    std::process::exit(exit_code);
}

/// Merge all provided config options into one.
/// This includes a potential config file, command-line- and environment variables
fn load_config() -> Result<LinkmendOptions> {
    let mut opts = LinkmendOptions::parse();

    init_logging(&opts.config.verbose, &opts.config.mode);

    // Load a potentially existing config file and merge it into the config from
    // the CLI
    if let Some(config_file) = &opts.config_file {
        match Config::load_from_file(config_file) {
            Ok(c) => opts.config.merge(c),
            Err(e) => {
                bail!(
                    "Cannot load configuration file `{}`: {e:?}",
                    config_file.display()
                );
            }
        }
    } else {
        // If no config file was explicitly provided, we try to load the default
        // config file from the current directory if the file exits. This will
        // raise an error if the file is invalid, just like the explicit provided
        // config file.
        let default_config = PathBuf::from(LINKMEND_CONFIG_FILE);
        if default_config.is_file() {
            match Config::load_from_file(&default_config) {
                Ok(c) => opts.config.merge(c),
                Err(e) => {
                    bail!(
                        "Cannot load default configuration file `{}`: {e:?}",
                        default_config.display()
                    );
                }
            }
        }
    }

    // Invalid exclude patterns are a configuration problem, not a failure of
    // the run itself
    opts.config.path_excludes()?;

    Ok(opts)
}

fn run_main() -> Result<i32> {
    use std::process::exit;

    let opts = match load_config() {
        Ok(opts) => opts,
        Err(e) => {
            error!("Error while loading config: {e}");
            exit(ExitCode::ConfigFile as i32);
        }
    };

    formatters::configure_colors(&opts.config.mode);

    match run(&opts) {
        Err(e) if Some(io::ErrorKind::BrokenPipe) == underlying_io_error_kind(&e) => {
            exit(ExitCode::Success as i32);
        }
        res => res,
    }
}

/// Check if the given error can be traced back to an `io::ErrorKind`
/// This is helpful for troubleshooting the root cause of an error.
/// Code is taken from the anyhow documentation.
fn underlying_io_error_kind(error: &Error) -> Option<io::ErrorKind> {
    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            return Some(io_error.kind());
        }
    }
    None
}

/// Run the selected sub-command
fn run(opts: &LinkmendOptions) -> Result<i32> {
    let cfg = &opts.config;
    let exit_code = match &opts.command {
        Command::Check { path } => commands::check(path, cfg)?,
        Command::Extract { path } => commands::extract(path, cfg)?,
        Command::Fix { path } => commands::fix(path, cfg)?,
    };
    Ok(exit_code as i32)
}
