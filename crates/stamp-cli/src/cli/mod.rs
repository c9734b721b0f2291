//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, value
//! names, and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Stamp has exactly one operation, so the surface is flat: no subcommands,
/// just the three rendering options plus the global flags.
#[derive(Debug, Parser)]
#[command(
    name    = "stamp",
    bin_name = "stamp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Fill {{PLACEHOLDER}} variables in a text template",
    long_about = "Stamp reads a UTF-8 template file, replaces every literal \
                  {{KEY}} token with the value supplied via --var KEY=VALUE, \
                  and writes the result to the output path (creating parent \
                  directories as needed).",
    after_help = "EXAMPLES:\n\
        \x20 stamp --template letter.txt --out out/letter.txt --var name=Ada\n\
        \x20 stamp --template motd.tmpl  --out /etc/motd --var host=web1 --var env=prod\n\
        \x20 stamp --template page.html  --out build/page.html",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags that configure logging and output, not rendering.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Path to the input template file.
    #[arg(
        long = "template",
        value_name = "PATH",
        help = "Template file to read"
    )]
    pub template: PathBuf,

    /// Path to the output file.  Parent directories are created if absent.
    #[arg(long = "out", value_name = "PATH", help = "Output file to write")]
    pub out: PathBuf,

    /// Substitution pairs, one per flag occurrence.
    ///
    /// Kept as raw strings here and parsed by `stamp-core` so that the
    /// shape error (`InvalidAssignment`) carries the full offending
    /// argument and flows through the normal error handler.
    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        action = clap::ArgAction::Append,
        help = "Variable to substitute (repeatable)"
    )]
    pub vars: Vec<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
