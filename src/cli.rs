//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::resolver::DEFAULT_ANCESTRY_DEPTH;

/// slipfind - routing slip resolver
///
/// Resolve routing slips from local git commit history.
#[derive(Parser, Debug)]
#[command(
    name = "slipfind",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve routing slips from local git commit history",
    long_about = "slipfind walks the commit ancestry from HEAD and queries the slip store \
                  to find a matching routing slip. On success it prints only the \
                  correlation id to stdout, for consumption by pipeline tooling.\n\n\
                  All repository context (head commit, branch, repository name) is derived \
                  from the local checkout; the repository name comes from the 'origin' \
                  remote URL.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  slipfind\n    \
                  slipfind /path/to/repo\n    \
                  slipfind --depth 50\n    \
                  slipfind -v"
)]
pub struct Cli {
    /// Path to the git checkout to resolve (defaults to current directory)
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Maximum ancestry depth to search for matching slips
    #[arg(long, short = 'd', default_value_t = DEFAULT_ANCESTRY_DEPTH, allow_negative_numbers = true)]
    pub depth: i64,

    /// Enable verbose/debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Secret locator (path[#key]) for the pipeline definition; takes
    /// precedence over --pipeline-config
    #[arg(long, env = "SLIPFIND_VAULT_PATH", value_name = "PATH[#KEY]")]
    pub vault_path: Option<String>,

    /// KV mount point for the secret source
    #[arg(long, env = "SLIPFIND_VAULT_MOUNT", value_name = "MOUNT")]
    pub vault_mount: Option<String>,

    /// Local pipeline definition file, used only when no secret locator
    /// is configured
    #[arg(long, env = "SLIPFIND_PIPELINE_CONFIG", value_name = "FILE")]
    pub pipeline_config: Option<PathBuf>,

    /// Slip store endpoint URL
    #[arg(long, env = "SLIPFIND_STORE_URL", value_name = "URL")]
    pub store_url: Option<String>,
}
