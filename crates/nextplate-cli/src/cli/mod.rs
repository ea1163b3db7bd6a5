//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nextplate",
    bin_name = "nextplate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Next.js module scaffolding pipeline",
    long_about = "Nextplate runs create-next-app inside a scoped temporary \
                  directory, applies configuration-driven transformations, \
                  and emits the result as a portable file map.",
    after_help = "EXAMPLES:\n\
        \x20 nextplate generate module.json --name storefront --out ./storefront\n\
        \x20 nextplate generate module.json --router pages --format json\n\
        \x20 nextplate generate module.json --timeout 300 -vv\n\
        \x20 nextplate config",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one scaffold from a module configuration file.
    #[command(
        visible_alias = "gen",
        about = "Generate a configured Next.js module",
        after_help = "EXAMPLES:\n\
            \x20 nextplate generate module.json\n\
            \x20 nextplate generate module.json --out ./storefront\n\
            \x20 nextplate generate module.json --router pages --nextjs-version 14"
    )]
    Generate(GenerateArgs),

    /// Show the resolved application configuration.
    #[command(about = "Show configuration")]
    Config(ConfigArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `nextplate generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Module configuration file (JSON: dependency injections, removal list).
    #[arg(value_name = "MODULE_CONFIG", help = "Module configuration file")]
    pub module_config: PathBuf,

    /// Project name recorded in the scaffold context. Generation itself runs
    /// under a synthetic name; the outer assembler applies the real one.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        default_value = "frontend",
        help = "Project name for the scaffold context"
    )]
    pub name: String,

    /// Router layout for the generated project.
    #[arg(
        short = 'r',
        long = "router",
        value_name = "MODE",
        value_enum,
        help = "Router mode (default: app)"
    )]
    pub router: Option<RouterArg>,

    /// Requested Next.js version (informational; the generator pins its own).
    #[arg(long = "nextjs-version", value_name = "VERSION")]
    pub nextjs_version: Option<String>,

    /// Write the resulting file map to this directory instead of listing it.
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Kill the generator after this many seconds.
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Router layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RouterArg {
    /// App router (src/app directory conventions).
    App,
    /// Legacy pages router.
    Pages,
}

impl RouterArg {
    pub fn as_field_value(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Pages => "pages",
        }
    }
}

// ── config ────────────────────────────────────────────────────────────────────

/// Arguments for `nextplate config`.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Print only the configuration file path.
    #[arg(long = "path", help = "Show the config file location")]
    pub path: bool,
}
