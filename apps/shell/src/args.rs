//! # CLI Argument Definitions

use clap::{ArgAction, Parser, Subcommand};
use composer::domain::CpuModel;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "composer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Pick server models for a CPU, memory and GPU configuration")]
pub(crate) struct Cli {
    /// Configuration file (TOML, YAML or JSON). Defaults to `composer.*` if present
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    /// Render output as JSON
    #[arg(long, global = true)]
    pub(crate) json: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Fill in the form once, submit it and show the server models
    Select {
        /// CPU family: power, arm or x86 (config default when omitted)
        #[arg(short, long)]
        cpu: Option<CpuModel>,

        /// Memory size in MB, separators allowed (e.g. '524,288')
        #[arg(short, long, allow_hyphen_values = true)]
        memory: String,

        /// A GPU accelerator card is present
        #[arg(short, long)]
        gpu: bool,

        /// No GPU, overriding a configured default
        #[arg(long, conflicts_with = "gpu")]
        no_gpu: bool,
    },
    /// Check a memory size without selecting anything
    Validate {
        /// Memory size in MB, as typed
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// List the selection rules in evaluation order
    Rules {},
    /// Drive the form line by line from stdin (type 'help' for commands)
    Session {},
}
