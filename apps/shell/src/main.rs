mod args;
mod handlers;
mod render;

use crate::args::{Cli, Commands};
use crate::handlers::{rules, select, session, validate};
use anyhow::{Context, Result};
use clap::Parser;
use composer::domain::config::ComposerConfig;
use composer::kernel::config::load_config;
use composer_logger::{LevelFilter, Logger};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let cfg: ComposerConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg, cli.verbose)?;

    let json = cli.json || cfg.output.json;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        Commands::Select { cpu, memory, gpu, no_gpu } => {
            let gpu = if no_gpu { false } else { gpu || cfg.form.gpu };
            select::run(&cfg.form, cpu, &memory, gpu, json, &mut out)?
        },
        Commands::Validate { raw } => validate::run(&raw, json, &mut out)?,
        Commands::Rules {} => rules::run(json, &mut out)?,
        Commands::Session {} => session::run(io::stdin().lock(), &mut out, &cfg.form, json)?,
    };

    out.flush()?;
    Ok(code)
}

fn init_logger(cfg: &ComposerConfig, verbose: u8) -> Result<Logger> {
    let base: LevelFilter = cfg
        .log
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", cfg.log.level))?;
    let level = Logger::verbosity(base, verbose);

    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).console(true).level(level);

    let logger = match cfg.log.file_directory() {
        Some(dir) => builder.path(dir).json(cfg.log.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
