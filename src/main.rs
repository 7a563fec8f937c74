// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> run()
//!   Probe | Options | Configure | Version
//! ```

use std::process::ExitCode;

use anyhow::Context;
use mimalloc::MiMalloc;

use sbcbuild_rs::cli::global::GlobalOptions;
use sbcbuild_rs::cli::{self, Command};
use sbcbuild_rs::cmd::configure::run_configure_command;
use sbcbuild_rs::cmd::options::run_options_command;
use sbcbuild_rs::cmd::probe::run_probe_command;
use sbcbuild_rs::config::Config;
use sbcbuild_rs::config::loader::ConfigLoader;
use sbcbuild_rs::error::Result;
use sbcbuild_rs::logging::{LogConfig, LogLevel, init_logging};
use sbcbuild_rs::platform::sbc::SbcPlatform;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&logging_from_cli(&cli.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn logging_from_cli(global: &GlobalOptions) -> LogConfig {
    let console = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or_default();
    let file = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console);

    LogConfig::builder()
        .console(console)
        .file(file)
        .maybe_path(global.log_file.clone())
        .build()
}

async fn run(cli: &cli::Cli) -> Result<ExitCode> {
    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return Ok(ExitCode::FAILURE);
    };

    match command {
        Command::Version => println!("{}", env!("CARGO_PKG_VERSION")),
        Command::Probe => {
            if !run_probe_command(&SbcPlatform::new()).await {
                // diagnosed already, the exit code carries the answer
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Options => {
            run_options_command(&load_config(&cli.global)?, &SbcPlatform::new())?;
        }
        Command::Configure(args) => {
            run_configure_command(args, &load_config(&cli.global)?).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// `sbcbuild.toml` from the cwd when present, then `--ini` files in
/// order, then `--set` overrides.
fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = ConfigLoader::new().add_toml_file_optional("sbcbuild.toml");
    for ini in &global.inis {
        loader = loader.add_toml_file(ini);
    }
    for assignment in &global.options {
        loader = loader.set_kv(assignment)?;
    }
    loader.build().context("failed to load configuration")
}
