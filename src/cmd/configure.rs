// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The configure command.
//!
//! ```text
//! resolve options -> seed env -> probe -> platform.configure -> emit
//! ```

use tracing::info;

use crate::cli::configure::{ConfigureArgs, OutputFormat};
use crate::config::Config;
use crate::config::options::{resolve_options, seed_environment};
use crate::core::buildenv::BuildEnv;
use crate::error::Result;
use crate::platform::sbc::SbcPlatform;
use crate::platform::{HostFamily, Platform};

/// Resolves options, probes the host and produces the configured build
/// environment for the given platform.
///
/// # Errors
///
/// Returns an error if option validation fails, the probe rejects the
/// host (unless `--no-probe`), or the flags query fails.
pub async fn build_environment(
    args: &ConfigureArgs,
    config: &Config,
    platform: &dyn Platform,
) -> Result<BuildEnv> {
    let resolved = resolve_options(config, platform)?;
    let mut env = seed_environment(config, resolved);

    if !args.no_probe && !platform.can_build(HostFamily::current()).await {
        anyhow::bail!("platform {} cannot be built on this host", platform.name());
    }

    platform.configure(&mut env, args.arch).await?;

    info!(platform = platform.name(), arch = %args.arch, "environment configured");
    Ok(env)
}

/// Runs the configure command and emits the environment.
///
/// # Errors
///
/// Returns an error under the same conditions as [`build_environment`].
pub async fn run_configure_command(args: &ConfigureArgs, config: &Config) -> Result<()> {
    let platform = SbcPlatform::new();
    let env = build_environment(args, config, &platform).await?;

    match args.format {
        OutputFormat::Text => {
            for line in env.format_lines() {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&env)?);
        }
    }

    Ok(())
}
