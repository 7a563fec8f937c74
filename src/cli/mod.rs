// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! sbcbuild [global options] <command>
//! probe
//! options
//! configure [--arch ARCH] [--format text|json] [--no-probe]
//! version
//! ```

pub mod configure;
pub mod global;


use crate::cli::configure::ConfigureArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// SBC Platform Build Configurator
///
/// Detects whether this host can build for the sbc platform and produces
/// the platform's build environment.
#[derive(Debug, Parser)]
#[command(
    name = "sbcbuild",
    author,
    version,
    about = "SBC Platform Build Configurator",
    long_about = "sbcbuild-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Probes the host for the sbc platform's dependencies, resolves\n\
                  build options and emits the configured build environment. See\n\
                  `sbcbuild <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  sbcbuild loads `sbcbuild.toml` from the current directory when\n\
                  present. Additional files can be specified with --ini and are\n\
                  loaded afterwards, each overriding what came before. Individual\n\
                  keys can be overridden with --set, e.g.\n\
                  `--set options.vulkan=false`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Checks whether the sbc platform can be built on this host.
    Probe,

    /// Lists all build options and their resolved values.
    Options,

    /// Produces the configured build environment.
    Configure(ConfigureArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
