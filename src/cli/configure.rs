// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the configure command.

use clap::{Args, ValueEnum};

use crate::core::buildenv::types::Arch;

/// Output format for the configured environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `key = value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Arguments for the configure command.
#[derive(Debug, Clone, Args)]
pub struct ConfigureArgs {
    /// Target CPU architecture (x86_32, x86_64, arm32, arm64, rv64).
    /// Defaults to the host architecture.
    #[arg(long, value_name = "ARCH", default_value_t = Arch::host())]
    pub arch: Arch,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the capability probe and configure unconditionally.
    #[arg(long)]
    pub no_probe: bool,
}
