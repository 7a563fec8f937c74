// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, ToolchainConfig, [options] table
//! OptionOverride: bool or string, validated against descriptors later
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::buildenv::types::OptionValue;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: PathBuf::from("sbcbuild.log"),
        }
    }
}

/// Toolchain binary selections seeded into the build environment before
/// platform configuration runs (which may override them).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// C compiler binary.
    pub cc: String,
    /// C++ compiler binary.
    pub cxx: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            cc: "gcc".to_string(),
            cxx: "g++".to_string(),
        }
    }
}

/// A raw option value from the `[options]` table or a `--set` override.
///
/// Typed lazily: validation against the declaring descriptor happens at
/// resolution time, where the option's identity is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionOverride {
    /// Boolean toggle.
    Bool(bool),
    /// Enumerated string selection.
    Str(String),
}

impl OptionOverride {
    /// Converts to a resolved option value.
    #[must_use]
    pub fn to_option_value(&self) -> OptionValue {
        match self {
            Self::Bool(value) => OptionValue::Bool(*value),
            Self::Str(value) => OptionValue::Str(value.clone()),
        }
    }
}

impl std::fmt::Display for OptionOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
        }
    }
}
