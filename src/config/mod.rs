// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. defaults
//! 2. sbcbuild.toml (cwd)
//! 3. --ini files, in order
//! 4. SBCBUILD_* env vars
//! 5. --set overrides
//! ```
//!
//! # Option Table
//!
//! ```toml
//! [options]
//! vulkan = true
//! use_static_cpp = false
//! linker = "mold"
//! ```

pub mod loader;
pub mod options;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GlobalConfig, OptionOverride, ToolchainConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Toolchain binary selections.
    pub toolchain: ToolchainConfig,
    /// Raw build-option overrides, validated at resolution time.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, OptionOverride>,
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Returns one line per option, deterministically ordered.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut entries = BTreeMap::new();

        entries.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        entries.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        entries.insert(
            "global.log_file".to_string(),
            self.global.log_file.display().to_string(),
        );
        entries.insert("toolchain.cc".to_string(), self.toolchain.cc.clone());
        entries.insert("toolchain.cxx".to_string(), self.toolchain.cxx.clone());
        for (key, value) in &self.options {
            entries.insert(format!("options.{key}"), value.to_string());
        }

        let max_key_len = entries.keys().map(String::len).max().unwrap_or(0);

        entries
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
