// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .set_kv("options.vulkan=false")
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::Path;

use super::Config;
use crate::error::Result;

/// Environment variable prefix for overrides (`SBCBUILD_GLOBAL_LOG_FILE=...`).
const ENV_PREFIX: &str = "SBCBUILD";

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
        }
    }

    /// Adds a required TOML configuration file.
    ///
    /// The file is read when `build()` is called; a missing file or invalid
    /// TOML fails the build.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path, true)
    }

    /// Adds an optional TOML configuration file, silently skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path, false)
    }

    fn add_file<P: AsRef<Path>>(mut self, path: P, required: bool) -> Self {
        use config::{File, FileFormat};
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(required),
        );
        self
    }

    /// Adds inline TOML content.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Applies a `key=value` override, e.g. `options.vulkan=false`.
    ///
    /// Values parse as booleans or integers when they look like one,
    /// strings otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the override has no `=` or the key is invalid.
    pub fn set_kv(mut self, assignment: &str) -> Result<Self> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("invalid override '{assignment}', expected key=value"))?;

        let builder = if let Ok(b) = value.parse::<bool>() {
            self.builder.set_override(key, b)
        } else if let Ok(i) = value.parse::<i64>() {
            self.builder.set_override(key, i)
        } else {
            self.builder.set_override(key, value)
        };
        self.builder = builder.map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

        Ok(self)
    }

    /// Builds the configuration from all added sources, with `SBCBUILD_*`
    /// environment variables layered on top.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into `Config`.
    pub fn build(self) -> Result<Config> {
        let cfg = self
            .builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;
        let config: Config = cfg.try_deserialize()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
