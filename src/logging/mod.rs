// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging via the `tracing` ecosystem.
//!
//! ```text
//! init_logging(&LogConfig)
//!     console layer: ANSI, level-filtered, no target
//!     file layer:    optional, non-blocking, plain text
//!     LogGuard:      flushes the file writer on drop
//!
//! LogLevel: Silent < Errors < Warnings < Info < Debug < Trace
//!           (0-5 on the wire, for config files and --log-level)
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{ConfigError, Result};

/// Verbosity of a log sink.
///
/// Config files and the CLI address levels by number, 0 (silent) through
/// 5 (trace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// No output at all.
    Silent = 0,
    /// Errors only.
    Errors = 1,
    /// Errors and warnings.
    Warnings = 2,
    /// General progress information.
    #[default]
    Info = 3,
    /// Detailed debugging output.
    Debug = 4,
    /// Everything, including per-rule tracing.
    Trace = 5,
}

impl LogLevel {
    /// Parses a numeric level, `None` when out of range.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Silent),
            1 => Some(Self::Errors),
            2 => Some(Self::Warnings),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }

    /// The numeric form used in config files.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The `EnvFilter` directive selecting this verbosity.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Errors => "error",
            Self::Warnings => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-5, got {level}"),
        })
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    /// Console verbosity.
    #[builder(default)]
    console: LogLevel,
    /// File verbosity, applied only when a path is set.
    #[builder(default = LogLevel::Trace)]
    file: LogLevel,
    /// Log file path; no file layer without one.
    path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file
    }

    #[must_use]
    pub fn log_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Keeps the file writer's worker thread alive; dropping it flushes any
/// pending writes.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Installs the global tracing subscriber.
///
/// Hold the returned guard for the life of the program.
///
/// # Errors
///
/// Fails when the log file (or its parent directory) cannot be created.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .with_filter(EnvFilter::new(config.console_level().directive()));

    let registry = tracing_subscriber::registry().with(console);

    match config.log_path() {
        Some(path) => {
            let (writer, guard) = open_log_sink(path)?;
            let file = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(config.file_level().directive()));
            registry.with(file).init();
            Ok(LogGuard { _file: Some(guard) })
        }
        None => {
            registry.init();
            Ok(LogGuard { _file: None })
        }
    }
}

fn open_log_sink(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}

#[cfg(test)]
mod tests;
