// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling.
//!
//! ```text
//! ConfigError   UnknownOption, InvalidValue   (option resolution)
//! ProcessError  SpawnFailed, NonZeroExit,     (child processes)
//!               OutputError
//! ```
//!
//! Per-concern `thiserror` enums, carried through the `anyhow::Result`
//! alias at application seams.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Configuration and option-resolution errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An option was set that no platform or driver descriptor declares.
    #[error("unknown build option '{key}'")]
    UnknownOption { key: String },

    /// A value failed its descriptor's type or choice validation.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

/// Child-process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The child could not be started at all.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child ran and reported failure.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// The child's output could not be collected.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}
