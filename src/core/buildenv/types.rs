// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for the build environment.
//!
//! ```text
//! Arch: x86_32 | x86_64 | arm32 | arm64 | rv64 (Display/FromStr)
//! Define: NAME or NAME=VALUE preprocessor define
//! OptionValue: Bool | Str (resolved build option)
//! ```

use serde::{Serialize, Serializer};

use crate::error::ConfigError;

/// Target CPU architecture for the configured build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 32-bit x86
    X86,
    /// 64-bit x86-64
    X64,
    /// 32-bit ARM
    Arm32,
    /// 64-bit ARM
    Arm64,
    /// 64-bit RISC-V
    Rv64,
}

impl Arch {
    /// Returns the architecture of the build host.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(target_arch = "x86") {
            Self::X86
        } else if cfg!(target_arch = "arm") {
            Self::Arm32
        } else if cfg!(target_arch = "aarch64") {
            Self::Arm64
        } else if cfg!(target_arch = "riscv64") {
            Self::Rv64
        } else {
            Self::X64
        }
    }

    /// Returns the canonical architecture tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::X86 => "x86_32",
            Self::X64 => "x86_64",
            Self::Arm32 => "arm32",
            Self::Arm64 => "arm64",
            Self::Rv64 => "rv64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Arch {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "x86_32" | "x86" => Ok(Self::X86),
            "x86_64" => Ok(Self::X64),
            "arm32" => Ok(Self::Arm32),
            "arm64" => Ok(Self::Arm64),
            "rv64" => Ok(Self::Rv64),
            _ => Err(ConfigError::InvalidValue {
                section: "configure".to_string(),
                key: "arch".to_string(),
                message: format!(
                    "expected one of x86_32, x86_64, arm32, arm64, rv64, got '{s}'"
                ),
            }),
        }
    }
}

impl Serialize for Arch {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A preprocessor define, with or without a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    name: String,
    value: Option<String>,
}

impl Define {
    /// Creates a value-less define (`NAME`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a valued define (`NAME=VALUE`).
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// The define's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The define's value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl std::fmt::Display for Define {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={value}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<&str> for Define {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<(&str, &str)> for Define {
    fn from((name, value): (&str, &str)) -> Self {
        Self::with_value(name, value)
    }
}

impl Serialize for Define {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A resolved build option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean toggle.
    Bool(bool),
    /// One-of-enumerated-strings selection.
    Str(String),
}

impl OptionValue {
    /// Returns the boolean value, or `None` for string options.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Str(_) => None,
        }
    }

    /// Returns the string value, or `None` for boolean options.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Str(value) => Some(value),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
        }
    }
}
