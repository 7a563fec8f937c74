// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform descriptors.
//!
//! # Architecture
//!
//! ```text
//! Platform (trait)
//!   name        -> fixed identifier
//!   can_build   -> host family gate + dependency probe
//!   options     -> ordered BuildOption descriptors (no side effects)
//!   extra_flags -> platform-specific env presets
//!   configure   -> mutates a BuildEnv, once, in declared order
//! ```
//!
//! The driver resolves option values first, then calls `can_build`
//! followed by `configure`, sequentially, on one thread.

pub mod sbc;

use futures_util::future::BoxFuture;

use crate::core::buildenv::BuildEnv;
use crate::core::buildenv::types::{Arch, OptionValue};
use crate::error::{ConfigError, Result};

/// Operating-system family of the build host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFamily {
    /// POSIX-compliant hosts (Linux, BSDs, macOS).
    Posix,
    /// Windows hosts.
    Windows,
}

impl HostFamily {
    /// Returns the family of the machine this process runs on.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(unix) {
            Self::Posix
        } else {
            Self::Windows
        }
    }

    #[must_use]
    pub const fn is_posix(self) -> bool {
        matches!(self, Self::Posix)
    }
}

/// Default value of a build option descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    /// Boolean toggle.
    Bool(bool),
    /// One-of-enumerated-strings selection.
    Enum {
        default: &'static str,
        choices: &'static [&'static str],
    },
}

/// A configurable build option: identifier, human-readable description,
/// and default value.
///
/// Declaring a descriptor has no side effects; values only take effect
/// once the driver resolves them into the build environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOption {
    id: &'static str,
    description: &'static str,
    default: OptionDefault,
}

impl BuildOption {
    /// Declares a boolean option.
    #[must_use]
    pub const fn boolean(id: &'static str, description: &'static str, default: bool) -> Self {
        Self {
            id,
            description,
            default: OptionDefault::Bool(default),
        }
    }

    /// Declares an enumerated option.
    #[must_use]
    pub const fn enumerated(
        id: &'static str,
        description: &'static str,
        default: &'static str,
        choices: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            description,
            default: OptionDefault::Enum { default, choices },
        }
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub const fn default(&self) -> OptionDefault {
        self.default
    }

    /// The default as a resolved option value.
    #[must_use]
    pub fn default_value(&self) -> OptionValue {
        match self.default {
            OptionDefault::Bool(value) => OptionValue::Bool(value),
            OptionDefault::Enum { default, .. } => OptionValue::Str(default.to_string()),
        }
    }

    /// Checks a resolved value against this descriptor's type and, for
    /// enumerated options, its declared choices.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the offending option.
    pub fn validate(&self, value: &OptionValue) -> std::result::Result<(), ConfigError> {
        match (self.default, value) {
            (OptionDefault::Bool(_), OptionValue::Bool(_)) => Ok(()),
            (OptionDefault::Bool(_), OptionValue::Str(s)) => Err(ConfigError::InvalidValue {
                section: "options".to_string(),
                key: self.id.to_string(),
                message: format!("expected a boolean, got '{s}'"),
            }),
            (OptionDefault::Enum { choices, .. }, OptionValue::Str(s)) => {
                if choices.contains(&s.as_str()) {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidValue {
                        section: "options".to_string(),
                        key: self.id.to_string(),
                        message: format!("expected one of [{}], got '{s}'", choices.join(", ")),
                    })
                }
            }
            (OptionDefault::Enum { .. }, OptionValue::Bool(b)) => Err(ConfigError::InvalidValue {
                section: "options".to_string(),
                key: self.id.to_string(),
                message: format!("expected a string, got '{b}'"),
            }),
        }
    }
}

/// A buildable target platform.
pub trait Platform: Send + Sync {
    /// Fixed short identifier for the platform.
    fn name(&self) -> &'static str;

    /// Whether the current host can build for this platform.
    ///
    /// Never errors; a failing dependency probe reads as "cannot build"
    /// and is diagnosed on stdout.
    fn can_build<'a>(&'a self, host: HostFamily) -> BoxFuture<'a, bool>;

    /// Ordered option descriptors for this platform.
    fn options(&self) -> Vec<BuildOption>;

    /// Extra compiler/linker flag presets contributed unconditionally.
    fn extra_flags(&self) -> Vec<(String, String)>;

    /// Mutates the build environment for this platform and architecture.
    ///
    /// The environment must already carry resolved option values.
    fn configure<'a>(&'a self, env: &'a mut BuildEnv, arch: Arch) -> BoxFuture<'a, Result<()>>;
}
