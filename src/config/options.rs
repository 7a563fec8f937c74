// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build-option resolution.
//!
//! ```text
//! driver_options() + platform.options()     (descriptors, ordered)
//!            |
//!            v
//!   defaults <- [options] table overrides   (validated per descriptor)
//!            |
//!            v
//!   BTreeMap<String, OptionValue> -> BuildEnv.options
//! ```

use std::collections::BTreeMap;

use super::Config;
use crate::core::buildenv::BuildEnv;
use crate::core::buildenv::types::OptionValue;
use crate::error::ConfigError;
use crate::platform::{BuildOption, Platform};

/// Options owned by the build driver rather than any platform.
///
/// The rendering toggles are consumed by platform configuration rules but
/// declared here, the platform never owns them.
#[must_use]
pub fn driver_options() -> Vec<BuildOption> {
    vec![
        BuildOption::boolean("vulkan", "Enable the Vulkan rendering driver", true),
        BuildOption::boolean("opengl3", "Enable the OpenGL ES 3 rendering driver", true),
        BuildOption::boolean(
            "builtin_glslang",
            "Use the bundled version of the glslang shader compiler",
            true,
        ),
    ]
}

/// All option descriptors visible to the driver, declaration order kept.
#[must_use]
pub fn declared_options(platform: &dyn Platform) -> Vec<BuildOption> {
    let mut options = driver_options();
    options.extend(platform.options());
    options
}

/// Resolves every declared option to a value: descriptor defaults first,
/// then `[options]` table overrides.
///
/// # Errors
///
/// Returns a `ConfigError` when an override names an undeclared option or
/// fails the descriptor's type/choice validation.
pub fn resolve_options(
    config: &Config,
    platform: &dyn Platform,
) -> std::result::Result<BTreeMap<String, OptionValue>, ConfigError> {
    let declared = declared_options(platform);

    let mut resolved: BTreeMap<String, OptionValue> = declared
        .iter()
        .map(|option| (option.id().to_string(), option.default_value()))
        .collect();

    for (key, raw) in &config.options {
        let descriptor = declared
            .iter()
            .find(|option| option.id() == key)
            .ok_or_else(|| ConfigError::UnknownOption { key: key.clone() })?;

        let value = raw.to_option_value();
        descriptor.validate(&value)?;
        resolved.insert(key.clone(), value);
    }

    Ok(resolved)
}

/// Seeds a build environment with resolved options and the configured
/// toolchain, ready for platform configuration.
#[must_use]
pub fn seed_environment(
    config: &Config,
    resolved: BTreeMap<String, OptionValue>,
) -> BuildEnv {
    let mut env = BuildEnv::new();
    for (key, value) in resolved {
        env.set_option(key, value);
    }
    env.set_cc(config.toolchain.cc.clone());
    env.set_cxx(config.toolchain.cxx.clone());
    env
}
