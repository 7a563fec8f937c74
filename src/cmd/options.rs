// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The options command.

use crate::config::Config;
use crate::config::options::{declared_options, resolve_options};
use crate::error::Result;
use crate::platform::Platform;

/// Lists every declared build option with its resolved value and
/// description, in declaration order.
///
/// # Errors
///
/// Returns an error if a configured override fails validation.
pub fn run_options_command(config: &Config, platform: &dyn Platform) -> Result<()> {
    let declared = declared_options(platform);
    let resolved = resolve_options(config, platform)?;

    let max_id_len = declared.iter().map(|o| o.id().len()).max().unwrap_or(0);

    for option in declared {
        // resolution covers every declared id
        let value = resolved[option.id()].to_string();
        println!(
            "{:<max_id_len$} = {:<8} {}",
            option.id(),
            value,
            option.description()
        );
    }

    Ok(())
}
