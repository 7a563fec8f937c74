// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The probe command.

use tracing::{info, warn};

use crate::platform::{HostFamily, Platform};

/// Runs the capability probe and reports the result.
///
/// Returns whether the platform can be built; the caller turns a false
/// into a non-zero exit code.
pub async fn run_probe_command(platform: &dyn Platform) -> bool {
    let buildable = platform.can_build(HostFamily::current()).await;

    if buildable {
        info!(platform = platform.name(), "dependencies satisfied");
        println!("{}: ok", platform.name());
    } else {
        warn!(platform = platform.name(), "cannot be built on this host");
        println!("{}: cannot be built on this host", platform.name());
    }

    buildable
}
