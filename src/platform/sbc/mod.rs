// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The single-board-computer platform.
//!
//! ```text
//! SbcPlatform
//! can_build:  POSIX host + sdl2 dev libraries (pkg-config)
//! configure:  base flags -> sdl2 flags -> ordered policy rules
//! ```
//!
//! Configuration order matters: the rule that forces `use_llvm` on when
//! the C++ compiler looks like clang runs before the rule that reads
//! `use_llvm`.

mod rules;


use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::debug;

use crate::core::buildenv::BuildEnv;
use crate::core::buildenv::types::Arch;
use crate::error::Result;
use crate::platform::{BuildOption, HostFamily, Platform};
use crate::tools::pkgconfig::{DependencyProbe, PkgConfig};

/// The multimedia library the platform is built on.
const SDL2_LIBRARY: &str = "sdl2";

/// Platform descriptor for single-board computers running Linux.
pub struct SbcPlatform {
    probe: Arc<dyn DependencyProbe>,
}

impl SbcPlatform {
    /// Creates the platform with the real `pkg-config` probe.
    #[must_use]
    pub fn new() -> Self {
        Self::with_probe(Arc::new(PkgConfig::new()))
    }

    /// Creates the platform with a custom dependency probe.
    #[must_use]
    pub fn with_probe(probe: Arc<dyn DependencyProbe>) -> Self {
        Self { probe }
    }
}

impl Default for SbcPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for SbcPlatform {
    fn name(&self) -> &'static str {
        "sbc"
    }

    fn can_build<'a>(&'a self, host: HostFamily) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            if !host.is_posix() {
                return false;
            }

            let present = self.probe.exists(SDL2_LIBRARY).await.unwrap_or(false);
            if !present {
                println!(
                    "SDL2 development libraries not found. \
                     Please install libsdl2-dev or equivalent."
                );
                return false;
            }

            true
        })
    }

    fn options(&self) -> Vec<BuildOption> {
        vec![
            BuildOption::boolean("use_sdl2_audio", "Use SDL2 audio driver", false),
            BuildOption::boolean("use_sdl2_video", "Use SDL2 video driver", false),
            BuildOption::enumerated(
                "linker",
                "Linker program",
                "default",
                &["default", "bfd", "gold", "lld", "mold"],
            ),
            BuildOption::boolean("use_llvm", "Use the LLVM compiler", false),
            BuildOption::boolean(
                "use_static_cpp",
                "Link libgcc and libstdc++ statically for better portability",
                true,
            ),
            BuildOption::boolean("use_coverage", "Instrument the build for test coverage", false),
            BuildOption::boolean(
                "use_ubsan",
                "Use LLVM/GCC compiler undefined behavior sanitizer (UBSAN)",
                false,
            ),
            BuildOption::boolean(
                "use_asan",
                "Use LLVM/GCC compiler address sanitizer (ASAN)",
                false,
            ),
            BuildOption::boolean(
                "use_lsan",
                "Use LLVM/GCC compiler leak sanitizer (LSAN)",
                false,
            ),
            BuildOption::boolean(
                "use_tsan",
                "Use LLVM/GCC compiler thread sanitizer (TSAN)",
                false,
            ),
            BuildOption::boolean("use_msan", "Use LLVM compiler memory sanitizer (MSAN)", false),
            BuildOption::boolean("use_sowrap", "Dynamically load system libraries", false),
            BuildOption::boolean("alsa", "Use ALSA", false),
            BuildOption::boolean("pulseaudio", "Use PulseAudio", false),
            BuildOption::boolean(
                "dbus",
                "Use D-Bus to handle screensaver and portal desktop settings",
                false,
            ),
            BuildOption::boolean(
                "speechd",
                "Use Speech Dispatcher for Text-to-Speech support",
                false,
            ),
            BuildOption::boolean("fontconfig", "Use fontconfig for system fonts support", false),
            BuildOption::boolean("udev", "Use udev for gamepad connection callbacks", false),
            BuildOption::boolean("x11", "Enable X11 display", false),
            BuildOption::boolean("wayland", "Enable Wayland display", false),
            BuildOption::boolean("libdecor", "Enable libdecor support", false),
            BuildOption::boolean("touch", "Enable touch events", false),
            BuildOption::boolean(
                "execinfo",
                "Use libexecinfo on systems where glibc is not available",
                false,
            ),
        ]
    }

    fn extra_flags(&self) -> Vec<(String, String)> {
        // Placeholder, nothing contributed yet.
        Vec::new()
    }

    fn configure<'a>(&'a self, env: &'a mut BuildEnv, arch: Arch) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            debug!(platform = self.name(), arch = %arch, "configure");

            // Base flags
            env.prepend_include_path("platform/sbc");

            env.append_define("PLATFORM_SBC")
                .append_define("UNIX_ENABLED")
                .append_define("LINUX_ENABLED");

            // Flag duplicate of the define, for tools that only honor flags.
            env.append_cpp_flag("-DUNIX_ENABLED");
            env.append_define(("_FILE_OFFSET_BITS", "64"));

            env.append_cxx_flag("-std=c++17");

            // SDL2 flags and libraries
            self.probe.merge_flags(SDL2_LIBRARY, env).await?;

            rules::apply_all(env, arch);

            Ok(())
        })
    }
}
