// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end configure flow: config -> options -> probe -> environment.

use std::sync::Arc;

use futures_util::future::BoxFuture;

use sbcbuild_rs::cli::configure::{ConfigureArgs, OutputFormat};
use sbcbuild_rs::cmd::configure::build_environment;
use sbcbuild_rs::config::Config;
use sbcbuild_rs::core::buildenv::BuildEnv;
use sbcbuild_rs::core::buildenv::types::Arch;
use sbcbuild_rs::error::Result;
use sbcbuild_rs::platform::sbc::SbcPlatform;
use sbcbuild_rs::tools::pkgconfig::{DependencyProbe, ParsedFlags};

struct StubProbe {
    present: bool,
}

impl DependencyProbe for StubProbe {
    fn exists<'a>(&'a self, _library: &'a str) -> BoxFuture<'a, Result<bool>> {
        Box::pin(async move { Ok(self.present) })
    }

    fn merge_flags<'a>(
        &'a self,
        _library: &'a str,
        env: &'a mut BuildEnv,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            ParsedFlags::parse("-D_REENTRANT -I/usr/include/SDL2 -lSDL2").apply(env);
            Ok(())
        })
    }
}

fn platform(present: bool) -> SbcPlatform {
    SbcPlatform::with_probe(Arc::new(StubProbe { present }))
}

fn configure_args(arch: Arch) -> ConfigureArgs {
    ConfigureArgs {
        arch,
        format: OutputFormat::Text,
        no_probe: false,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn full_flow_with_defaults() {
    let config = Config::default();
    let env = build_environment(&configure_args(Arch::Arm64), &config, &platform(true))
        .await
        .expect("configure should succeed");

    // defaults: vulkan and opengl3 on, bundled glslang
    assert!(env.has_define("PLATFORM_SBC"));
    assert!(env.has_define("VULKAN_ENABLED"));
    assert!(env.has_define("GLES3_ENABLED"));
    assert_eq!(env.libs(), ["SDL2", "pthread", "dl", "z"]);

    // gcc toolchain seeded from config defaults
    assert_eq!(env.cc(), Some("gcc"));
    assert_eq!(env.cxx(), Some("g++"));

    // use_static_cpp defaults to true
    assert_eq!(env.link_flags(), ["-static-libgcc", "-static-libstdc++"]);
}

#[tokio::test(flavor = "current_thread")]
async fn system_glslang_flow() {
    let config = Config::parse("[options]\nbuiltin_glslang = false").unwrap();
    let env = build_environment(&configure_args(Arch::Arm64), &config, &platform(true))
        .await
        .expect("configure should succeed");

    assert_eq!(
        env.libs(),
        ["SDL2", "pthread", "dl", "z", "glslang", "SPIRV"]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn rv64_flow() {
    let config = Config::default();
    let env = build_environment(&configure_args(Arch::Rv64), &config, &platform(true))
        .await
        .expect("configure should succeed");

    assert!(env.cc_flags().contains(&"-march=rv64gc".to_string()));
}

#[tokio::test(flavor = "current_thread")]
async fn clang_toolchain_flow() {
    let config = Config::parse("[toolchain]\ncxx = \"clang++\"").unwrap();
    let env = build_environment(&configure_args(Arch::Arm64), &config, &platform(true))
        .await
        .expect("configure should succeed");

    assert!(env.bool_option("use_llvm"));
    assert_eq!(env.cc(), Some("clang"));
    assert_eq!(env.linker(), Some("clang++"));
    assert_eq!(env.extra_suffix(), ".llvm");
}

#[tokio::test(flavor = "current_thread")]
async fn probe_failure_aborts_configure() {
    let config = Config::default();
    let result = build_environment(&configure_args(Arch::Arm64), &config, &platform(false)).await;

    assert!(result.is_err());
}

#[tokio::test(flavor = "current_thread")]
async fn no_probe_skips_capability_check() {
    let config = Config::default();
    let args = ConfigureArgs {
        no_probe: true,
        ..configure_args(Arch::Arm64)
    };

    let env = build_environment(&args, &config, &platform(false))
        .await
        .expect("--no-probe should bypass the capability check");
    assert!(env.has_define("PLATFORM_SBC"));
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_override_fails_before_probe() {
    let config = Config::parse("[options]\nlinker = \"ld64\"").unwrap();
    let result = build_environment(&configure_args(Arch::Arm64), &config, &platform(true)).await;

    assert!(result.is_err());
}
