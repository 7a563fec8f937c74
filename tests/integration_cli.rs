// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the CLI surface.

use sbcbuild_rs::cli::{self, Command};
use sbcbuild_rs::cmd::options::run_options_command;
use sbcbuild_rs::config::Config;
use sbcbuild_rs::core::buildenv::types::Arch;
use sbcbuild_rs::platform::sbc::SbcPlatform;

#[test]
fn parses_full_configure_invocation() {
    let cli = cli::parse_from([
        "sbcbuild",
        "-i",
        "boards/rock5b.toml",
        "-s",
        "options.wayland=true",
        "configure",
        "--arch",
        "rv64",
        "--format",
        "json",
    ]);

    assert_eq!(cli.global.inis.len(), 1);
    assert_eq!(cli.global.options, ["options.wayland=true"]);

    let Some(Command::Configure(args)) = cli.command else {
        panic!("expected configure command");
    };
    assert_eq!(args.arch, Arch::Rv64);
}

#[test]
fn options_command_lists_descriptors() {
    // prints to stdout; the interesting part is that default config resolves
    let platform = SbcPlatform::new();
    run_options_command(&Config::default(), &platform).expect("options should resolve");
}

#[test]
fn options_command_rejects_invalid_override() {
    let platform = SbcPlatform::new();
    let config = Config::parse("[options]\nvulkan = \"maybe\"").unwrap();
    assert!(run_options_command(&config, &platform).is_err());
}
