// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading and layering.

use std::io::Write as _;

use sbcbuild_rs::config::options::resolve_options;
use sbcbuild_rs::config::types::OptionOverride;
use sbcbuild_rs::config::{Config, loader::ConfigLoader};
use sbcbuild_rs::core::buildenv::types::OptionValue;
use sbcbuild_rs::logging::LogLevel;
use sbcbuild_rs::platform::sbc::SbcPlatform;

fn write_toml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write toml");
    file
}

#[test]
fn loads_config_from_file() {
    let file = write_toml(
        r#"
        [global]
        output_log_level = 4

        [options]
        wayland = true
        "#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::Debug);
    assert_eq!(config.options["wayland"], OptionOverride::Bool(true));
}

#[test]
fn missing_required_file_is_an_error() {
    assert!(Config::from_file("/nonexistent/sbcbuild.toml").is_err());
}

#[test]
fn missing_optional_file_is_ignored() {
    let config = ConfigLoader::new()
        .add_toml_file_optional("/nonexistent/sbcbuild.toml")
        .build()
        .unwrap();
    assert!(config.options.is_empty());
}

#[test]
fn later_layers_override_earlier_ones() {
    let base = write_toml("[options]\nvulkan = true\nx11 = true");
    let local = write_toml("[options]\nvulkan = false");

    let config = ConfigLoader::new()
        .add_toml_file(base.path())
        .add_toml_file(local.path())
        .set_kv("options.x11=false")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.options["vulkan"], OptionOverride::Bool(false));
    assert_eq!(config.options["x11"], OptionOverride::Bool(false));
}

#[test]
fn layered_config_resolves_against_descriptors() {
    let file = write_toml(
        r#"
        [options]
        vulkan = false
        linker = "mold"
        use_static_cpp = false
        "#,
    );

    let config = Config::from_file(file.path()).unwrap();
    let platform = SbcPlatform::new();
    let resolved = resolve_options(&config, &platform).unwrap();

    assert_eq!(resolved["vulkan"], OptionValue::Bool(false));
    assert_eq!(resolved["linker"], OptionValue::Str("mold".into()));
    assert_eq!(resolved["use_static_cpp"], OptionValue::Bool(false));
    // untouched descriptors keep their defaults
    assert_eq!(resolved["opengl3"], OptionValue::Bool(true));
}

#[test]
fn invalid_option_in_file_fails_resolution() {
    let file = write_toml("[options]\nlinker = \"ld64\"");

    let config = Config::from_file(file.path()).unwrap();
    let platform = SbcPlatform::new();
    assert!(resolve_options(&config, &platform).is_err());
}
