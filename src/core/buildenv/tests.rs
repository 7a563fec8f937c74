// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the build environment.

use super::BuildEnv;
use super::types::{Arch, Define, OptionValue};

#[test]
fn test_include_paths_prepend_and_append() {
    let mut env = BuildEnv::new();
    env.append_include_path("/usr/include/SDL2");
    env.prepend_include_path("platform/sbc");

    let paths: Vec<String> = env
        .include_paths()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(paths, vec!["platform/sbc", "/usr/include/SDL2"]);
}

#[test]
fn test_defines_append_only() {
    let mut env = BuildEnv::new();
    env.append_define("PLATFORM_SBC")
        .append_define("UNIX_ENABLED")
        .append_define(("_FILE_OFFSET_BITS", "64"));

    assert!(env.has_define("PLATFORM_SBC"));
    assert!(env.has_define("_FILE_OFFSET_BITS"));
    assert!(!env.has_define("VULKAN_ENABLED"));

    let rendered: Vec<String> = env.defines().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["PLATFORM_SBC", "UNIX_ENABLED", "_FILE_OFFSET_BITS=64"]
    );
}

#[test]
fn test_libs_preserve_append_order() {
    let mut env = BuildEnv::new();
    env.append_lib("pthread").append_lib("dl").append_lib("z");
    env.append_lib("glslang").append_lib("SPIRV");

    assert_eq!(env.libs(), ["pthread", "dl", "z", "glslang", "SPIRV"]);
}

#[test]
fn test_toolchain_scalars_overwrite() {
    let mut env = BuildEnv::new();
    env.set_cxx("g++");
    env.set_cxx("/usr/bin/clang++");

    assert_eq!(env.cxx(), Some("/usr/bin/clang++"));
    assert_eq!(env.cxx_basename(), Some("clang++"));
    assert!(env.cc().is_none());
}

#[test]
fn test_cxx_basename_without_directory() {
    let mut env = BuildEnv::new();
    assert!(env.cxx_basename().is_none());

    env.set_cxx("clang++");
    assert_eq!(env.cxx_basename(), Some("clang++"));
}

#[test]
fn test_extra_suffix_prepend() {
    let mut env = BuildEnv::new();
    env.prepend_extra_suffix(".double");
    env.prepend_extra_suffix(".llvm");

    assert_eq!(env.extra_suffix(), ".llvm.double");
}

#[test]
fn test_option_lookup() {
    let mut env = BuildEnv::new();
    env.set_option("vulkan", true);
    env.set_option("linker", "mold");

    assert!(env.bool_option("vulkan"));
    assert!(!env.bool_option("opengl3"));
    // A string option read as a boolean is false, not an error.
    assert!(!env.bool_option("linker"));
    assert_eq!(env.str_option("linker"), Some("mold"));
    assert_eq!(env.option("linker"), Some(&OptionValue::Str("mold".into())));
}

#[test]
fn test_format_lines_deterministic() {
    let mut env = BuildEnv::new();
    env.append_lib("pthread");
    env.append_cxx_flag("-std=c++17");
    env.set_option("vulkan", true);

    let lines = env.format_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("cxx_flags"));
    assert!(lines[0].ends_with("= -std=c++17"));
    assert!(lines[1].starts_with("libs"));
    assert!(lines[2].starts_with("options.vulkan"));
    assert!(lines[2].ends_with("= true"));
}

#[test]
fn test_arch_parse_and_display() {
    assert_eq!("rv64".parse::<Arch>().unwrap(), Arch::Rv64);
    assert_eq!("arm64".parse::<Arch>().unwrap(), Arch::Arm64);
    assert_eq!("x86_64".parse::<Arch>().unwrap(), Arch::X64);
    assert!("mips".parse::<Arch>().is_err());

    assert_eq!(Arch::Rv64.to_string(), "rv64");
    assert_eq!(Arch::X86.to_string(), "x86_32");
}

#[test]
fn test_define_display() {
    assert_eq!(Define::new("UNIX_ENABLED").to_string(), "UNIX_ENABLED");
    assert_eq!(
        Define::with_value("_FILE_OFFSET_BITS", "64").to_string(),
        "_FILE_OFFSET_BITS=64"
    );
}

#[test]
fn test_env_serializes_to_json() {
    let mut env = BuildEnv::new();
    env.append_define(("_FILE_OFFSET_BITS", "64"));
    env.append_lib("z");
    env.set_option("opengl3", false);

    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["defines"][0], "_FILE_OFFSET_BITS=64");
    assert_eq!(json["libs"][0], "z");
    assert_eq!(json["options"]["opengl3"], false);
}
