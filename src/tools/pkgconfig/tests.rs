// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ParsedFlags;
use crate::core::buildenv::BuildEnv;

#[test]
fn test_parse_typical_sdl2_output() {
    let flags = ParsedFlags::parse("-D_REENTRANT -I/usr/include/SDL2 -lSDL2\n");

    assert_eq!(flags.defines().len(), 1);
    assert_eq!(flags.defines()[0].name(), "_REENTRANT");
    assert_eq!(flags.include_paths().len(), 1);
    assert_eq!(flags.include_paths()[0].display().to_string(), "/usr/include/SDL2");
    assert_eq!(flags.libs(), ["SDL2"]);
    assert!(flags.cc_flags().is_empty());
    assert!(flags.link_flags().is_empty());
}

#[test]
fn test_parse_library_dirs_and_linker_args() {
    let flags = ParsedFlags::parse("-L/opt/sdl2/lib -Wl,--as-needed -lSDL2 -lm");

    assert_eq!(flags.link_flags(), ["-L/opt/sdl2/lib", "-Wl,--as-needed"]);
    assert_eq!(flags.libs(), ["SDL2", "m"]);
}

#[test]
fn test_parse_valued_define() {
    let flags = ParsedFlags::parse("-DSDL_MAIN_HANDLED=1");

    assert_eq!(flags.defines()[0].name(), "SDL_MAIN_HANDLED");
    assert_eq!(flags.defines()[0].value(), Some("1"));
}

#[test]
fn test_parse_pthread_lands_on_both_lines() {
    let flags = ParsedFlags::parse("-pthread -lSDL2");

    assert_eq!(flags.cc_flags(), ["-pthread"]);
    assert_eq!(flags.link_flags(), ["-pthread"]);
}

#[test]
fn test_parse_unknown_compile_flag() {
    let flags = ParsedFlags::parse("-fstack-protector-strong");
    assert_eq!(flags.cc_flags(), ["-fstack-protector-strong"]);
}

#[test]
fn test_parse_empty_output() {
    assert_eq!(ParsedFlags::parse("  \n"), ParsedFlags::default());
}

#[test]
fn test_apply_is_append_only() {
    let mut env = BuildEnv::new();
    env.append_lib("pthread");
    env.append_include_path("platform/sbc");

    ParsedFlags::parse("-I/usr/include/SDL2 -lSDL2").apply(&mut env);

    let paths: Vec<String> = env
        .include_paths()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(paths, vec!["platform/sbc", "/usr/include/SDL2"]);
    assert_eq!(env.libs(), ["pthread", "SDL2"]);
}
