// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered configuration rules.
//!
//! Each rule is a predicate over the environment plus an effect, applied
//! in the declared order. Predicates are evaluated at the rule's turn,
//! so an earlier effect can enable a later rule.

use tracing::trace;

use crate::core::buildenv::BuildEnv;
use crate::core::buildenv::types::Arch;

pub(super) struct ConfigRule {
    pub(super) name: &'static str,
    applies: fn(&BuildEnv, Arch) -> bool,
    apply: fn(&mut BuildEnv, Arch),
}

pub(super) const RULES: &[ConfigRule] = &[
    ConfigRule {
        name: "system_libs",
        applies: always,
        apply: system_libs,
    },
    ConfigRule {
        name: "vulkan_defines",
        applies: vulkan_enabled,
        apply: vulkan_defines,
    },
    ConfigRule {
        name: "system_glslang_libs",
        applies: wants_system_glslang,
        apply: system_glslang_libs,
    },
    ConfigRule {
        name: "gles3_define",
        applies: gles3_enabled,
        apply: gles3_define,
    },
    ConfigRule {
        name: "clang_companion_binaries",
        applies: cxx_is_clang,
        apply: clang_companion_binaries,
    },
    ConfigRule {
        name: "static_cpp_runtime",
        applies: static_cpp_enabled,
        apply: static_cpp_flags,
    },
    ConfigRule {
        name: "rv64_isa_flags",
        applies: arch_is_rv64,
        apply: rv64_isa_flags,
    },
    ConfigRule {
        name: "clang_forces_llvm",
        applies: cxx_mentions_clang,
        apply: force_llvm_toggle,
    },
    ConfigRule {
        name: "llvm_toolchain",
        applies: llvm_enabled,
        apply: llvm_toolchain,
    },
];

/// Applies every matching rule, in declared order.
pub(super) fn apply_all(env: &mut BuildEnv, arch: Arch) {
    for rule in RULES {
        if (rule.applies)(env, arch) {
            trace!(rule = rule.name, "apply");
            (rule.apply)(env, arch);
        }
    }
}

fn always(_: &BuildEnv, _: Arch) -> bool {
    true
}

fn system_libs(env: &mut BuildEnv, _: Arch) {
    env.append_lib("pthread").append_lib("dl").append_lib("z");
}

fn vulkan_enabled(env: &BuildEnv, _: Arch) -> bool {
    env.bool_option("vulkan")
}

fn vulkan_defines(env: &mut BuildEnv, _: Arch) {
    env.append_define("VULKAN_ENABLED").append_define("RD_ENABLED");
}

fn wants_system_glslang(env: &BuildEnv, _: Arch) -> bool {
    env.bool_option("vulkan") && !env.bool_option("builtin_glslang")
}

fn system_glslang_libs(env: &mut BuildEnv, _: Arch) {
    // No pkg-config file so far, hardcode expected lib names.
    env.append_lib("glslang").append_lib("SPIRV");
}

fn gles3_enabled(env: &BuildEnv, _: Arch) -> bool {
    env.bool_option("opengl3")
}

fn gles3_define(env: &mut BuildEnv, _: Arch) {
    env.append_define("GLES3_ENABLED");
}

fn cxx_is_clang(env: &BuildEnv, _: Arch) -> bool {
    env.cxx_basename() == Some("clang++")
}

fn clang_companion_binaries(env: &mut BuildEnv, _: Arch) {
    env.set_cc("clang");
    env.set_linker("clang++");
}

fn static_cpp_enabled(env: &BuildEnv, _: Arch) -> bool {
    env.bool_option("use_static_cpp")
}

fn static_cpp_flags(env: &mut BuildEnv, _: Arch) {
    env.append_link_flag("-static-libgcc")
        .append_link_flag("-static-libstdc++");
}

fn arch_is_rv64(_: &BuildEnv, arch: Arch) -> bool {
    arch == Arch::Rv64
}

fn rv64_isa_flags(env: &mut BuildEnv, _: Arch) {
    // G = general-purpose extensions, C = compression extension.
    env.append_cc_flag("-march=rv64gc");
}

fn cxx_mentions_clang(env: &BuildEnv, _: Arch) -> bool {
    env.cxx_basename().is_some_and(|name| name.contains("clang"))
}

fn force_llvm_toggle(env: &mut BuildEnv, _: Arch) {
    env.set_option("use_llvm", true);
}

fn llvm_enabled(env: &BuildEnv, _: Arch) -> bool {
    env.bool_option("use_llvm")
}

fn llvm_toolchain(env: &mut BuildEnv, _: Arch) {
    let already_clang = env
        .cxx_basename()
        .is_some_and(|name| name.contains("clang++"));
    if !already_clang {
        env.set_cc("clang");
        env.set_cxx("clang++");
    }
    env.prepend_extra_suffix(".llvm");
}
