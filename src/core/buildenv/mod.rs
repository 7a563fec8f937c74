// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The build environment threaded through platform configuration.
//!
//! # Architecture
//!
//! ```text
//! BuildEnv (externally owned, passed by &mut)
//! Lists: include_paths / defines / cpp_flags / cc_flags
//!        cxx_flags / link_flags / libs     (append-only)
//! Scalars: cc / cxx / linker / extra_suffix (overwrite intentional)
//! Options: resolved key -> Bool | Str       (read by config rules)
//! ```
//!
//! List keys only ever grow; a configuration step never replaces what an
//! earlier step appended. Scalar toolchain selections are the exception,
//! an override there is the point of the rule that performs it.

pub mod types;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use types::{Define, OptionValue};

/// Mutable build configuration, owned by the driver and passed by
/// reference through platform configuration exactly once per run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildEnv {
    include_paths: Vec<PathBuf>,
    defines: Vec<Define>,
    cpp_flags: Vec<String>,
    cc_flags: Vec<String>,
    cxx_flags: Vec<String>,
    link_flags: Vec<String>,
    libs: Vec<String>,
    cc: Option<String>,
    cxx: Option<String>,
    linker: Option<String>,
    extra_suffix: String,
    options: BTreeMap<String, OptionValue>,
}

impl BuildEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- include paths ---

    /// Prepends an include search path.
    pub fn prepend_include_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.include_paths.insert(0, path.into());
        self
    }

    /// Appends an include search path.
    pub fn append_include_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.include_paths.push(path.into());
        self
    }

    #[must_use]
    pub fn include_paths(&self) -> &[PathBuf] {
        &self.include_paths
    }

    // --- defines ---

    /// Appends a preprocessor define.
    pub fn append_define(&mut self, define: impl Into<Define>) -> &mut Self {
        self.defines.push(define.into());
        self
    }

    #[must_use]
    pub fn defines(&self) -> &[Define] {
        &self.defines
    }

    /// True if a define with the given name is present, valued or not.
    #[must_use]
    pub fn has_define(&self, name: &str) -> bool {
        self.defines.iter().any(|d| d.name() == name)
    }

    // --- flag lists ---

    /// Appends a preprocessor-only flag.
    pub fn append_cpp_flag(&mut self, flag: impl Into<String>) -> &mut Self {
        self.cpp_flags.push(flag.into());
        self
    }

    /// Appends a flag shared by C and C++ compilation.
    pub fn append_cc_flag(&mut self, flag: impl Into<String>) -> &mut Self {
        self.cc_flags.push(flag.into());
        self
    }

    /// Appends a C++-only flag.
    pub fn append_cxx_flag(&mut self, flag: impl Into<String>) -> &mut Self {
        self.cxx_flags.push(flag.into());
        self
    }

    /// Appends a linker flag.
    pub fn append_link_flag(&mut self, flag: impl Into<String>) -> &mut Self {
        self.link_flags.push(flag.into());
        self
    }

    /// Appends a linked library name.
    pub fn append_lib(&mut self, lib: impl Into<String>) -> &mut Self {
        self.libs.push(lib.into());
        self
    }

    #[must_use]
    pub fn cpp_flags(&self) -> &[String] {
        &self.cpp_flags
    }

    #[must_use]
    pub fn cc_flags(&self) -> &[String] {
        &self.cc_flags
    }

    #[must_use]
    pub fn cxx_flags(&self) -> &[String] {
        &self.cxx_flags
    }

    #[must_use]
    pub fn link_flags(&self) -> &[String] {
        &self.link_flags
    }

    #[must_use]
    pub fn libs(&self) -> &[String] {
        &self.libs
    }

    // --- toolchain scalars ---

    /// Overrides the C compiler selection.
    pub fn set_cc(&mut self, cc: impl Into<String>) -> &mut Self {
        self.cc = Some(cc.into());
        self
    }

    /// Overrides the C++ compiler selection.
    pub fn set_cxx(&mut self, cxx: impl Into<String>) -> &mut Self {
        self.cxx = Some(cxx.into());
        self
    }

    /// Overrides the linker selection.
    pub fn set_linker(&mut self, linker: impl Into<String>) -> &mut Self {
        self.linker = Some(linker.into());
        self
    }

    #[must_use]
    pub fn cc(&self) -> Option<&str> {
        self.cc.as_deref()
    }

    #[must_use]
    pub fn cxx(&self) -> Option<&str> {
        self.cxx.as_deref()
    }

    #[must_use]
    pub fn linker(&self) -> Option<&str> {
        self.linker.as_deref()
    }

    /// Base name of the configured C++ compiler binary, if one is set.
    #[must_use]
    pub fn cxx_basename(&self) -> Option<&str> {
        Path::new(self.cxx.as_deref()?).file_name()?.to_str()
    }

    // --- artifact suffix ---

    /// Prepends a fragment to the build-artifact disambiguation suffix.
    pub fn prepend_extra_suffix(&mut self, fragment: &str) -> &mut Self {
        let mut suffix = fragment.to_string();
        suffix.push_str(&self.extra_suffix);
        self.extra_suffix = suffix;
        self
    }

    #[must_use]
    pub fn extra_suffix(&self) -> &str {
        &self.extra_suffix
    }

    // --- resolved options ---

    /// Sets a resolved option value.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.options.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Boolean option lookup; missing or non-boolean reads as false.
    #[must_use]
    pub fn bool_option(&self, key: &str) -> bool {
        self.options
            .get(key)
            .and_then(OptionValue::as_bool)
            .unwrap_or(false)
    }

    /// String option lookup.
    #[must_use]
    pub fn str_option(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(OptionValue::as_str)
    }

    #[must_use]
    pub const fn options(&self) -> &BTreeMap<String, OptionValue> {
        &self.options
    }

    /// Format the environment for display.
    ///
    /// Returns one `key = value` line per non-empty field, deterministically
    /// ordered, list values joined with spaces.
    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        let join = |items: &[String]| items.join(" ");

        let mut fields = BTreeMap::new();
        if !self.include_paths.is_empty() {
            let paths: Vec<String> = self
                .include_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            fields.insert("include_paths".to_string(), join(&paths));
        }
        if !self.defines.is_empty() {
            let defines: Vec<String> = self.defines.iter().map(ToString::to_string).collect();
            fields.insert("defines".to_string(), join(&defines));
        }
        if !self.cpp_flags.is_empty() {
            fields.insert("cpp_flags".to_string(), join(&self.cpp_flags));
        }
        if !self.cc_flags.is_empty() {
            fields.insert("cc_flags".to_string(), join(&self.cc_flags));
        }
        if !self.cxx_flags.is_empty() {
            fields.insert("cxx_flags".to_string(), join(&self.cxx_flags));
        }
        if !self.link_flags.is_empty() {
            fields.insert("link_flags".to_string(), join(&self.link_flags));
        }
        if !self.libs.is_empty() {
            fields.insert("libs".to_string(), join(&self.libs));
        }
        if let Some(cc) = &self.cc {
            fields.insert("cc".to_string(), cc.clone());
        }
        if let Some(cxx) = &self.cxx {
            fields.insert("cxx".to_string(), cxx.clone());
        }
        if let Some(linker) = &self.linker {
            fields.insert("linker".to_string(), linker.clone());
        }
        if !self.extra_suffix.is_empty() {
            fields.insert("extra_suffix".to_string(), self.extra_suffix.clone());
        }
        for (key, value) in &self.options {
            fields.insert(format!("options.{key}"), value.to_string());
        }

        let max_key_len = fields.keys().map(String::len).max().unwrap_or(0);

        fields
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
