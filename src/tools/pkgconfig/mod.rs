// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `pkg-config` tool for dependency discovery.
//!
//! ```text
//! PkgConfig
//! Operations: exists (exit code only) | merge_flags (--cflags --libs)
//! ParsedFlags: -I -> include_paths  -D -> defines  -l -> libs
//!              -L/-Wl -> link_flags  rest -> cc_flags
//! ```
//!
//! The [`DependencyProbe`] trait is the seam between the platform layer and
//! the external command, so capability probing can run against a stub.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::debug;

use crate::core::buildenv::BuildEnv;
use crate::core::buildenv::types::Define;
use crate::core::process::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

#[cfg(test)]
mod tests;

/// Queries the host for an installed development library.
pub trait DependencyProbe: Send + Sync {
    /// Whether the library's development files are installed.
    ///
    /// A non-zero exit from the discovery command is an answer (false),
    /// not an error; errors mean the command itself could not run.
    fn exists<'a>(&'a self, library: &'a str) -> BoxFuture<'a, Result<bool>>;

    /// Queries the library's compiler and linker flags and merges them,
    /// append-only, into the build environment.
    fn merge_flags<'a>(
        &'a self,
        library: &'a str,
        env: &'a mut BuildEnv,
    ) -> BoxFuture<'a, Result<()>>;
}

/// `pkg-config` wrapper implementing [`DependencyProbe`].
#[derive(Debug, Clone)]
pub struct PkgConfig {
    program: PathBuf,
}

impl PkgConfig {
    /// Creates a wrapper over the `pkg-config` found on PATH, falling back
    /// to the bare name (spawn will fail, probes read that as absence).
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: ProcessBuilder::find("pkg-config")
                .unwrap_or_else(|| PathBuf::from("pkg-config")),
        }
    }

    /// Creates a wrapper around a specific `pkg-config` binary.
    pub fn with_program(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    async fn query(&self, library: &str) -> Result<ParsedFlags> {
        let output = ProcessBuilder::new(&self.program)
            .arg("--cflags")
            .arg("--libs")
            .arg(library)
            .label("pkg-config")
            .run()
            .await?;

        let flags = ParsedFlags::parse(output.stdout());
        debug!(library, ?flags, "pkg-config flags");
        Ok(flags)
    }
}

impl Default for PkgConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyProbe for PkgConfig {
    fn exists<'a>(&'a self, library: &'a str) -> BoxFuture<'a, Result<bool>> {
        Box::pin(async move {
            let output = ProcessBuilder::new(&self.program)
                .arg("--exists")
                .arg(library)
                .label("pkg-config")
                .flag(ProcessFlags::ALLOW_FAILURE)
                .run()
                .await?;
            Ok(output.success())
        })
    }

    fn merge_flags<'a>(
        &'a self,
        library: &'a str,
        env: &'a mut BuildEnv,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.query(library).await?.apply(env);
            Ok(())
        })
    }
}

/// Compiler and linker flags parsed from `pkg-config --cflags --libs`
/// output, distributed across the build environment's lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFlags {
    include_paths: Vec<PathBuf>,
    defines: Vec<Define>,
    cc_flags: Vec<String>,
    libs: Vec<String>,
    link_flags: Vec<String>,
}

impl ParsedFlags {
    /// Parses whitespace-separated flag text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut flags = Self::default();

        for token in text.split_whitespace() {
            if let Some(path) = token.strip_prefix("-I") {
                flags.include_paths.push(PathBuf::from(path));
            } else if let Some(define) = token.strip_prefix("-D") {
                flags.defines.push(match define.split_once('=') {
                    Some((name, value)) => Define::with_value(name, value),
                    None => Define::new(define),
                });
            } else if let Some(lib) = token.strip_prefix("-l") {
                flags.libs.push(lib.to_string());
            } else if token.starts_with("-L") || token.starts_with("-Wl,") {
                flags.link_flags.push(token.to_string());
            } else if token == "-pthread" {
                // affects both compile and link lines
                flags.cc_flags.push(token.to_string());
                flags.link_flags.push(token.to_string());
            } else if token.starts_with('-') {
                flags.cc_flags.push(token.to_string());
            } else {
                flags.link_flags.push(token.to_string());
            }
        }

        flags
    }

    /// Merges the parsed flags into the environment, append-only.
    pub fn apply(&self, env: &mut BuildEnv) {
        for path in &self.include_paths {
            env.append_include_path(path.clone());
        }
        for define in &self.defines {
            env.append_define(define.clone());
        }
        for flag in &self.cc_flags {
            env.append_cc_flag(flag.clone());
        }
        for lib in &self.libs {
            env.append_lib(lib.clone());
        }
        for flag in &self.link_flags {
            env.append_link_flag(flag.clone());
        }
    }

    #[must_use]
    pub fn include_paths(&self) -> &[PathBuf] {
        &self.include_paths
    }

    #[must_use]
    pub fn defines(&self) -> &[Define] {
        &self.defines
    }

    #[must_use]
    pub fn cc_flags(&self) -> &[String] {
        &self.cc_flags
    }

    #[must_use]
    pub fn libs(&self) -> &[String] {
        &self.libs
    }

    #[must_use]
    pub fn link_flags(&self) -> &[String] {
        &self.link_flags
    }
}
