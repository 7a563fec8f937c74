// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child-process description and captured output.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};

use bitflags::bitflags;

/// PATH lookups already answered by `which`, shared process-wide.
static PATH_CACHE: LazyLock<Mutex<HashMap<String, Option<PathBuf>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

bitflags! {
    /// Behavior switches for a process run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// A non-zero exit status is an answer, not an error.
        const ALLOW_FAILURE = 0x01;
    }
}

/// What a finished child process left behind.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
    interrupted: bool,
}

impl ProcessOutput {
    pub(super) fn from_raw(raw: std::process::Output) -> Self {
        Self {
            exit_code: raw.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&raw.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw.stderr).into_owned(),
            interrupted: false,
        }
    }

    pub(super) fn interrupted() -> Self {
        Self {
            exit_code: -1,
            interrupted: true,
            ..Self::default()
        }
    }

    /// Exit code of the child, `-1` when killed by a signal or interrupted.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Whether the run was cut short by cancellation.
    #[must_use]
    pub const fn was_interrupted(&self) -> bool {
        self.interrupted
    }
}

/// Describes a child process to run: program, arguments, flags and a
/// display label for logging.
#[derive(Debug)]
pub struct ProcessBuilder {
    pub(super) program: PathBuf,
    pub(super) args: Vec<String>,
    pub(super) flags: ProcessFlags,
    pub(super) label: Option<String>,
}

impl ProcessBuilder {
    /// Starts describing a process. The program may be a bare name (PATH
    /// resolution happens at spawn time), a relative or an absolute path.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            flags: ProcessFlags::empty(),
            label: None,
        }
    }

    /// Describes a shell command line, run through `/bin/sh -c`.
    pub fn shell(command: impl Into<String>) -> Self {
        let mut builder = Self::new("/bin/sh");
        builder.args = vec!["-c".to_string(), command.into()];
        builder
    }

    /// Resolves a program through PATH, caching the answer (including
    /// misses) for later lookups.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        let mut cache = PATH_CACHE
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        cache
            .entry(program.to_string())
            .or_insert_with(|| which::which(program).ok())
            .clone()
    }

    /// Whether a program is present on PATH.
    #[must_use]
    pub fn exists(program: &str) -> bool {
        Self::find(program).is_some()
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self = self.arg(arg);
        }
        self
    }

    /// Adds a behavior flag.
    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Names the process in log output; defaults to the program's stem.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
