// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spawning and supervising a described process.
//!
//! ```text
//! run() / run_with_cancellation(token)
//!     spawn, stdio piped, kill_on_drop
//!     select: wait_with_output | token.cancelled
//!     exit-code check (waived by ALLOW_FAILURE or interruption)
//! ```

use std::process::Stdio;

use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use crate::error::{ProcessError, Result};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};

impl ProcessBuilder {
    /// Runs the process to completion and captures its output.
    ///
    /// # Errors
    ///
    /// Fails when the child cannot be spawned, its output cannot be
    /// collected, or it exits non-zero without `ALLOW_FAILURE` set.
    pub async fn run(self) -> Result<ProcessOutput> {
        self.run_with_cancellation(CancellationToken::new()).await
    }

    /// Like [`run`](Self::run), but kills the child when the token fires.
    /// An interrupted run reports `was_interrupted` and never fails the
    /// exit-code check.
    ///
    /// # Errors
    ///
    /// Same conditions as [`run`](Self::run).
    pub async fn run_with_cancellation(self, token: CancellationToken) -> Result<ProcessOutput> {
        if token.is_cancelled() {
            return Ok(ProcessOutput::interrupted());
        }

        let label = self.display_label();
        let rendered = self.render();
        debug!(cmd = %rendered, "exec");

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: rendered.clone(),
                source,
            })?;
        trace!(process = %label, pid = ?child.id(), "spawned");

        let output = tokio::select! {
            raw = child.wait_with_output() => {
                let raw = raw.map_err(|e| ProcessError::OutputError {
                    command: rendered.clone(),
                    message: e.to_string(),
                })?;
                ProcessOutput::from_raw(raw)
            }
            () = token.cancelled() => {
                trace!(process = %label, "interrupted");
                ProcessOutput::interrupted()
            }
        };

        let waived =
            output.was_interrupted() || self.flags.contains(ProcessFlags::ALLOW_FAILURE);
        if !waived && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %label, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: rendered,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(
            process = %label,
            exit_code = output.exit_code(),
            interrupted = output.was_interrupted(),
            "completed"
        );
        Ok(output)
    }

    fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            self.program
                .file_stem()
                .map_or_else(|| "process".to_string(), |s| s.to_string_lossy().into_owned())
        })
    }

    /// The full command line, for logs and error messages.
    fn render(&self) -> String {
        use std::fmt::Write as _;

        let mut line = self.program.display().to_string();
        for arg in &self.args {
            if arg.contains(' ') {
                let _ = write!(line, " \"{arg}\"");
            } else {
                let _ = write!(line, " {arg}");
            }
        }
        line
    }
}
