// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! ProcessBuilder
//!   new/shell + arg/args/flag/label
//!        |
//!        v
//!   run() / run_with_cancellation(token)
//!        |
//!        v
//!   ProcessOutput { exit_code, stdout, stderr, interrupted }
//! ```
//!
//! Output is always captured; non-zero exit is an error unless
//! `ALLOW_FAILURE` is set. `find` resolves programs through PATH with a
//! process-wide cache.

pub mod builder;
mod runner;


pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
