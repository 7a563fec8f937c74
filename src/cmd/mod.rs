// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! cli (parsed args) --> cmd handlers --> platform / config
//! ```

pub mod configure;
pub mod options;
pub mod probe;
